//! Organizational schema consumed by the population generator.
//!
//! A [`Schema`] enumerates the departments (with job titles and salary
//! bands), office locations and the name pools every employee record is
//! drawn from. It is produced by an external collaborator (typically a
//! generative model asked for a JSON document) and is treated as an
//! immutable value object once loaded.
//!
//! ## File formats
//!
//! - `.json` files are parsed with `serde_json`
//! - everything else is parsed as YAML (which also accepts plain JSON)
//!
//! Field names follow the collaborator's camelCase contract
//! (`officeLocations`, `jobTitles`, `salaryRange`, `zipCode`, ...).
//!
//! Every loaded schema is validated before it is returned, so a
//! [`Schema`] obtained through [`Schema::from_file`], [`Schema::from_yaml`]
//! or [`Schema::from_json`] is always safe to sample from.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A list every record samples from is empty
    #[error("Schema list '{field}' must not be empty")]
    EmptyList { field: &'static str },

    /// A department has no job titles to pick from
    #[error("Department '{department}' has no job titles")]
    EmptyJobTitles { department: String },

    /// A department's salary band is inverted
    #[error("Department '{department}' has an inverted salary range [{min}, {max}]")]
    InvertedSalaryRange {
        department: String,
        min: i64,
        max: i64,
    },

    /// A department's salary band leaves the representable range
    #[error(
        "Department '{department}' has a salary range [{min}, {max}] outside ±{limit}",
        limit = MAX_SALARY
    )]
    SalaryOutOfRange {
        department: String,
        min: i64,
        max: i64,
    },
}

/// Largest salary magnitude a band may hold (2^53, the last integer a JSON
/// number carries exactly).
pub const MAX_SALARY: i64 = 1 << 53;

/// Rejected salary band bound in a schema document.
#[derive(Debug, thiserror::Error)]
#[error("salary range bound {value} is not a finite number within ±{limit}", limit = MAX_SALARY)]
pub struct InvalidSalaryBound {
    pub value: f64,
}

// ============================================================================
// Schema Types
// ============================================================================

/// Inclusive annual salary band of a department.
///
/// Serialized as a two-element `[min, max]` array. Fractional bounds are
/// accepted on input and narrowed to the integer band they contain
/// (`min` rounds up, `max` rounds down). NaN, infinite and out-of-range
/// bounds fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(i64, i64)")]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `salary` lies inside the band (inclusive).
    pub fn contains(&self, salary: i64) -> bool {
        (self.min..=self.max).contains(&salary)
    }

    /// Whether both bounds lie within `±MAX_SALARY`.
    pub fn is_representable(&self) -> bool {
        let limit = -MAX_SALARY..=MAX_SALARY;
        limit.contains(&self.min) && limit.contains(&self.max)
    }
}

impl TryFrom<(f64, f64)> for SalaryRange {
    type Error = InvalidSalaryBound;

    fn try_from((min, max): (f64, f64)) -> Result<Self, Self::Error> {
        Ok(Self {
            min: salary_bound(min.ceil())?,
            max: salary_bound(max.floor())?,
        })
    }
}

fn salary_bound(value: f64) -> Result<i64, InvalidSalaryBound> {
    let limit = MAX_SALARY as f64;
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value as i64)
    } else {
        Err(InvalidSalaryBound { value })
    }
}

impl From<SalaryRange> for (i64, i64) {
    fn from(range: SalaryRange) -> Self {
        (range.min, range.max)
    }
}

/// A department: its name, the job titles it employs and its salary band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub job_titles: Vec<String>,
    pub salary_range: SalaryRange,
}

impl Department {
    pub fn new(
        name: impl Into<String>,
        job_titles: Vec<String>,
        salary_range: SalaryRange,
    ) -> Self {
        Self {
            name: name.into(),
            job_titles,
            salary_range,
        }
    }
}

/// An office location. City, state and zip code are always drawn together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeLocation {
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl OfficeLocation {
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }
}

/// Organizational blueprint for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub departments: Vec<Department>,
    pub office_locations: Vec<OfficeLocation>,
    pub male_names: Vec<String>,
    pub female_names: Vec<String>,
    pub last_names: Vec<String>,
    pub street_names: Vec<String>,
    pub ethnicities: Vec<String>,
}

impl Schema {
    /// Load and validate a schema from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse and validate a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Parse and validate a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check that every list a record samples from is non-empty and every
    /// salary band is well-formed. Reports the first violation found.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let lists: [(&'static str, usize); 7] = [
            ("departments", self.departments.len()),
            ("officeLocations", self.office_locations.len()),
            ("maleNames", self.male_names.len()),
            ("femaleNames", self.female_names.len()),
            ("lastNames", self.last_names.len()),
            ("streetNames", self.street_names.len()),
            ("ethnicities", self.ethnicities.len()),
        ];
        if let Some(&(field, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(SchemaError::EmptyList { field });
        }

        for department in &self.departments {
            if department.job_titles.is_empty() {
                return Err(SchemaError::EmptyJobTitles {
                    department: department.name.clone(),
                });
            }
            let range = department.salary_range;
            if !range.is_representable() {
                return Err(SchemaError::SalaryOutOfRange {
                    department: department.name.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
            if range.min > range.max {
                return Err(SchemaError::InvertedSalaryRange {
                    department: department.name.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
        }

        Ok(())
    }

    /// Get a department by name.
    pub fn get_department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Get all department names.
    pub fn department_names(&self) -> Vec<&str> {
        self.departments.iter().map(|d| d.name.as_str()).collect()
    }

    /// Total number of job titles across all departments.
    pub fn job_title_count(&self) -> usize {
        self.departments.iter().map(|d| d.job_titles.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA_YAML: &str = r#"
departments:
  - name: Engineering
    jobTitles: [Software Engineer, Staff Engineer]
    salaryRange: [95000, 180000]
  - name: Customer Support
    jobTitles: [Support Specialist]
    salaryRange: [42000.5, 61000.9]
officeLocations:
  - city: Austin
    state: TX
    zipCode: "73301"
maleNames: [James, Robert]
femaleNames: [Mary, Patricia]
lastNames: [Smith, Johnson]
streetNames: [Main, Oak]
ethnicities: [Asian, White]
"#;

    #[test]
    fn test_parse_yaml_schema() {
        let schema = Schema::from_yaml(SCHEMA_YAML).unwrap();

        assert_eq!(schema.departments.len(), 2);
        assert_eq!(schema.department_names(), vec!["Engineering", "Customer Support"]);
        assert_eq!(schema.job_title_count(), 3);
        assert_eq!(schema.office_locations[0].zip_code, "73301");

        let engineering = schema.get_department("Engineering").unwrap();
        assert_eq!(engineering.salary_range, SalaryRange::new(95000, 180000));
        assert!(schema.get_department("Legal").is_none());
    }

    #[test]
    fn test_fractional_salary_range_narrows_to_integers() {
        let schema = Schema::from_yaml(SCHEMA_YAML).unwrap();
        let support = schema.get_department("Customer Support").unwrap();

        assert_eq!(support.salary_range, SalaryRange::new(42001, 61000));
        assert!(support.salary_range.contains(42001));
        assert!(!support.salary_range.contains(42000));
    }

    #[test]
    fn test_parse_json_schema() {
        let json = r#"{
            "departments": [{"name": "Eng", "jobTitles": ["SWE"], "salaryRange": [100000, 100000]}],
            "officeLocations": [{"city": "Denver", "state": "CO", "zipCode": "80202"}],
            "maleNames": ["John"],
            "femaleNames": ["Jane"],
            "lastNames": ["Doe"],
            "streetNames": ["Elm"],
            "ethnicities": ["White"]
        }"#;
        let schema = Schema::from_json(json).unwrap();

        assert_eq!(schema.departments[0].job_titles, vec!["SWE"]);
        assert_eq!(schema.departments[0].salary_range.min, 100000);
    }

    #[test]
    fn test_salary_range_serializes_as_integer_pair() {
        let department = Department::new(
            "Eng",
            vec!["SWE".to_string()],
            SalaryRange::new(100, 200),
        );
        let json = serde_json::to_value(&department).unwrap();

        assert_eq!(json["salaryRange"], serde_json::json!([100, 200]));
        assert_eq!(json["jobTitles"], serde_json::json!(["SWE"]));
    }

    #[test]
    fn test_missing_field_fails_to_parse() {
        let yaml = r#"
departments: []
officeLocations: []
"#;
        assert!(matches!(
            Schema::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }

    #[test]
    fn test_empty_list_rejected() {
        let yaml = SCHEMA_YAML.replace("streetNames: [Main, Oak]", "streetNames: []");
        let err = Schema::from_yaml(&yaml).unwrap_err();

        assert!(matches!(
            err,
            SchemaError::EmptyList {
                field: "streetNames"
            }
        ));
    }

    #[test]
    fn test_empty_job_titles_rejected() {
        let yaml = SCHEMA_YAML.replace("jobTitles: [Support Specialist]", "jobTitles: []");
        let err = Schema::from_yaml(&yaml).unwrap_err();

        match err {
            SchemaError::EmptyJobTitles { department } => {
                assert_eq!(department, "Customer Support")
            }
            other => panic!("Expected EmptyJobTitles, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_salary_range_rejected() {
        let yaml = SCHEMA_YAML.replace("[95000, 180000]", "[180000, 95000]");
        let err = Schema::from_yaml(&yaml).unwrap_err();

        assert!(matches!(
            err,
            SchemaError::InvertedSalaryRange {
                min: 180000,
                max: 95000,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_salary_bounds_rejected() {
        let nan = SCHEMA_YAML.replace("[95000, 180000]", "[.nan, 180000]");
        assert!(matches!(
            Schema::from_yaml(&nan),
            Err(SchemaError::YamlError(_))
        ));

        let inf = SCHEMA_YAML.replace("[95000, 180000]", "[95000, .inf]");
        let err = Schema::from_yaml(&inf).unwrap_err();
        assert!(err.to_string().contains("not a finite number"), "{err}");
    }

    #[test]
    fn test_huge_salary_bound_rejected_when_parsing() {
        let json = r#"{
            "departments": [{"name": "Eng", "jobTitles": ["SWE"], "salaryRange": [0, 1e300]}],
            "officeLocations": [{"city": "Denver", "state": "CO", "zipCode": "80202"}],
            "maleNames": ["John"],
            "femaleNames": ["Jane"],
            "lastNames": ["Doe"],
            "streetNames": ["Elm"],
            "ethnicities": ["White"]
        }"#;
        assert!(matches!(
            Schema::from_json(json),
            Err(SchemaError::JsonError(_))
        ));
    }

    #[test]
    fn test_salary_range_outside_limit_fails_validation() {
        let mut schema = Schema::from_yaml(SCHEMA_YAML).unwrap();
        schema.departments[0].salary_range = SalaryRange::new(0, i64::MAX / 10);

        match schema.validate().unwrap_err() {
            SchemaError::SalaryOutOfRange { department, .. } => {
                assert_eq!(department, "Engineering")
            }
            other => panic!("Expected SalaryOutOfRange, got {other:?}"),
        }

        schema.departments[0].salary_range = SalaryRange::new(MAX_SALARY, MAX_SALARY);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();

        let yaml_path = dir.path().join("schema.yaml");
        fs::write(&yaml_path, SCHEMA_YAML).unwrap();
        let from_yaml = Schema::from_file(&yaml_path).unwrap();

        let json_path = dir.path().join("schema.json");
        fs::write(&json_path, serde_json::to_string(&from_yaml).unwrap()).unwrap();
        let from_json = Schema::from_file(&json_path).unwrap();

        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Schema::from_file("/nonexistent/schema.yaml");
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }
}
