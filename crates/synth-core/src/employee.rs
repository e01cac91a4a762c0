//! Employee records produced by the population generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Country written on every record.
pub const COUNTRY: &str = "USA";

/// Domain used for generated email addresses.
pub const EMAIL_DOMAIN: &str = "examplecorp.com";

/// File stem the exporters use when no output name is given.
pub const DEFAULT_OUTPUT_STEM: &str = "employee_data";

/// Gender values a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    /// All genders, in the order they are sampled from.
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesized employee.
///
/// Field declaration order is the column order of every tabular export
/// (see [`Employee::COLUMNS`]). `manager_id` is `None` only between record
/// synthesis and manager assignment, or when the population has a single
/// member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub hire_date: NaiveDate,
    pub job_title: String,
    pub department: String,
    pub manager_id: Option<Uuid>,
    pub office_location: String,
    pub salary: i64,
    pub bonus: i64,
    pub performance_rating: u8,
    pub last_review_date: NaiveDate,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub ethnicity: String,
}

impl Employee {
    /// Column names of the tabular form, in field declaration order.
    pub const COLUMNS: [&'static str; 24] = [
        "employeeId",
        "firstName",
        "lastName",
        "email",
        "phoneNumber",
        "hireDate",
        "jobTitle",
        "department",
        "managerId",
        "officeLocation",
        "salary",
        "bonus",
        "performanceRating",
        "lastReviewDate",
        "emergencyContactName",
        "emergencyContactPhone",
        "address",
        "city",
        "state",
        "zipCode",
        "country",
        "dateOfBirth",
        "gender",
        "ethnicity",
    ];

    /// Flatten the record into scalar cells matching [`Employee::COLUMNS`].
    ///
    /// Dates are written as `YYYY-MM-DD`; a missing manager is an empty cell.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone_number.clone(),
            format_date(self.hire_date),
            self.job_title.clone(),
            self.department.clone(),
            self.manager_id.map(|id| id.to_string()).unwrap_or_default(),
            self.office_location.clone(),
            self.salary.to_string(),
            self.bonus.to_string(),
            self.performance_rating.to_string(),
            format_date(self.last_review_date),
            self.emergency_contact_name.clone(),
            self.emergency_contact_phone.clone(),
            self.address.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip_code.clone(),
            self.country.clone(),
            format_date(self.date_of_birth),
            self.gender.to_string(),
            self.ethnicity.clone(),
        ]
    }

    /// Age in whole years on the given date.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        date.years_since(self.date_of_birth).unwrap_or(0)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
