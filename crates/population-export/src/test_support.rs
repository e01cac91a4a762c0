use chrono::NaiveDate;
use synth_core::{Employee, Gender, COUNTRY};
use uuid::Uuid;

/// Small hand-built population; the emergency contact name carries a comma
/// so CSV quoting is exercised.
pub(crate) fn sample_employees(count: u128) -> Vec<Employee> {
    (1..=count)
        .map(|i| Employee {
            employee_id: Uuid::from_u128(i),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: format!("jane.doe{i}@examplecorp.com"),
            phone_number: "303-555-0100".to_string(),
            hire_date: NaiveDate::from_ymd_opt(2012, 4, 2).unwrap(),
            job_title: "Data Analyst".to_string(),
            department: "Finance".to_string(),
            manager_id: Some(Uuid::from_u128(if i == 1 { 2 } else { 1 })),
            office_location: "Denver".to_string(),
            salary: 85000,
            bonus: 4250,
            performance_rating: 3,
            last_review_date: NaiveDate::from_ymd_opt(2023, 2, 14).unwrap(),
            emergency_contact_name: "Doe, John".to_string(),
            emergency_contact_phone: "720-555-0199".to_string(),
            address: "100 Elm St".to_string(),
            city: "Denver".to_string(),
            state: "CO".to_string(),
            zip_code: "80202".to_string(),
            country: COUNTRY.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 9, 30).unwrap(),
            gender: Gender::Female,
            ethnicity: "Hispanic or Latino".to_string(),
        })
        .collect()
}
