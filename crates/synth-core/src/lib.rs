//! Core types for the employee-synth framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the run orchestration and the exporters:
//!
//! - [`Schema`] - Organizational blueprint (departments, offices, name pools)
//! - [`Employee`] - One synthesized employee record
//! - [`Gender`] - Fixed gender set used during synthesis
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── population-generator  (record synthesis + manager assignment)
//!    │
//!    ├─── population-run        (isolated batch run, progress events)
//!    │
//!    └─── population-export     (CSV / JSONL rows)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::Schema;
//!
//! let schema = Schema::from_yaml(r#"
//! departments:
//!   - name: Engineering
//!     jobTitles: [Software Engineer]
//!     salaryRange: [90000, 150000]
//! officeLocations:
//!   - { city: Austin, state: TX, zipCode: "73301" }
//! maleNames: [James]
//! femaleNames: [Mary]
//! lastNames: [Smith]
//! streetNames: [Main]
//! ethnicities: [Hispanic or Latino]
//! "#).unwrap();
//!
//! assert_eq!(schema.departments[0].salary_range.max, 150000);
//! ```

pub mod employee;
pub mod schema;

// Re-exports for convenience
pub use employee::{Employee, Gender, COUNTRY, DEFAULT_OUTPUT_STEM, EMAIL_DOMAIN};
pub use schema::{
    Department, InvalidSalaryBound, OfficeLocation, SalaryRange, Schema, SchemaError, MAX_SALARY,
};
