//! Employee population generator.
//!
//! This crate provides the [`PopulationGenerator`] which synthesizes
//! internally consistent employee records from an organizational
//! [`Schema`](synth_core::Schema), then assigns every record a manager drawn
//! from the same population. Generation is deterministic: the same schema,
//! seed and reference instant always produce the same population.
//!
//! # Architecture
//!
//! ```text
//! Schema (YAML / JSON)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │ PopulationGenerator  │
//! │                      │
//! │  - seed              │   phase 1: synthesize(i) for i in 1..=N
//! │  - now               │            (one StdRng per index)
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     Vec<Employee>  ──►  assign_managers  (phase 2, needs all N records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use population_generator::PopulationGenerator;
//! use synth_core::Schema;
//!
//! let schema = Schema::from_yaml(r#"
//! departments:
//!   - { name: Eng, jobTitles: [SWE], salaryRange: [100000, 100000] }
//! officeLocations:
//!   - { city: Denver, state: CO, zipCode: "80202" }
//! maleNames: [John]
//! femaleNames: [Jane]
//! lastNames: [Doe]
//! streetNames: [Elm]
//! ethnicities: [White]
//! "#).unwrap();
//!
//! let generator = PopulationGenerator::new(schema, 42, Utc::now()).unwrap();
//! let employees = generator.generate(5, 1000, |_| {});
//! assert_eq!(employees.len(), 5);
//! assert!(employees.iter().all(|e| e.manager_id != Some(e.employee_id)));
//! ```

pub mod generator;
pub mod generators;
pub mod managers;

// Re-exports for convenience
pub use generator::{GeneratorError, PopulationGenerator, RecordIterator};
pub use managers::{assign_managers, direct_report_counts};
