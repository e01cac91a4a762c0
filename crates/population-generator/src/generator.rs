//! Record synthesizer and two-phase population generation.

use crate::generators::{contact, dates, numeric, pick, uuid};
use crate::managers::assign_managers;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::RangeInclusive;
use synth_core::{Employee, Gender, Schema, SchemaError, COUNTRY};
use tracing::debug;

/// Multiplier spreading per-index seeds across the seed space.
const INDEX_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Mixed into the run seed for the manager assignment stream.
const MANAGER_STREAM: u64 = 0xD1B5_4A32_D192_ED03;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema failed validation
    #[error("Schema error: {0}")]
    SchemaError(#[from] SchemaError),
}

/// Synthesizes employee records from a validated schema.
///
/// Record `i` is a pure function of the schema, the seed, the reference
/// instant `now` and `i` itself: each index gets its own RNG, so records can
/// be produced in any order or split across workers and still come out
/// identical.
#[derive(Debug, Clone)]
pub struct PopulationGenerator {
    /// Validated organizational schema
    schema: Schema,
    /// Base seed of the run
    seed: u64,
    /// Wall-clock instant every date window closes at
    now: DateTime<Utc>,
}

impl PopulationGenerator {
    /// Create a generator. Fails if any list the records sample from is
    /// empty or a salary band is inverted.
    pub fn new(schema: Schema, seed: u64, now: DateTime<Utc>) -> Result<Self, GeneratorError> {
        schema.validate()?;
        Ok(Self { schema, seed, now })
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Compute the RNG seed for a specific record index.
    fn rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(INDEX_SEED_STRIDE))
    }

    /// Synthesize record `index` (1-based; the index also appears in the
    /// email address).
    pub fn synthesize(&self, index: u64) -> Employee {
        let mut rng = StdRng::seed_from_u64(self.rng_seed_for_index(index));
        let rng = &mut rng;
        let schema = &self.schema;

        // Department and title are drawn together, as is the office.
        let department = pick(rng, &schema.departments);
        let job_title = pick(rng, &department.job_titles);
        let location = pick(rng, &schema.office_locations);

        let gender = *pick(rng, &Gender::ALL);
        let ethnicity = pick(rng, &schema.ethnicities);

        // Only `Male` draws from the male pool; every other gender uses the
        // female pool.
        let first_name = match gender {
            Gender::Male => pick(rng, &schema.male_names),
            _ => pick(rng, &schema.female_names),
        };
        let last_name = pick(rng, &schema.last_names);

        let hire = dates::hire_instant(rng, self.now);
        let hire_date = hire.date_naive();
        let date_of_birth = dates::birth_date(rng, hire_date);

        let salary = numeric::generate_salary(rng, department.salary_range);
        let bonus = numeric::generate_bonus(rng, salary);
        let performance_rating = numeric::generate_rating(rng);
        let last_review_date = dates::last_review_date(rng, hire, self.now);

        let phone_number = contact::phone_number(rng);
        // Emergency contacts always come from the male pool.
        let emergency_contact_name = format!("{} {last_name}", pick(rng, &schema.male_names));
        let emergency_contact_phone = contact::phone_number(rng);
        let street = pick(rng, &schema.street_names);
        let address = contact::street_address(rng, street);

        let employee_id = uuid::generate_uuid_v4(rng);

        Employee {
            employee_id,
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            email: contact::email_address(first_name, last_name, index),
            phone_number,
            hire_date,
            job_title: job_title.clone(),
            department: department.name.clone(),
            manager_id: None,
            office_location: location.city.clone(),
            salary,
            bonus,
            performance_rating,
            last_review_date,
            emergency_contact_name,
            emergency_contact_phone,
            address,
            city: location.city.clone(),
            state: location.state.clone(),
            zip_code: location.zip_code.clone(),
            country: COUNTRY.to_string(),
            date_of_birth,
            gender,
            ethnicity: ethnicity.clone(),
        }
    }

    /// Lazily synthesize the records of an index range.
    pub fn records(&self, indices: RangeInclusive<u64>) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            indices,
        }
    }

    /// Run the manager assignment pass over a complete population.
    ///
    /// Uses its own RNG stream derived from the seed, so the result only
    /// depends on the population and the seed.
    pub fn assign_managers(&self, employees: &mut [Employee]) {
        let mut rng = StdRng::seed_from_u64(self.seed ^ MANAGER_STREAM);
        assign_managers(employees, &mut rng);
    }

    /// Generate a full population on the current thread.
    ///
    /// Synthesizes records `1..=total`, calling `on_progress(i)` whenever
    /// `i` is a multiple of `progress_interval` (0 disables callbacks), then
    /// assigns managers.
    pub fn generate<F>(&self, total: u64, progress_interval: u64, mut on_progress: F) -> Vec<Employee>
    where
        F: FnMut(u64),
    {
        let mut employees = Vec::with_capacity(total as usize);

        for (index, employee) in (1..=total).zip(self.records(1..=total)) {
            employees.push(employee);
            if progress_interval > 0 && index % progress_interval == 0 {
                on_progress(index);
            }
        }

        debug!("Synthesized {} records, assigning managers", employees.len());
        self.assign_managers(&mut employees);
        employees
    }
}

/// Iterator that lazily synthesizes records over an index range.
pub struct RecordIterator<'a> {
    generator: &'a PopulationGenerator,
    indices: RangeInclusive<u64>,
}

impl Iterator for RecordIterator<'_> {
    type Item = Employee;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices
            .next()
            .map(|index| self.generator.synthesize(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
