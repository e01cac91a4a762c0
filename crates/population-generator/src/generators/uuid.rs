//! Employee identifier generator.

use rand::Rng;
use uuid::{Builder, Uuid};

/// Draw an employee id: a version 4 UUID built from 16 bytes of `rng`, so a
/// seeded record always gets the same id.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
