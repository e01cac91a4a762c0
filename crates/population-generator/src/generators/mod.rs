//! Individual value generators for employee record fields.
//!
//! Each submodule draws one family of values (dates, numbers, contact
//! strings, identifiers) from the caller's RNG. None of them hold state:
//! the record synthesizer owns the RNG and the order of draws.

pub mod contact;
pub mod dates;
pub mod numeric;
pub mod uuid;

use rand::Rng;

/// Pick one element uniformly at random.
///
/// Callers must pass a non-empty slice; every list a record samples from
/// is checked by schema validation before generation starts.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
