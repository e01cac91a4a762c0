//! Contact and address string generators.

use rand::Rng;
use synth_core::EMAIL_DOMAIN;

/// Build the work email for record `index`.
///
/// The index suffix keeps addresses unique within one run even when names
/// repeat.
pub fn email_address(first_name: &str, last_name: &str, index: u64) -> String {
    format!(
        "{}.{}{index}@{EMAIL_DOMAIN}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

/// Generate a phone number formatted `AAA-EEE-LLLL`.
///
/// Area code 200-999, exchange 100-999, line 1000-9999.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let area = rng.gen_range(200..=999);
    let exchange = rng.gen_range(100..=999);
    let line = rng.gen_range(1000..=9999);
    format!("{area}-{exchange}-{line}")
}

/// Generate a street address `NNNN <street> St` with a 100-9999 house number.
pub fn street_address<R: Rng>(rng: &mut R, street: &str) -> String {
    let number = rng.gen_range(100..=9999);
    format!("{number} {street} St")
}
