//! Numeric value generators: salaries, bonuses, ratings.

use rand::Rng;
use synth_core::SalaryRange;

/// Bonus percentages are drawn from this inclusive range.
pub const BONUS_PERCENT_MIN: i64 = 5;
pub const BONUS_PERCENT_MAX: i64 = 20;

/// Performance ratings are drawn from this inclusive range.
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generate a salary inside a department's band (inclusive).
pub fn generate_salary<R: Rng>(rng: &mut R, range: SalaryRange) -> i64 {
    generate_int_range(rng, range.min, range.max)
}

/// Draw a bonus percentage and apply it to `salary`.
pub fn generate_bonus<R: Rng>(rng: &mut R, salary: i64) -> i64 {
    let percent = generate_int_range(rng, BONUS_PERCENT_MIN, BONUS_PERCENT_MAX);
    apply_bonus_percent(salary, percent)
}

/// `salary * percent / 100`, rounded to the nearest integer.
///
/// Halves round toward positive infinity (`1234.5 -> 1235`,
/// `-1234.5 -> -1234`). Computed in `i128`; a result outside `i64`
/// saturates.
pub fn apply_bonus_percent(salary: i64, percent: i64) -> i64 {
    let bonus = (i128::from(salary) * i128::from(percent) + 50).div_euclid(100);
    bonus.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Generate a performance rating.
pub fn generate_rating<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(RATING_MIN..=RATING_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_salary_in_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = SalaryRange::new(50000, 50010);

        for _ in 0..100 {
            let salary = generate_salary(&mut rng, range);
            assert!(range.contains(salary));
        }
    }

    #[test]
    fn test_generate_salary_degenerate_band() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_salary(&mut rng, SalaryRange::new(100000, 100000)), 100000);
    }

    #[test]
    fn test_bonus_rounds_half_up() {
        // 12345 * 10% = 1234.5
        assert_eq!(apply_bonus_percent(12345, 10), 1235);
        // 12345 * 5% = 617.25
        assert_eq!(apply_bonus_percent(12345, 5), 617);
        // 12347 * 5% = 617.35
        assert_eq!(apply_bonus_percent(12347, 5), 617);
        // 12350 * 5% = 617.5
        assert_eq!(apply_bonus_percent(12350, 5), 618);
        // -12345 * 10% = -1234.5
        assert_eq!(apply_bonus_percent(-12345, 10), -1234);
        assert_eq!(apply_bonus_percent(100000, 20), 20000);
    }

    #[test]
    fn test_bonus_of_huge_salary_does_not_overflow() {
        let salary = i64::MAX / 10;
        assert_eq!(apply_bonus_percent(salary, 20), salary / 5);
        assert_eq!(apply_bonus_percent(i64::MAX, 20), 1_844_674_407_370_955_161);
        assert_eq!(apply_bonus_percent(i64::MAX, 1000), i64::MAX);
        assert_eq!(apply_bonus_percent(i64::MIN, 1000), i64::MIN);
    }

    #[test]
    fn test_generate_bonus_at_top_of_i64() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let bonus = generate_bonus(&mut rng, i64::MAX);
            assert!(bonus >= i64::MAX / 20 && bonus <= i64::MAX / 5 + 1);
        }
    }

    #[test]
    fn test_generate_bonus_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let bonus = generate_bonus(&mut rng, 100000);
            assert!((5000..=20000).contains(&bonus));
            assert_eq!(bonus % 1000, 0);
        }
    }

    #[test]
    fn test_generate_rating() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let rating = generate_rating(&mut rng);
            assert!((RATING_MIN..=RATING_MAX).contains(&rating));
        }
    }
}
