//! Date generators for hire, birth and review dates.
//!
//! Instants are drawn uniformly at millisecond resolution and truncated to
//! the UTC calendar date. When a range is empty or inverted the draw
//! collapses onto the range's end, so a window that closes at "now" never
//! yields a date in the future.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use rand::Rng;

/// Earliest possible hire date.
pub const HIRE_WINDOW_START: (i32, u32, u32) = (2000, 1, 1);

/// Earliest possible date of birth.
pub const BIRTH_WINDOW_START: (i32, u32, u32) = (1960, 1, 1);

/// Minimum age, in years, on the hire date.
pub const MINIMUM_HIRE_AGE: u32 = 18;

/// Days between hiring and the earliest possible review.
pub const FIRST_REVIEW_AFTER_DAYS: i64 = 30;

/// Generate a random instant in `[start, end]`.
///
/// An inverted or empty range returns `end`.
pub fn random_instant<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();

    if start_ms >= end_ms {
        return end;
    }

    let random_ms = rng.gen_range(start_ms..=end_ms);
    DateTime::from_timestamp_millis(random_ms).unwrap_or(end)
}

/// Draw the hire instant, between 2000-01-01 and `now`.
pub fn hire_instant<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    random_instant(rng, start_of(HIRE_WINDOW_START), now)
}

/// Draw a date of birth that makes the employee at least 18 on `hire_date`.
///
/// The window runs from 1960-01-01 to the hire date moved back 18 years
/// (29 February maps to 28 February). If that bound precedes 1960 the draw
/// collapses onto the bound, which still satisfies the minimum age.
pub fn birth_date<R: Rng>(rng: &mut R, hire_date: NaiveDate) -> NaiveDate {
    let latest = latest_birth_date(hire_date);
    let latest_instant = latest.and_time(chrono::NaiveTime::MIN).and_utc();
    random_instant(rng, start_of(BIRTH_WINDOW_START), latest_instant).date_naive()
}

/// Latest birth date that is still 18 years before `hire_date`.
pub fn latest_birth_date(hire_date: NaiveDate) -> NaiveDate {
    hire_date
        .checked_sub_months(Months::new(MINIMUM_HIRE_AGE * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Draw the last review date: from 30 days after hiring up to `now`.
///
/// A hire within the last 30 days leaves an empty window; the review date
/// is then `now`'s date.
pub fn last_review_date<R: Rng>(
    rng: &mut R,
    hire: DateTime<Utc>,
    now: DateTime<Utc>,
) -> NaiveDate {
    let earliest = hire + Duration::days(FIRST_REVIEW_AFTER_DAYS);
    random_instant(rng, earliest, now).date_naive()
}

fn start_of((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or(NaiveDate::MIN)
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_random_instant_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        for _ in 0..100 {
            let instant = random_instant(&mut rng, start, end);
            assert!(instant >= start && instant <= end);
        }
    }

    #[test]
    fn test_random_instant_inverted_range_collapses_to_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert_eq!(random_instant(&mut rng, start, end), end);
        assert_eq!(random_instant(&mut rng, end, end), end);
    }

    #[test]
    fn test_hire_instant_window() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let hire = hire_instant(&mut rng, now());
            assert!(hire.year() >= 2000);
            assert!(hire <= now());
        }
    }

    #[test]
    fn test_birth_date_at_least_eighteen_at_hire() {
        let mut rng = StdRng::seed_from_u64(42);
        let hire = NaiveDate::from_ymd_opt(2005, 3, 10).unwrap();

        for _ in 0..200 {
            let dob = birth_date(&mut rng, hire);
            assert!(dob.year() >= 1960);
            assert!(hire.years_since(dob).unwrap() >= MINIMUM_HIRE_AGE);
        }
    }

    #[test]
    fn test_latest_birth_date_leap_day() {
        let hire = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(
            latest_birth_date(hire),
            NaiveDate::from_ymd_opt(2002, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_birth_date_bound_before_window_clamps() {
        let mut rng = StdRng::seed_from_u64(42);
        let hire = NaiveDate::from_ymd_opt(1970, 5, 1).unwrap();

        assert_eq!(
            birth_date(&mut rng, hire),
            NaiveDate::from_ymd_opt(1952, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_last_review_date_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let hire = Utc.with_ymd_and_hms(2019, 8, 20, 16, 30, 0).unwrap();
        let earliest = NaiveDate::from_ymd_opt(2019, 9, 19).unwrap();

        for _ in 0..100 {
            let review = last_review_date(&mut rng, hire, now());
            assert!(review >= earliest);
            assert!(review <= now().date_naive());
        }
    }

    #[test]
    fn test_last_review_date_recent_hire_is_today() {
        let mut rng = StdRng::seed_from_u64(42);
        let hire = now() - Duration::days(3);

        assert_eq!(last_review_date(&mut rng, hire, now()), now().date_naive());
    }
}
