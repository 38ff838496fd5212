//! Mean lunar phase and illumination.
//!
//! Uses the mean synodic month from a known new moon. The true Moon drifts up
//! to about 14 hours from the mean, which is fine for a brightness penalty.

use std::f64::consts::TAU;

use chrono::{DateTime, TimeZone, Utc};

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// New moon of 2000-01-06 18:14 UTC, as Unix seconds.
fn reference_new_moon() -> DateTime<Utc> {
    Utc.timestamp_opt(947_182_440, 0)
        .single()
        .unwrap_or_default()
}

/// Fraction of the current lunation, in `[0, 1)`. 0 is new, 0.5 is full.
pub fn moon_phase(time: DateTime<Utc>) -> f64 {
    let elapsed_days = (time - reference_new_moon()).num_seconds() as f64 / SECONDS_PER_DAY;
    (elapsed_days / SYNODIC_MONTH_DAYS).rem_euclid(1.0)
}

/// Illuminated fraction of the lunar disc, in `[0, 1]`.
pub fn moon_illumination(time: DateTime<Utc>) -> f64 {
    (1.0 - (TAU * moon_phase(time)).cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_reference_instant() {
        assert_eq!(
            reference_new_moon(),
            Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap()
        );
        assert!(moon_illumination(reference_new_moon()) < 1e-9);
    }

    #[test]
    fn test_half_lunation_is_full() {
        let half_month = (SYNODIC_MONTH_DAYS / 2.0 * SECONDS_PER_DAY) as i64;
        let full = reference_new_moon() + Duration::seconds(half_month);
        assert!((moon_phase(full) - 0.5).abs() < 1e-6);
        assert!(moon_illumination(full) > 0.999);
    }

    #[test]
    fn test_phase_before_reference_wraps() {
        let earlier = reference_new_moon() - Duration::days(7);
        let phase = moon_phase(earlier);
        assert!((0.0..1.0).contains(&phase));
        assert!(phase > 0.7);
    }

    #[test]
    fn test_known_full_moon() {
        // Full moon of 2026-01-03 10:03 UTC
        let full = Utc.with_ymd_and_hms(2026, 1, 3, 10, 3, 0).unwrap();
        assert!(moon_illumination(full) > 0.95);
    }

    #[test]
    fn test_known_new_moon() {
        // New moon of 2026-01-18 19:52 UTC
        let new = Utc.with_ymd_and_hms(2026, 1, 18, 19, 52, 0).unwrap();
        assert!(moon_illumination(new) < 0.05);
    }
}
