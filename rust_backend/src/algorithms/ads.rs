//! Aurora Decision Score (ADS) calculation.
//!
//! Combines four independent signals into one 0-100 score per window:
//!
//! | signal    | contribution                      |
//! |-----------|-----------------------------------|
//! | KP index  | 35% of `kp / 9 * 100`             |
//! | cloud     | 35% of `100 - cloud_cover`        |
//! | darkness  | 25% of the darkness factor        |
//! | KP trend  | +5 (increasing/stable), -5 (decreasing) |
//!
//! With clamped inputs the raw sum ranges from -5 to 100. It is clamped to
//! `[0, 100]` and rounded to a whole score. Weights are fixed; they are not a runtime
//! parameter.

use chrono::NaiveDate;
use qtty::Degrees;
use serde::{Deserialize, Serialize};

use super::darkness::darkness_factor;
use crate::models::{Classification, KpTrend};

pub const KP_WEIGHT: f64 = 0.35;
pub const CLOUD_WEIGHT: f64 = 0.35;
pub const DARKNESS_WEIGHT: f64 = 0.25;
/// Flat additive bonus (or penalty) from the KP trend.
pub const TREND_BONUS: f64 = 5.0;

pub const MAX_KP: f64 = 9.0;
pub const MAX_CLOUD_COVER: f64 = 100.0;
pub const MAX_SCORE: f64 = 100.0;

/// Scores at or above this are `excellent`.
pub const EXCELLENT_THRESHOLD: u8 = 70;
/// Scores at or above this are `good`.
pub const GOOD_THRESHOLD: u8 = 50;
/// Scores at or above this are `moderate`; below is `poor`.
pub const MODERATE_THRESHOLD: u8 = 30;

/// Per-signal contribution to a score, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsBreakdown {
    pub kp: f64,
    pub cloud: f64,
    pub darkness: f64,
    pub trend: f64,
    /// Sum of the components before clamping.
    pub raw: f64,
}

/// Score for a single window together with its label and breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsResult {
    pub score: u8,
    pub classification: Classification,
    pub breakdown: AdsBreakdown,
}

/// Clamp a KP reading into `[0, 9]`. Unusable readings count as no activity.
pub fn clamp_kp(kp: f64) -> f64 {
    if kp.is_finite() {
        kp.clamp(0.0, MAX_KP)
    } else {
        0.0
    }
}

/// Clamp a cloud cover reading into `[0, 100]`. Unusable readings count as overcast.
pub fn clamp_cloud_cover(cloud_cover: f64) -> f64 {
    if cloud_cover.is_finite() {
        cloud_cover.clamp(0.0, MAX_CLOUD_COVER)
    } else {
        MAX_CLOUD_COVER
    }
}

fn trend_points(trend: KpTrend) -> f64 {
    match trend {
        KpTrend::Increasing | KpTrend::Stable => TREND_BONUS,
        KpTrend::Decreasing => -TREND_BONUS,
    }
}

/// Map a score to its classification label.
pub fn classify(score: u8) -> Classification {
    if score >= EXCELLENT_THRESHOLD {
        Classification::Excellent
    } else if score >= GOOD_THRESHOLD {
        Classification::Good
    } else if score >= MODERATE_THRESHOLD {
        Classification::Moderate
    } else {
        Classification::Poor
    }
}

/// Compute the ADS for one window.
///
/// # Arguments
/// * `kp_index` - Geomagnetic index, clamped to `[0, 9]`
/// * `cloud_cover` - Cloud percentage, clamped to `[0, 100]`
/// * `solar_elevation` - Sun altitude, converted to darkness
/// * `trend` - Direction of the KP index
/// * `date` - Calendar date of the window, for seasonal darkness overrides
pub fn calculate_ads(
    kp_index: f64,
    cloud_cover: f64,
    solar_elevation: Degrees,
    trend: KpTrend,
    date: NaiveDate,
) -> AdsResult {
    let kp = clamp_kp(kp_index);
    let cloud = clamp_cloud_cover(cloud_cover);
    let darkness = darkness_factor(solar_elevation, date);

    let breakdown = {
        let kp_points = (kp / MAX_KP) * 100.0 * KP_WEIGHT;
        let cloud_points = (MAX_CLOUD_COVER - cloud) * CLOUD_WEIGHT;
        let darkness_points = darkness * DARKNESS_WEIGHT;
        let trend_points = trend_points(trend);
        AdsBreakdown {
            kp: kp_points,
            cloud: cloud_points,
            darkness: darkness_points,
            trend: trend_points,
            raw: kp_points + cloud_points + darkness_points + trend_points,
        }
    };

    let score = breakdown.raw.clamp(0.0, MAX_SCORE).round() as u8;

    AdsResult {
        score,
        classification: classify(score),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winter_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    #[test]
    fn test_maximum_inputs_clamp_to_100() {
        let result =
            calculate_ads(9.0, 0.0, Degrees::new(-30.0), KpTrend::Increasing, winter_day());
        assert_eq!(result.score, 100);
        assert!((result.breakdown.raw - 100.0).abs() < 1e-9);
        assert_eq!(result.classification, Classification::Excellent);
    }

    #[test]
    fn test_minimum_inputs_clamp_to_0() {
        let result =
            calculate_ads(0.0, 100.0, Degrees::new(20.0), KpTrend::Decreasing, winter_day());
        assert_eq!(result.score, 0);
        assert!((result.breakdown.raw + 5.0).abs() < 1e-9);
        assert_eq!(result.classification, Classification::Poor);
    }

    #[test]
    fn test_breakdown_components() {
        let result = calculate_ads(4.5, 40.0, Degrees::new(-9.0), KpTrend::Stable, winter_day());
        assert!((result.breakdown.kp - 17.5).abs() < 1e-9);
        assert!((result.breakdown.cloud - 21.0).abs() < 1e-9);
        assert!((result.breakdown.darkness - 6.25).abs() < 1e-9);
        assert_eq!(result.breakdown.trend, 5.0);
        // 17.5 + 21 + 6.25 + 5 = 49.75
        assert_eq!(result.score, 50);
        assert_eq!(result.classification, Classification::Good);
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let clamped =
            calculate_ads(12.0, -20.0, Degrees::new(-30.0), KpTrend::Stable, winter_day());
        let bounded = calculate_ads(9.0, 0.0, Degrees::new(-30.0), KpTrend::Stable, winter_day());
        assert_eq!(clamped.score, bounded.score);
        assert_eq!(clamped.breakdown, bounded.breakdown);
    }

    #[test]
    fn test_non_finite_readings() {
        assert_eq!(clamp_kp(f64::NAN), 0.0);
        assert_eq!(clamp_cloud_cover(f64::INFINITY), 100.0);
        let elevation = Degrees::new(-30.0);
        let result = calculate_ads(f64::NAN, f64::NAN, elevation, KpTrend::Stable, winter_day());
        assert_eq!(result.score, 30);
    }

    #[test]
    fn test_trend_direction() {
        let up = calculate_ads(5.0, 50.0, Degrees::new(-20.0), KpTrend::Increasing, winter_day());
        let flat = calculate_ads(5.0, 50.0, Degrees::new(-20.0), KpTrend::Stable, winter_day());
        let down = calculate_ads(5.0, 50.0, Degrees::new(-20.0), KpTrend::Decreasing, winter_day());
        assert_eq!(up.score, flat.score);
        assert_eq!(up.score - down.score, 10);
    }

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(classify(100), Classification::Excellent);
        assert_eq!(classify(70), Classification::Excellent);
        assert_eq!(classify(69), Classification::Good);
        assert_eq!(classify(50), Classification::Good);
        assert_eq!(classify(49), Classification::Moderate);
        assert_eq!(classify(30), Classification::Moderate);
        assert_eq!(classify(29), Classification::Poor);
        assert_eq!(classify(0), Classification::Poor);
    }

    #[test]
    fn test_midnight_sun_removes_darkness_points() {
        let june = NaiveDate::from_ymd_opt(2026, 6, 20).unwrap();
        let result = calculate_ads(5.0, 0.0, Degrees::new(-20.0), KpTrend::Stable, june);
        assert_eq!(result.breakdown.darkness, 0.0);
    }
}
