//! Aurora visibility probability for a single observation point.
//!
//! Unlike the ADS, which ranks windows against each other, this gives an
//! absolute percentage that depends on latitude: the auroral oval only
//! reaches lower latitudes at higher KP.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use super::darkness::CIVIL_TWILIGHT_DEG;

/// Temperature at or below which the air is dry enough for a small bonus.
const COLD_AIR_C: f64 = -5.0;
/// Temperature at or above which haze costs a little visibility.
const WARM_AIR_C: f64 = 5.0;
const COLD_AIR_FACTOR: f64 = 1.05;
const WARM_AIR_FACTOR: f64 = 0.95;
/// Share of visibility a full Moon takes away.
const MOON_PENALTY: f64 = 0.3;
/// KP above the requirement at which activity saturates.
const KP_SATURATION_SPAN: f64 = 4.0;

/// (minimum latitude, KP needed to see aurora overhead or near the horizon)
const LATITUDE_KP_TABLE: [(f64, f64); 4] = [(66.0, 1.0), (62.0, 3.0), (58.0, 5.0), (54.0, 7.0)];
const FALLBACK_REQUIRED_KP: f64 = 8.0;

/// Observation conditions at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityConditions {
    pub kp_index: f64,
    /// Cloud cover in percent.
    pub cloud_cover: f64,
    /// Fog in percent, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fog: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Observer latitude in degrees.
    pub latitude: f64,
    /// Illuminated fraction of the Moon, 0-1.
    pub moon_illumination: f64,
    pub solar_elevation: Degrees,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityProbability {
    /// Probability in percent.
    pub probability: u8,
    pub is_dark: bool,
    /// KP needed at this latitude.
    pub required_kp: f64,
}

/// KP required for aurora to be visible at `latitude` (absolute value).
pub fn required_kp_for_latitude(latitude: f64) -> f64 {
    let lat = latitude.abs();
    LATITUDE_KP_TABLE
        .iter()
        .find(|(min_lat, _)| lat >= *min_lat)
        .map(|(_, kp)| *kp)
        .unwrap_or(FALLBACK_REQUIRED_KP)
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn temperature_factor(temperature_c: Option<f64>) -> f64 {
    match temperature_c {
        Some(t) if t <= COLD_AIR_C => COLD_AIR_FACTOR,
        Some(t) if t >= WARM_AIR_C => WARM_AIR_FACTOR,
        Some(_) | None => 1.0,
    }
}

/// Compute the chance of seeing aurora under the given conditions.
///
/// # Arguments
/// * `conditions` - Observation conditions; non-finite readings count as the
///   worst case for that signal
///
/// # Returns
/// The rounded probability, whether the sky is dark, and the KP requirement.
pub fn calculate_visibility_probability(
    conditions: &VisibilityConditions,
) -> VisibilityProbability {
    let required_kp = required_kp_for_latitude(conditions.latitude);
    let is_dark = conditions.solar_elevation.value() <= CIVIL_TWILIGHT_DEG;

    if !is_dark {
        return VisibilityProbability {
            probability: 0,
            is_dark,
            required_kp,
        };
    }

    let kp = finite_or(conditions.kp_index, 0.0);
    let activity = ((kp - required_kp + 1.0) / KP_SATURATION_SPAN).clamp(0.0, 1.0) * 100.0;

    let cloud = finite_or(conditions.cloud_cover, 100.0);
    let fog = conditions.fog.map(|f| finite_or(f, 100.0)).unwrap_or(0.0);
    let clarity = 1.0 - (cloud.max(fog) / 100.0).clamp(0.0, 1.0);

    let illumination = finite_or(conditions.moon_illumination, 1.0).clamp(0.0, 1.0);
    let moon = 1.0 - MOON_PENALTY * illumination;

    let raw = activity * clarity * moon * temperature_factor(conditions.temperature_c);
    log::trace!(
        "visibility: activity={:.1} clarity={:.2} moon={:.2} raw={:.2}",
        activity,
        clarity,
        moon,
        raw
    );

    VisibilityProbability {
        probability: raw.clamp(0.0, 100.0).round() as u8,
        is_dark,
        required_kp,
    }
}
