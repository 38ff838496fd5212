//! Detection of the single dominant obstacle to aurora visibility.
//!
//! Checks run in a fixed order and the first match wins: brightness, then
//! clouds, then geomagnetic activity. A window that is too bright reports
//! `too_bright` even when it is also overcast and quiet.

use qtty::Degrees;

use super::darkness::CIVIL_TWILIGHT_DEG;
use crate::models::{ForecastWindow, LimitingFactor};

/// Cloud cover (percent) above which clouds are the main obstacle.
pub const CLOUD_LIMIT: f64 = 60.0;
/// KP below which activity is too weak.
pub const LOW_KP_LIMIT: f64 = 3.0;

/// Raw readings of one window needed to name its limiting factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitingInputs {
    pub cloud_cover: f64,
    pub kp_index: f64,
    pub solar_elevation: Degrees,
}

impl From<&ForecastWindow> for LimitingInputs {
    fn from(window: &ForecastWindow) -> Self {
        Self {
            cloud_cover: window.cloud_cover,
            kp_index: window.kp_index,
            solar_elevation: window.solar_elevation,
        }
    }
}

/// Name the limiting factor of a window.
pub fn detect_limiting_factor(inputs: &LimitingInputs) -> LimitingFactor {
    if inputs.solar_elevation.value() > CIVIL_TWILIGHT_DEG {
        LimitingFactor::TooBright
    } else if inputs.cloud_cover > CLOUD_LIMIT {
        LimitingFactor::CloudCover
    } else if inputs.kp_index < LOW_KP_LIMIT {
        LimitingFactor::LowKp
    } else {
        LimitingFactor::MixedConditions
    }
}
