//! Assembly of engine input from raw hourly provider readings.
//!
//! Providers deliver cloud cover and KP per hour but no Sun position. The
//! assembler computes solar elevation for the configured location, orders
//! the readings and removes repeated hours.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::astro::solar::solar_elevation;
use crate::error::{DecisionError, DecisionResult};
use crate::models::{ForecastInput, ForecastWindow, KpTrend, Location};

/// One hour as delivered by a weather/space-weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyReading {
    pub time: DateTime<Utc>,
    pub cloud_cover: f64,
    pub kp_index: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<u8>,
}

/// Build a [`ForecastInput`] for `location` from raw readings.
///
/// # Arguments
/// * `location` - Observation site used for the Sun position
/// * `readings` - Hourly readings in any order
/// * `global_kp` - Current index reading
/// * `kp_trend` - Direction of the index
/// * `travel_time_minutes` - Travel time to the viewing spot, if known
///
/// # Errors
/// Returns `DecisionError::EmptyForecast` when `readings` is empty.
pub fn assemble_forecast(
    location: &Location,
    readings: &[HourlyReading],
    global_kp: f64,
    kp_trend: KpTrend,
    travel_time_minutes: Option<u32>,
) -> DecisionResult<ForecastInput> {
    if readings.is_empty() {
        return Err(DecisionError::EmptyForecast);
    }

    // Stable sort keeps the first of equal timestamps in front
    let mut ordered: Vec<&HourlyReading> = readings.iter().collect();
    ordered.sort_by_key(|r| r.time);
    let before = ordered.len();
    ordered.dedup_by_key(|r| r.time);

    if ordered.len() < before {
        log::debug!(
            "Dropped {} duplicate readings for {}",
            before - ordered.len(),
            location.name
        );
    }

    let windows = ordered
        .into_iter()
        .map(|r| ForecastWindow {
            time: r.time,
            cloud_cover: r.cloud_cover,
            solar_elevation: solar_elevation(location.latitude, location.longitude, r.time),
            kp_index: r.kp_index,
            probability: r.probability,
        })
        .collect();

    Ok(ForecastInput {
        windows,
        global_kp,
        kp_trend,
        travel_time_minutes,
    })
}
