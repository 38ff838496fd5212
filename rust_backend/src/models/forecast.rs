//! Forecast input types consumed by the decision engine.

use chrono::{DateTime, Utc};
use qtty::Degrees;
use serde::{Deserialize, Serialize};

/// Direction of the geomagnetic index over the last readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl KpTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpTrend::Increasing => "increasing",
            KpTrend::Stable => "stable",
            KpTrend::Decreasing => "decreasing",
        }
    }
}

impl std::fmt::Display for KpTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn tromso() -> Self {
        Self::new("Tromsø", 69.6492, 18.9553)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::tromso()
    }
}

/// One sampled hour of the forecast horizon.
///
/// Values are taken as delivered by the upstream provider. The engine clamps
/// out-of-range `kp_index` and `cloud_cover` instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastWindow {
    pub time: DateTime<Utc>,
    /// Cloud cover in percent (0-100).
    pub cloud_cover: f64,
    /// Sun altitude above the horizon, negative below.
    pub solar_elevation: Degrees,
    /// Planetary geomagnetic index (0-9).
    pub kp_index: f64,
    /// Aurora probability published by the provider for this hour, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<u8>,
}

impl ForecastWindow {
    pub fn new(time: DateTime<Utc>, cloud_cover: f64, solar_elevation: f64, kp_index: f64) -> Self {
        Self {
            time,
            cloud_cover,
            solar_elevation: Degrees::new(solar_elevation),
            kp_index,
            probability: None,
        }
    }

    pub fn with_probability(mut self, probability: u8) -> Self {
        self.probability = Some(probability);
        self
    }
}

/// Complete input for one decision computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInput {
    /// Ordered hourly windows covering the horizon (typically 48 hours).
    #[serde(rename = "hourlyForecasts")]
    pub windows: Vec<ForecastWindow>,
    /// Current index reading, independent of the per-window values.
    pub global_kp: f64,
    pub kp_trend: KpTrend,
    /// Minutes from the reference city to the viewing spot. Only used for copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time_minutes: Option<u32>,
}

impl ForecastInput {
    pub fn new(windows: Vec<ForecastWindow>, global_kp: f64, kp_trend: KpTrend) -> Self {
        Self {
            windows,
            global_kp,
            kp_trend,
            travel_time_minutes: None,
        }
    }

    pub fn with_travel_time(mut self, minutes: u32) -> Self {
        self.travel_time_minutes = Some(minutes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Provider probability published for the window starting at `time`.
    pub fn probability_at(&self, time: DateTime<Utc>) -> Option<u8> {
        self.windows
            .iter()
            .find(|w| w.time == time)
            .and_then(|w| w.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_shape_deserializes() {
        let json = r#"{
            "hourlyForecasts": [
                {"time": "2026-01-10T20:00:00Z", "cloudCover": 20.0, "solarElevation": -25.0, "kpIndex": 5.0, "probability": 60}
            ],
            "globalKp": 4.3,
            "kpTrend": "increasing",
            "travelTimeMinutes": 45
        }"#;

        let input: ForecastInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.windows.len(), 1);
        assert_eq!(input.kp_trend, KpTrend::Increasing);
        assert_eq!(input.travel_time_minutes, Some(45));
        assert_eq!(input.windows[0].solar_elevation.value(), -25.0);
        assert_eq!(input.windows[0].probability, Some(60));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{
            "hourlyForecasts": [
                {"time": "2026-01-10T20:00:00Z", "cloudCover": 20.0, "solarElevation": -25.0, "kpIndex": 5.0}
            ],
            "globalKp": 4.0,
            "kpTrend": "stable"
        }"#;

        let input: ForecastInput = serde_json::from_str(json).unwrap();
        assert!(input.travel_time_minutes.is_none());
        assert!(input.windows[0].probability.is_none());

        let back = serde_json::to_value(&input).unwrap();
        assert!(back.get("travelTimeMinutes").is_none());
        assert!(back["hourlyForecasts"][0].get("probability").is_none());
    }

    #[test]
    fn test_probability_at_matches_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 10, 20, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2026, 1, 10, 21, 0, 0).unwrap();
        let input = ForecastInput::new(
            vec![
                ForecastWindow::new(t0, 10.0, -20.0, 4.0),
                ForecastWindow::new(t1, 10.0, -20.0, 4.0).with_probability(35),
            ],
            4.0,
            KpTrend::Stable,
        );

        assert_eq!(input.probability_at(t0), None);
        assert_eq!(input.probability_at(t1), Some(35));
    }

    #[test]
    fn test_kp_trend_display() {
        assert_eq!(KpTrend::Decreasing.to_string(), "decreasing");
    }
}
