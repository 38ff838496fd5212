//! Forecast validation with detailed error and warning reporting.
//!
//! The engine tolerates most bad readings by clamping them, so nearly every
//! issue here is a warning. The only error is an empty forecast, which the
//! engine cannot produce a decision for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::algorithms::ads::{MAX_CLOUD_COVER, MAX_KP};
use crate::algorithms::darkness::is_dark_enough;
use crate::models::ForecastInput;

/// Per-category cap on individual warning messages.
const MAX_LISTED_WARNINGS: usize = 5;

/// Validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false, while warnings are informational and don't
/// fail validation.
///
/// # Examples
///
/// ```
/// use aurora_rust::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Forecast contains no windows".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
///
/// # Fields
///
/// * `total_windows` - Number of windows in the forecast
/// * `dark_windows` - Windows with the Sun at or below civil twilight
/// * `out_of_range_kp` - KP readings outside `[0, 9]`
/// * `out_of_range_cloud` - Cloud readings outside `[0, 100]`
/// * `non_finite_values` - NaN or infinite readings of any kind
/// * `unordered_timestamps` - Windows earlier than their predecessor
/// * `duplicate_timestamps` - Windows repeating an earlier timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_windows: usize,
    pub dark_windows: usize,
    pub out_of_range_kp: usize,
    pub out_of_range_cloud: usize,
    pub non_finite_values: usize,
    pub unordered_timestamps: usize,
    pub duplicate_timestamps: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Adds a warning unless `count` already exceeds the listing cap.
    fn add_capped_warning(&mut self, count: usize, warning: String) {
        if count <= MAX_LISTED_WARNINGS {
            self.add_warning(warning);
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for forecast requests.
pub struct ForecastValidator;

impl ForecastValidator {
    /// Validates a forecast request without modifying it.
    ///
    /// Performs:
    /// - Empty forecast detection (error)
    /// - KP and cloud range checks (warnings)
    /// - Non-finite reading detection (warnings)
    /// - Timestamp ordering and uniqueness checks (warnings)
    ///
    /// # Arguments
    ///
    /// * `input` - Forecast request to validate
    ///
    /// # Returns
    ///
    /// `ValidationResult` containing all errors, warnings, and statistics.
    pub fn validate(input: &ForecastInput) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_windows = input.windows.len();

        if input.windows.is_empty() {
            result.add_error("Forecast contains no windows".to_string());
            return result;
        }

        if !input.global_kp.is_finite() {
            result.stats.non_finite_values += 1;
            result.add_warning(format!("Non-finite global KP: {}", input.global_kp));
        } else if !(0.0..=MAX_KP).contains(&input.global_kp) {
            result.add_warning(format!("Global KP out of range: {}", input.global_kp));
        }

        Self::check_readings(input, &mut result);
        Self::check_timestamps(input, &mut result);

        let stats = &result.stats;
        for (label, count) in [
            ("out-of-range KP readings", stats.out_of_range_kp),
            ("out-of-range cloud readings", stats.out_of_range_cloud),
            ("non-finite readings", stats.non_finite_values),
        ] {
            if count > MAX_LISTED_WARNINGS {
                let summary = format!(
                    "Total {}: {} (showing first {})",
                    label, count, MAX_LISTED_WARNINGS
                );
                result.add_warning(summary);
            }
        }

        log::debug!(
            "Validated {} windows: {} errors, {} warnings",
            result.stats.total_windows,
            result.errors.len(),
            result.warnings.len()
        );

        result
    }

    fn check_readings(input: &ForecastInput, result: &mut ValidationResult) {
        for window in &input.windows {
            let elevation = window.solar_elevation.value();

            for (name, value) in [
                ("kpIndex", window.kp_index),
                ("cloudCover", window.cloud_cover),
                ("solarElevation", elevation),
            ] {
                if !value.is_finite() {
                    result.stats.non_finite_values += 1;
                    let count = result.stats.non_finite_values;
                    result.add_capped_warning(
                        count,
                        format!("Non-finite {} at {}: {}", name, window.time, value),
                    );
                }
            }

            if window.kp_index.is_finite() && !(0.0..=MAX_KP).contains(&window.kp_index) {
                result.stats.out_of_range_kp += 1;
                let count = result.stats.out_of_range_kp;
                result.add_capped_warning(
                    count,
                    format!("KP out of range at {}: {}", window.time, window.kp_index),
                );
            }

            if window.cloud_cover.is_finite()
                && !(0.0..=MAX_CLOUD_COVER).contains(&window.cloud_cover)
            {
                result.stats.out_of_range_cloud += 1;
                let count = result.stats.out_of_range_cloud;
                result.add_capped_warning(
                    count,
                    format!("Cloud cover out of range at {}: {}", window.time, window.cloud_cover),
                );
            }

            if is_dark_enough(window.solar_elevation) {
                result.stats.dark_windows += 1;
            }
        }
    }

    fn check_timestamps(input: &ForecastInput, result: &mut ValidationResult) {
        let mut seen = HashSet::with_capacity(input.windows.len());

        for (idx, window) in input.windows.iter().enumerate() {
            if !seen.insert(window.time) {
                result.stats.duplicate_timestamps += 1;
                result.add_warning(format!("Duplicate timestamp: {}", window.time));
            }

            if idx > 0 && window.time < input.windows[idx - 1].time {
                result.stats.unordered_timestamps += 1;
                result.add_warning(format!(
                    "Window at {} precedes the previous window at {}",
                    window.time,
                    input.windows[idx - 1].time
                ));
            }
        }
    }
}

/// Validate a forecast request. See [`ForecastValidator::validate`].
pub fn validate_forecast(input: &ForecastInput) -> ValidationResult {
    ForecastValidator::validate(input)
}
