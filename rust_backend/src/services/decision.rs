//! Decision orchestration.
//!
//! One pure pipeline from a forecast request and an explicit `now` to a
//! [`Decision`]:
//!
//! 1. reject an empty forecast
//! 2. score every window
//! 3. find the globally best window (highest ADS, earliest on ties)
//! 4. name its limiting factor
//! 5. resolve the global state through the darkness and imminence gates
//! 6. derive UI directives
//! 7. render the explanation
//!
//! The same `(input, now)` always gives the same decision.

use chrono::{DateTime, Offset, Utc};

use crate::algorithms::ads::calculate_ads;
use crate::algorithms::darkness::is_dark_enough;
use crate::algorithms::explanation::{generate_explanation, ExplanationInput, ExplanationStyle};
use crate::algorithms::global_state::{best_index_by, resolve_global_state};
use crate::algorithms::limiting_factor::{detect_limiting_factor, LimitingInputs};
use crate::algorithms::ui_directives::generate_ui_directives;
use crate::config::EngineConfig;
use crate::error::{DecisionError, DecisionResult};
use crate::models::{Decision, ForecastInput, ScoredWindow};

/// Score every window of a forecast, in input order.
pub fn score_windows(input: &ForecastInput) -> Vec<ScoredWindow> {
    input
        .windows
        .iter()
        .map(|window| {
            let ads = calculate_ads(
                window.kp_index,
                window.cloud_cover,
                window.solar_elevation,
                input.kp_trend,
                window.time.date_naive(),
            );
            ScoredWindow {
                time: window.time,
                ads: ads.score,
                classification: ads.classification,
                is_dark_enough: is_dark_enough(window.solar_elevation),
            }
        })
        .collect()
}

/// Decision engine bound to a rendering style.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    style: ExplanationStyle,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let style = config.explanation_style().unwrap_or_else(|e| {
            log::warn!("{}; rendering times in UTC", e);
            ExplanationStyle {
                reference_city: config.location.name.clone(),
                utc_offset: Utc.fix(),
            }
        });
        Self { style }
    }

    pub fn with_style(style: ExplanationStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ExplanationStyle {
        &self.style
    }

    /// Compute the decision for `input` as of `now`.
    ///
    /// # Arguments
    /// * `input` - Forecast request with at least one window
    /// * `now` - Reference instant for the imminence gate and `computed_at`
    ///
    /// # Errors
    /// Returns `DecisionError::EmptyForecast` when the forecast has no windows.
    pub fn compute(&self, input: &ForecastInput, now: DateTime<Utc>) -> DecisionResult<Decision> {
        if input.is_empty() {
            return Err(DecisionError::EmptyForecast);
        }

        let windows = score_windows(input);

        let global_best =
            best_index_by(&windows, |_| true).ok_or(DecisionError::EmptyForecast)?;
        let limiting_factor =
            detect_limiting_factor(&LimitingInputs::from(&input.windows[global_best]));

        let resolution =
            resolve_global_state(&windows, limiting_factor, Some(&input.windows), now)?;
        let ui_directives = generate_ui_directives(&windows);

        let explanation = generate_explanation(
            &ExplanationInput {
                state: resolution.state,
                best_window_ads: resolution.best_window.ads,
                best_window_start: resolution.best_window.start,
                limiting_factor,
                next_window_start: resolution.next_window.as_ref().map(|w| w.start),
                travel_time_minutes: input.travel_time_minutes,
            },
            &self.style,
        );

        log::debug!(
            "Decision over {} windows: {} (best ADS {} at {}, limited by {})",
            windows.len(),
            resolution.state,
            resolution.best_window.ads,
            resolution.best_window.start,
            limiting_factor.as_str()
        );

        Ok(Decision {
            state: resolution.state,
            best_window: resolution.best_window,
            next_window: resolution.next_window,
            windows,
            ui_directives,
            explanation,
            computed_at: now,
        })
    }
}

/// Compute a decision with the default style (Tromsø, UTC clock times).
pub fn compute_decision(input: &ForecastInput, now: DateTime<Utc>) -> DecisionResult<Decision> {
    DecisionEngine::default().compute(input, now)
}
