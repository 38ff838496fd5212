//! Global state resolution over all scored windows.
//!
//! Two gates sit between a high score and an `excellent` verdict:
//!
//! 1. **Darkness gate**: only windows with the Sun at or below civil twilight
//!    can be recommended. When no window is dark, the best bright window is
//!    still reported but the verdict is always `unlikely`.
//! 2. **Imminence gate**: a dark best window more than 30 minutes away is
//!    capped at `possible`, so a peak later tonight never reads as "go now".
//!
//! When the verdict is `unlikely`, the first upcoming window scoring at least
//! 30 is reported as the next window to watch.

use chrono::{DateTime, Duration, Utc};

use super::ads::{classify, EXCELLENT_THRESHOLD, MODERATE_THRESHOLD};
use crate::error::{DecisionError, DecisionResult};
use crate::models::{
    BestWindow, ForecastWindow, GlobalState, LimitingFactor, NextWindow, ScoredWindow,
};

/// Maximum lead time for a window to count as "now".
pub const IMMINENCE_MINUTES: i64 = 30;
/// Every forecast window covers one hour.
pub const WINDOW_DURATION_MINUTES: i64 = 60;

/// Outcome of the global resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalResolution {
    pub state: GlobalState,
    pub best_window: BestWindow,
    pub next_window: Option<NextWindow>,
}

/// Index of the highest-scoring window accepted by `filter`. Earliest wins ties.
pub(crate) fn best_index_by<F>(windows: &[ScoredWindow], filter: F) -> Option<usize>
where
    F: Fn(&ScoredWindow) -> bool,
{
    let mut best: Option<usize> = None;
    for (idx, window) in windows.iter().enumerate() {
        if !filter(window) {
            continue;
        }
        let is_better = match best {
            Some(current) => window.ads > windows[current].ads,
            None => true,
        };
        if is_better {
            best = Some(idx);
        }
    }
    best
}

fn state_for_score(ads: u8) -> GlobalState {
    if ads >= EXCELLENT_THRESHOLD {
        GlobalState::Excellent
    } else if ads >= MODERATE_THRESHOLD {
        GlobalState::Possible
    } else {
        GlobalState::Unlikely
    }
}

fn window_end(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::minutes(WINDOW_DURATION_MINUTES)
}

/// Whether a window starting at `start` is close enough to recommend going out now.
pub fn is_imminent(start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start - now <= Duration::minutes(IMMINENCE_MINUTES) && window_end(start) > now
}

/// Resolve the verdict for the whole forecast horizon.
///
/// # Arguments
/// * `windows` - All scored windows, in forecast order
/// * `limiting_factor` - Limiting factor of the globally best-scoring window
/// * `forecasts` - Original provider windows, used to echo provider probability
/// * `now` - Reference instant for the imminence gate
///
/// # Errors
/// Returns `DecisionError::EmptyForecast` when `windows` is empty.
pub fn resolve_global_state(
    windows: &[ScoredWindow],
    limiting_factor: LimitingFactor,
    forecasts: Option<&[ForecastWindow]>,
    now: DateTime<Utc>,
) -> DecisionResult<GlobalResolution> {
    let candidate_idx = best_index_by(windows, |w| w.is_dark_enough)
        .or_else(|| best_index_by(windows, |_| true))
        .ok_or(DecisionError::EmptyForecast)?;
    let candidate = &windows[candidate_idx];

    let state = if !candidate.is_dark_enough {
        GlobalState::Unlikely
    } else {
        match state_for_score(candidate.ads) {
            GlobalState::Excellent if !is_imminent(candidate.time, now) => {
                log::debug!(
                    "Capping excellent window at {} to possible: {} min away",
                    candidate.time,
                    (candidate.time - now).num_minutes()
                );
                GlobalState::Possible
            }
            state => state,
        }
    };

    let probability_from_forecast = forecasts.and_then(|fs| {
        fs.iter()
            .find(|f| f.time == candidate.time)
            .and_then(|f| f.probability)
    });

    let best_window = BestWindow {
        start: candidate.time,
        end: window_end(candidate.time),
        ads: candidate.ads,
        probability_from_forecast,
        classification: classify(candidate.ads),
        limiting_factor,
    };

    let next_window = match state {
        GlobalState::Unlikely => windows
            .iter()
            .find(|w| w.ads >= MODERATE_THRESHOLD && window_end(w.time) > now)
            .map(|w| NextWindow {
                start: w.time,
                ads: w.ads,
            }),
        GlobalState::Excellent | GlobalState::Possible => None,
    };

    Ok(GlobalResolution {
        state,
        best_window,
        next_window,
    })
}
