//! Decision output types produced by the decision engine.
//!
//! Everything here is derived data: built once per computation, never
//! mutated afterwards and never persisted by the engine itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label attached to a single window's ADS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Excellent => "excellent",
            Classification::Good => "good",
            Classification::Moderate => "moderate",
            Classification::Poor => "poor",
        }
    }
}

/// Dominant obstacle to aurora visibility in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitingFactor {
    CloudCover,
    LowKp,
    TooBright,
    MixedConditions,
}

impl LimitingFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitingFactor::CloudCover => "cloud_cover",
            LimitingFactor::LowKp => "low_kp",
            LimitingFactor::TooBright => "too_bright",
            LimitingFactor::MixedConditions => "mixed_conditions",
        }
    }
}

/// Verdict for the whole forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalState {
    Excellent,
    Possible,
    Unlikely,
}

impl GlobalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalState::Excellent => "excellent",
            GlobalState::Possible => "possible",
            GlobalState::Unlikely => "unlikely",
        }
    }
}

impl std::fmt::Display for GlobalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A forecast window after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredWindow {
    pub time: DateTime<Utc>,
    pub ads: u8,
    pub classification: Classification,
    /// Sun at or below civil twilight. Internal gate, not part of the response shape.
    #[serde(default, skip_serializing)]
    pub is_dark_enough: bool,
}

/// The recommended viewing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub ads: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_from_forecast: Option<u8>,
    pub classification: Classification,
    pub limiting_factor: LimitingFactor,
}

/// First future window worth watching when the current verdict is `unlikely`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextWindow {
    pub start: DateTime<Utc>,
    pub ads: u8,
}

/// Display hints derived from the scored windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiDirectives {
    #[serde(rename = "show48Grid")]
    pub show_48_grid: bool,
    #[serde(rename = "highlightTop")]
    pub highlight_top: u8,
    #[serde(rename = "showBestBanner")]
    pub show_best_banner: bool,
}

/// Complete result of one decision computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub state: GlobalState,
    pub best_window: BestWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_window: Option<NextWindow>,
    pub windows: Vec<ScoredWindow>,
    pub ui_directives: UiDirectives,
    pub explanation: String,
    /// When the decision was computed, not when the forecast is valid.
    pub computed_at: DateTime<Utc>,
}
