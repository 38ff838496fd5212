//! Decision algorithms.
//!
//! Every function here is pure: values in, values out, no clock and no I/O.
//!
//! # Components
//!
//! - [`darkness`]: Solar elevation to darkness factor, with seasonal overrides
//! - [`ads`]: Aurora Decision Score per window
//! - [`limiting_factor`]: Dominant obstacle for a window
//! - [`global_state`]: Darkness- and imminence-gated verdict for the horizon
//! - [`ui_directives`]: Display hints derived from the scores
//! - [`explanation`]: Fixed-template explanation text
//! - [`probability`]: Latitude-aware visibility probability
//! - [`master_status`]: GO / WAIT / NO reduction
//!
//! # Example
//!
//! ```
//! use aurora_rust::algorithms::calculate_ads;
//! use aurora_rust::models::KpTrend;
//! use chrono::NaiveDate;
//! use qtty::Degrees;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
//! let result = calculate_ads(5.0, 20.0, Degrees::new(-20.0), KpTrend::Stable, date);
//! assert!(result.score >= 70);
//! ```

pub mod ads;
pub mod darkness;
pub mod explanation;
pub mod global_state;
pub mod limiting_factor;
pub mod master_status;
pub mod probability;
pub mod ui_directives;

pub use ads::{calculate_ads, classify, AdsBreakdown, AdsResult};
pub use darkness::{darkness_factor, is_dark_enough, season_for, Season};
pub use explanation::{generate_explanation, ExplanationInput, ExplanationStyle};
pub use global_state::{resolve_global_state, GlobalResolution};
pub use limiting_factor::{detect_limiting_factor, LimitingInputs};
pub use master_status::{master_status, MasterStatus};
pub use probability::{
    calculate_visibility_probability, required_kp_for_latitude, VisibilityConditions,
    VisibilityProbability,
};
pub use ui_directives::generate_ui_directives;
