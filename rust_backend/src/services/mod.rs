//! Service layer for decision orchestration.
//!
//! This module sits between data sources and callers. The engine itself is
//! pure; caching and provider access live here.
//!
//! - [`decision`]: The decision pipeline and [`DecisionEngine`]
//! - [`cache`]: TTL-bounded decision cache keyed by input fingerprint
//! - [`forecast_service`]: Async service tying provider, clock and cache together

pub mod cache;
pub mod decision;
pub mod forecast_service;

pub use cache::{input_fingerprint, DecisionCache};
pub use decision::{compute_decision, score_windows, DecisionEngine};
pub use forecast_service::{DecisionService, ServiceDecision};
