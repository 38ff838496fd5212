//! # Aurora Rust Backend
//!
//! Deterministic aurora decision engine for Tromsø.
//!
//! The engine turns hourly forecast readings (geomagnetic KP index, cloud
//! cover, solar elevation) plus the KP trend into one recommendation,
//! `excellent`, `possible` or `unlikely`, together with the best viewing
//! window, display hints and a fixed-template explanation.
//!
//! ## Features
//!
//! - **Scoring**: Aurora Decision Score (ADS) per hourly window
//! - **Gating**: Daylight never yields a positive verdict; distant peaks are capped
//! - **Astronomy**: Solar elevation and lunar illumination for any site
//! - **Loading**: JSON requests with path-aware errors, TOML configuration
//! - **Service**: Async provider seam with a TTL decision cache
//!
//! ## Architecture
//!
//! - [`models`]: Request and response types
//! - [`algorithms`]: Pure scoring, gating and rendering functions
//! - [`astro`]: Sun and Moon positions
//! - [`parsing`] / [`io`]: JSON request parsing and file loading
//! - [`preprocessing`]: Input assembly and validation
//! - [`providers`]: Forecast provider and clock traits
//! - [`services`]: Decision pipeline, cache and async service
//! - [`config`]: Engine configuration
//!
//! ## Example
//!
//! ```
//! use aurora_rust::models::{ForecastInput, ForecastWindow, GlobalState, KpTrend};
//! use aurora_rust::services::compute_decision;
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2026, 2, 10, 20, 0, 0).unwrap();
//! let input = ForecastInput::new(
//!     vec![ForecastWindow::new(now, 10.0, -25.0, 6.0)],
//!     6.0,
//!     KpTrend::Increasing,
//! );
//!
//! let decision = compute_decision(&input, now).unwrap();
//! assert_eq!(decision.state, GlobalState::Excellent);
//! ```

pub mod algorithms;
pub mod astro;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod providers;
pub mod services;

pub use config::{ConfigError, EngineConfig};
pub use error::{DecisionError, DecisionResult};
pub use models::{Decision, ForecastInput, ForecastWindow, GlobalState, KpTrend};
pub use services::{compute_decision, DecisionEngine};
