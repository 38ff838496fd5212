//! Parsers for forecast request data.
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse JSON forecast requests into [`ForecastInput`](crate::models::ForecastInput)
//!
//! # Example
//!
//! ```
//! use aurora_rust::parsing::parse_forecast_json_str;
//!
//! let input = parse_forecast_json_str(
//!     r#"{"hourlyForecasts": [], "globalKp": 2.0, "kpTrend": "stable"}"#,
//! ).unwrap();
//! assert!(input.is_empty());
//! ```

pub mod json_parser;


pub use json_parser::{forecast_to_json, parse_forecast_json, parse_forecast_json_str};
