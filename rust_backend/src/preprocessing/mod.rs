//! Input preparation ahead of the decision engine.
//!
//! - [`assembler`]: Build engine input from raw hourly readings
//! - [`validator`]: Report data quality issues without modifying input

pub mod assembler;
pub mod validator;

pub use assembler::{assemble_forecast, HourlyReading};
pub use validator::{validate_forecast, ForecastValidator, ValidationResult, ValidationStats};
