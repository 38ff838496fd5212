//! Data source and time source seams for the service layer.
//!
//! The decision engine itself never fetches data or reads the clock. The
//! service layer gets both through the traits here, so production code can
//! plug in network providers while tests use fixed data and a fixed clock.

pub mod clock;
pub mod local;

use async_trait::async_trait;

use crate::error::DecisionResult;
use crate::models::ForecastInput;

pub use clock::{Clock, FixedClock, SystemClock};
pub use local::LocalForecastProvider;

/// Source of forecast requests.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the current forecast.
    ///
    /// # Returns
    /// * `Ok(ForecastInput)` - The latest forecast
    /// * `Err(DecisionError::Provider)` - If the source is unavailable
    async fn fetch_forecast(&self) -> DecisionResult<ForecastInput>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "forecast-provider"
    }
}
