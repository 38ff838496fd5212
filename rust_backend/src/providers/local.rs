//! In-memory forecast provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::ForecastProvider;
use crate::error::{DecisionError, DecisionResult};
use crate::models::ForecastInput;

/// Provider serving a forecast held in memory.
///
/// Clones share the same forecast, so one handle can replace the data
/// while another is owned by a service.
#[derive(Debug, Clone, Default)]
pub struct LocalForecastProvider {
    forecast: Arc<RwLock<Option<ForecastInput>>>,
    fetches: Arc<AtomicUsize>,
}

impl LocalForecastProvider {
    pub fn new(forecast: ForecastInput) -> Self {
        Self {
            forecast: Arc::new(RwLock::new(Some(forecast))),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the served forecast.
    pub fn replace(&self, forecast: ForecastInput) {
        *self.forecast.write() = Some(forecast);
    }

    /// Remove the served forecast; later fetches fail.
    pub fn clear(&self) {
        *self.forecast.write() = None;
    }

    /// Number of fetches served so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ForecastProvider for LocalForecastProvider {
    async fn fetch_forecast(&self) -> DecisionResult<ForecastInput> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let forecast = self.forecast.read().clone();
        forecast.ok_or_else(|| DecisionError::Provider("No forecast loaded".to_string()))
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastWindow, KpTrend};
    use chrono::{TimeZone, Utc};

    fn forecast(kp: f64) -> ForecastInput {
        let t = Utc.with_ymd_and_hms(2026, 2, 1, 20, 0, 0).unwrap();
        ForecastInput::new(vec![ForecastWindow::new(t, 10.0, -20.0, kp)], kp, KpTrend::Stable)
    }

    #[tokio::test]
    async fn test_fetch_returns_current_forecast() {
        let provider = LocalForecastProvider::new(forecast(3.0));
        assert_eq!(provider.fetch_forecast().await.unwrap().global_kp, 3.0);

        provider.clone().replace(forecast(6.0));
        assert_eq!(provider.fetch_forecast().await.unwrap().global_kp, 6.0);
        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_provider_errors() {
        let provider = LocalForecastProvider::default();
        let err = provider.fetch_forecast().await.unwrap_err();
        assert!(matches!(err, DecisionError::Provider(_)));
        assert!(!err.is_caller_error());
    }
}
