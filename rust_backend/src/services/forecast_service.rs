//! Async decision service: fetch, fingerprint, cache, compute.
//!
//! A cached decision is served as-is for the cache TTL, including its
//! original `computed_at`. Imminence is therefore judged against the instant
//! the decision was first computed.

use serde::Serialize;

use super::cache::{input_fingerprint, DecisionCache};
use super::decision::DecisionEngine;
use crate::config::EngineConfig;
use crate::error::DecisionResult;
use crate::models::Decision;
use crate::providers::{Clock, ForecastProvider};

/// Decision returned by the service with cache metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDecision {
    pub decision: Decision,
    pub cache_hit: bool,
    pub fingerprint: String,
}

/// Service combining a provider, a clock, the engine and a cache.
pub struct DecisionService<P, C> {
    provider: P,
    clock: C,
    engine: DecisionEngine,
    cache: DecisionCache,
}

impl<P, C> DecisionService<P, C>
where
    P: ForecastProvider,
    C: Clock,
{
    pub fn new(provider: P, clock: C, config: EngineConfig) -> Self {
        let cache = DecisionCache::from_settings(&config.cache);
        Self {
            provider,
            clock,
            engine: DecisionEngine::new(config),
            cache,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &DecisionCache {
        &self.cache
    }

    /// Fetch the current forecast and return its decision.
    ///
    /// # Returns
    /// * `Ok(ServiceDecision)` - The decision, from cache when the same forecast
    ///   was decided less than one TTL ago
    /// * `Err(DecisionError)` - If the provider fails or the forecast is empty
    pub async fn current_decision(&self) -> DecisionResult<ServiceDecision> {
        let input = self.provider.fetch_forecast().await?;
        let now = self.clock.now();
        let fingerprint = input_fingerprint(&input)?;

        if let Some(decision) = self.cache.get(&fingerprint, now) {
            log::debug!("Decision cache hit for {} ({})", &fingerprint[..12], self.provider.name());
            return Ok(ServiceDecision {
                decision,
                cache_hit: true,
                fingerprint,
            });
        }

        let decision = self.engine.compute(&input, now)?;
        self.cache.insert(fingerprint.clone(), decision.clone(), now);
        log::debug!("Computed decision {} for {}", decision.state, &fingerprint[..12]);

        Ok(ServiceDecision {
            decision,
            cache_hit: false,
            fingerprint,
        })
    }
}
