//! Time-bounded cache of computed decisions.
//!
//! Entries are keyed by a fingerprint of the forecast request. The cache is
//! an explicit object owned by its caller; every operation takes `now` so
//! expiry is as deterministic as the engine itself.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::config::CacheSettings;
use crate::error::{DecisionError, DecisionResult};
use crate::models::{Decision, ForecastInput};

/// SHA-256 checksum of the canonical JSON form of a forecast request.
///
/// # Arguments
/// * `input` - Forecast request
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn input_fingerprint(input: &ForecastInput) -> DecisionResult<String> {
    let canonical = serde_json::to_vec(input)
        .map_err(|e| DecisionError::InvalidInput(format!("Cannot serialize forecast: {}", e)))?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}

#[derive(Debug, Clone)]
struct CacheEntry {
    decision: Decision,
    inserted_at: DateTime<Utc>,
}

/// Bounded decision cache with a fixed time-to-live.
#[derive(Debug)]
pub struct DecisionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl DecisionCache {
    /// Create a cache. A `max_entries` of zero is treated as one.
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(settings.ttl(), settings.max_entries)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now - entry.inserted_at < self.ttl
    }

    /// Cached decision for `key`, if inserted less than one TTL before `now`.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<Decision> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now))
            .map(|entry| entry.decision.clone())
    }

    /// Store a decision, evicting expired entries and then the oldest one if full.
    pub fn insert(&self, key: String, decision: Decision, now: DateTime<Utc>) {
        let mut entries = self.entries.write();

        let before = entries.len();
        entries.retain(|_, entry| now - entry.inserted_at < self.ttl);
        if entries.len() < before {
            log::trace!("Evicted {} expired decisions", before - entries.len());
        }

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by(|a, b| a.1.inserted_at.cmp(&b.1.inserted_at).then_with(|| a.0.cmp(b.0)))
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                decision,
                inserted_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for DecisionCache {
    fn default() -> Self {
        Self::from_settings(&CacheSettings::default())
    }
}
