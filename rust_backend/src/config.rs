//! Engine configuration file support.
//!
//! Settings are read from a TOML file. Every section is optional and falls
//! back to the defaults for Tromsø:
//!
//! ```toml
//! [location]
//! name = "Tromsø"
//! latitude = 69.6492
//! longitude = 18.9553
//!
//! [display]
//! utc_offset_minutes = 60
//!
//! [cache]
//! ttl_seconds = 300
//! max_entries = 256
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::algorithms::explanation::ExplanationStyle;
use crate::models::Location;

const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

/// How decisions are rendered for people.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Offset from UTC used for clock times in explanations.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Decision cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_ttl_seconds() -> u64 {
    300
}

fn default_max_entries() -> usize {
    256
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds.min(u32::MAX as u64) as i64)
    }
}

impl EngineConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded engine config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `aurora.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(EngineConfig))` if a file was found and parsed
    /// * `Ok(None)` if no file exists in the standard locations
    /// * `Err(ConfigError)` if a file was found but is invalid
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("aurora.toml"),
            PathBuf::from("rust_backend/aurora.toml"),
            PathBuf::from("../aurora.toml"),
        ];

        for path in search_paths.iter() {
            if path.exists() {
                return Self::from_file(path).map(Some);
            }
        }

        log::debug!("No aurora.toml found in standard locations, using defaults");
        Ok(None)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lat = self.location.latitude;
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ConfigError::Invalid(format!(
                "location.latitude must be within ±90°, got {}",
                lat
            )));
        }

        let lon = self.location.longitude;
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ConfigError::Invalid(format!(
                "location.longitude must be within ±180°, got {}",
                lon
            )));
        }

        let offset = self.display.utc_offset_minutes;
        if offset.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(ConfigError::Invalid(format!(
                "display.utc_offset_minutes must be within ±{}, got {}",
                MAX_UTC_OFFSET_MINUTES, offset
            )));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::Invalid(
                "cache.max_entries must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Fixed offset used to render clock times.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.display
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "display.utc_offset_minutes out of range: {}",
                    self.display.utc_offset_minutes
                ))
            })
    }

    /// Explanation style for this configuration.
    pub fn explanation_style(&self) -> Result<ExplanationStyle, ConfigError> {
        Ok(ExplanationStyle {
            reference_city: self.location.name.clone(),
            utc_offset: self.utc_offset()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.location.name, "Tromsø");
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.cache.max_entries, 256);
        assert_eq!(config.display.utc_offset_minutes, 0);
    }

    #[test]
    fn test_partial_sections() {
        let config = EngineConfig::from_toml_str(
            r#"
            [display]
            utc_offset_minutes = 60

            [cache]
            ttl_seconds = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.display.utc_offset_minutes, 60);
        assert_eq!(config.cache.ttl_seconds, 30);
        assert_eq!(config.cache.max_entries, 256);
        assert_eq!(config.location, Location::tromso());
    }

    #[test]
    fn test_explanation_style_uses_location_and_offset() {
        let config = EngineConfig::from_toml_str(
            r#"
            [location]
            name = "Alta"
            latitude = 69.97
            longitude = 23.27

            [display]
            utc_offset_minutes = 120
            "#,
        )
        .unwrap();
        let style = config.explanation_style().unwrap();
        assert_eq!(style.reference_city, "Alta");
        assert_eq!(style.utc_offset.local_minus_utc(), 7200);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let err = EngineConfig::from_toml_str(
            r#"
            [location]
            name = "Nowhere"
            latitude = 95.0
            longitude = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let err =
            EngineConfig::from_toml_str("[display]\nutc_offset_minutes = 1200\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_extreme_offsets_rejected() {
        for raw in ["-2147483648", "2147483647", "-1081"] {
            let toml = format!("[display]\nutc_offset_minutes = {}\n", raw);
            let err = EngineConfig::from_toml_str(&toml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "offset {}", raw);
        }
    }

    #[test]
    fn test_unvalidated_extreme_offset_is_error() {
        let mut config = EngineConfig::default();
        config.display.utc_offset_minutes = i32::MIN;
        assert!(config.utc_offset().is_err());
        config.display.utc_offset_minutes = i32::MAX;
        assert!(config.explanation_style().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("[cache\nttl_seconds = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[cache]\nmax_entries = 8").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cache.max_entries, 8);
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/aurora.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_cache_ttl_duration() {
        assert_eq!(CacheSettings::default().ttl(), Duration::seconds(300));
    }
}
