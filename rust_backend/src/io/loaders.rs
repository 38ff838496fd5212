use anyhow::{Context, Result};
use std::path::Path;

use crate::models::ForecastInput;
use crate::parsing::json_parser;
use crate::preprocessing::validator::{validate_forecast, ValidationResult};

/// Forecast request together with its validation report
#[derive(Debug, Clone)]
pub struct ForecastLoadResult {
    pub input: ForecastInput,
    pub validation: ValidationResult,
}

/// Unified interface for loading forecast requests
pub struct ForecastLoader;

impl ForecastLoader {
    /// Load a forecast request from a file (format chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<ForecastInput> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load a forecast request from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<ForecastInput> {
        json_parser::parse_forecast_json(json_path).context("Failed to parse JSON file")
    }

    /// Load a forecast request from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<ForecastInput> {
        json_parser::parse_forecast_json_str(json_str).context("Failed to parse JSON string")
    }

    /// Load a forecast request and validate it.
    ///
    /// Warnings are logged and returned; validation errors abort the load.
    pub fn load_validated(path: &Path) -> Result<ForecastLoadResult> {
        let input = Self::load_from_file(path)?;
        let validation = validate_forecast(&input);

        for warning in &validation.warnings {
            log::warn!("{}: {}", path.display(), warning);
        }

        if !validation.is_valid {
            anyhow::bail!(
                "Forecast in {} failed validation: {}",
                path.display(),
                validation.errors.join("; ")
            );
        }

        Ok(ForecastLoadResult { input, validation })
    }
}
