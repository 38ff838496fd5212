use std::path::Path;

use anyhow::{Context, Result};

use crate::error::{DecisionError, DecisionResult};
use crate::models::ForecastInput;

/// Longest slice of the raw request echoed back in syntax errors.
const PREVIEW_CHARS: usize = 200;

fn preview(json_str: &str) -> String {
    if json_str.chars().count() > PREVIEW_CHARS {
        let head: String = json_str.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        json_str.to_string()
    }
}

/// Parse a forecast request from a JSON string.
///
/// Errors name the JSON path of the offending value, for example
/// `hourlyForecasts[3].kpIndex: invalid type: string "high", expected f64`.
///
/// An empty `hourlyForecasts` array parses successfully; rejecting it is up
/// to the engine.
pub fn parse_forecast_json_str(json_str: &str) -> DecisionResult<ForecastInput> {
    let mut deserializer = serde_json::Deserializer::from_str(json_str);

    let input: ForecastInput =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let inner = err.into_inner();
            if inner.is_syntax() || inner.is_eof() {
                syntax_error(&inner, json_str)
            } else {
                DecisionError::InvalidInput(format!("{}: {}", path, inner))
            }
        })?;

    deserializer
        .end()
        .map_err(|err| syntax_error(&err, json_str))?;

    Ok(input)
}

fn syntax_error(err: &serde_json::Error, json_str: &str) -> DecisionError {
    DecisionError::InvalidInput(format!(
        "Invalid JSON syntax ({}). Start of input: {}",
        err,
        preview(json_str)
    ))
}

/// Parse a forecast request from a JSON file.
pub fn parse_forecast_json(json_path: &Path) -> Result<ForecastInput> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_forecast_json_str(&json_content)
        .with_context(|| format!("Failed to parse forecast from {}", json_path.display()))
}

/// Serialize a forecast request back to its wire form.
pub fn forecast_to_json(input: &ForecastInput) -> DecisionResult<String> {
    serde_json::to_string(input).map_err(|e| DecisionError::InvalidInput(e.to_string()))
}
