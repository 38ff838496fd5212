#[cfg(test)]
mod tests {
    use crate::io::loaders::ForecastLoader;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const REQUEST: &str = r#"{
        "hourlyForecasts": [
            {"time": "2026-03-02T21:00:00Z", "cloudCover": 30.0, "solarElevation": -24.0, "kpIndex": 4.0},
            {"time": "2026-03-02T22:00:00Z", "cloudCover": 140.0, "solarElevation": -28.0, "kpIndex": 4.3}
        ],
        "globalKp": 4.0,
        "kpTrend": "stable"
    }"#;

    /// Helper to create a temp file with the given suffix
    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// Test loading a JSON request by extension
    #[test]
    fn test_load_from_file_json() {
        let file = temp_file(".json", REQUEST);
        let input = ForecastLoader::load_from_file(file.path()).unwrap();
        assert_eq!(input.windows.len(), 2);
    }

    /// Test that unknown extensions are rejected
    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".csv", REQUEST);
        let err = ForecastLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    /// Test that a missing file carries the path in the error chain
    #[test]
    fn test_missing_file_context() {
        let err = ForecastLoader::load_from_file(std::path::Path::new("/nonexistent/forecast.json"))
            .unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("/nonexistent/forecast.json"));
    }

    /// Test that validation warnings do not block loading
    #[test]
    fn test_load_validated_keeps_warnings() {
        let file = temp_file(".json", REQUEST);
        let result = ForecastLoader::load_validated(file.path()).unwrap();
        assert!(result.validation.is_valid);
        assert!(!result.validation.warnings.is_empty());
    }

    /// Test that an empty request fails validation
    #[test]
    fn test_load_validated_rejects_empty() {
        let file = temp_file(
            ".json",
            r#"{"hourlyForecasts": [], "globalKp": 1.0, "kpTrend": "stable"}"#,
        );
        let err = ForecastLoader::load_validated(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed validation"));
    }

    /// Test loading from a string
    #[test]
    fn test_load_from_json_str() {
        let input = ForecastLoader::load_from_json_str(REQUEST).unwrap();
        assert_eq!(input.global_kp, 4.0);
        assert!(ForecastLoader::load_from_json_str("not json").is_err());
    }
}
