use std::path::PathBuf;
use thiserror::Error;

/// Errors related to model artifact loading and registry lookups
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found: {path:?}")]
    ArtifactNotFound { path: PathBuf },

    #[error("Failed to deserialize model artifact {path:?}: {reason}")]
    Deserialization { path: PathBuf, reason: String },

    #[error("Unknown model: {name}")]
    UnknownModel { name: String },
}

/// Errors related to prediction request inputs
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid {feature} price: {value} is not a finite number")]
    NotFinite { feature: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_formatting() {
        let error = ModelError::UnknownModel {
            name: "Nonexistent".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Unknown model"));
        assert!(msg.contains("Nonexistent"));
    }

    #[test]
    fn test_deserialization_error_formatting() {
        let error = ModelError::Deserialization {
            path: PathBuf::from("models/TCS_xgb.json"),
            reason: "unexpected end of file".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("TCS_xgb.json"));
        assert!(msg.contains("unexpected end of file"));
    }

    #[test]
    fn test_input_error_formatting() {
        let error = InputError::NotFinite {
            feature: "open",
            value: f64::NAN,
        };

        let msg = error.to_string();
        assert!(msg.contains("open"));
        assert!(msg.contains("NaN"));
    }
}
