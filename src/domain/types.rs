use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::domain::errors::InputError;
use crate::domain::feature_registry;

/// Ordered OHLC price inputs for a single prediction request.
///
/// Constructed fresh per request and never persisted. Non-finite values are
/// rejected at construction; negative prices are accepted but logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl FeatureVector {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Result<Self, InputError> {
        let fv = Self {
            open,
            high,
            low,
            close,
        };

        for (name, value) in feature_registry::FEATURE_NAMES.iter().zip(fv.to_row()) {
            if !value.is_finite() {
                return Err(InputError::NotFinite {
                    feature: *name,
                    value,
                });
            }
        }

        if fv.to_row().iter().any(|price| *price < 0.0) {
            warn!(?fv, "Negative price input passed through to the model");
        }

        Ok(fv)
    }

    /// Single feature row in the exact order the trained artifacts expect.
    pub fn to_row(&self) -> Vec<f64> {
        feature_registry::ohlc_to_row(self)
    }
}

/// Discriminated result of one dispatch call.
///
/// `Success` carries the predicted close rounded to 2 decimal places.
/// `Failure` carries a human-readable description including the underlying
/// cause. Callers must handle both; nothing from the dispatch path panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredictionOutcome {
    Success(f64),
    Failure(String),
}

impl PredictionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PredictionOutcome::Success(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PredictionOutcome::Success(value) => Some(*value),
            PredictionOutcome::Failure(_) => None,
        }
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionOutcome::Success(value) => write!(f, "₹{:.2}", value),
            PredictionOutcome::Failure(reason) => write!(f, "{}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(FeatureVector::new(f64::NAN, 105.0, 99.0, 102.0).is_err());
        assert!(FeatureVector::new(100.0, f64::INFINITY, 99.0, 102.0).is_err());
        assert!(FeatureVector::new(100.0, 105.0, f64::NEG_INFINITY, 102.0).is_err());
    }

    #[test]
    fn test_accepts_negative_inputs() {
        // Non-negativity is the input surface's concern; the core passes
        // negatives through to the model unchanged.
        let fv = FeatureVector::new(-1.0, 105.0, 99.0, 102.0);
        assert!(fv.is_ok());
    }

    #[test]
    fn test_success_display_is_currency_formatted() {
        let outcome = PredictionOutcome::Success(103.45);
        assert_eq!(outcome.to_string(), "₹103.45");
    }

    #[test]
    fn test_failure_display_carries_reason() {
        let outcome = PredictionOutcome::Failure("Prediction failed: shape mismatch".to_string());
        assert_eq!(outcome.to_string(), "Prediction failed: shape mismatch");
        assert!(outcome.value().is_none());
    }
}
