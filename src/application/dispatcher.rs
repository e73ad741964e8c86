use super::registry::ModelHandle;
use crate::domain::types::{FeatureVector, PredictionOutcome};
use tracing::{debug, warn};

/// Translates raw OHLC inputs into a model invocation and normalizes the
/// result.
///
/// Every failure of the underlying inference call is converted into
/// `PredictionOutcome::Failure`; nothing from this path propagates as a
/// panic, and the caller always receives a discriminated outcome.
pub struct PredictionDispatcher;

impl PredictionDispatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, handle: &ModelHandle, features: &FeatureVector) -> PredictionOutcome {
        let row = features.to_row();

        match handle.model().predict_row(&row) {
            Ok(value) if value.is_finite() => {
                let rounded = round_to_cents(value);
                debug!(model = %handle.name(), prediction = rounded, "Dispatch complete");
                PredictionOutcome::Success(rounded)
            }
            Ok(value) => {
                warn!(model = %handle.name(), value, "Model returned non-finite prediction");
                PredictionOutcome::Failure(format!(
                    "Prediction failed: model returned non-finite value {}",
                    value
                ))
            }
            Err(reason) => {
                warn!(model = %handle.name(), error = %reason, "Model inference failed");
                PredictionOutcome::Failure(reason)
            }
        }
    }
}

impl Default for PredictionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounds a raw model output to the 2-decimal presentation contract.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
