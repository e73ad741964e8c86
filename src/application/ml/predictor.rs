/// Interface for regression model backends
pub trait RegressionModel: Send + Sync {
    /// Run inference on a single feature row and return the raw predicted
    /// value. The row must follow the order fixed by
    /// `domain::feature_registry::FEATURE_NAMES`.
    fn predict_row(&self, row: &[f64]) -> Result<f64, String>;
}
