use crate::domain::types::FeatureVector;

/// Ordered list of feature names.
/// This order MUST match exactly with the order used when the model
/// artifacts were trained. Any change here is a breaking change for every
/// deployed artifact: regressors are order-sensitive on their input vector
/// and produce meaningless numbers for a permuted row.
pub const FEATURE_NAMES: &[&str] = &["open", "high", "low", "close"];

/// Converts OHLC inputs into a single feature row for inference.
pub fn ohlc_to_row(fv: &FeatureVector) -> Vec<f64> {
    vec![fv.open, fv.high, fv.low, fv.close]
}
