// Prediction inputs and outcomes
pub mod types;

// Feature ordering contract shared with the training pipeline
pub mod feature_registry;

// Domain-specific error types
pub mod errors;
