pub mod forest_model;
pub mod predictor;
