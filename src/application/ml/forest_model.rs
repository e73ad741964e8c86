use super::predictor::RegressionModel;
use crate::domain::errors::ModelError;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Random forest regressor deserialized from a serde_json artifact on disk.
pub struct ForestModel {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl ForestModel {
    /// Deserializes the artifact at `path`. Fails with `ArtifactNotFound`
    /// if the path does not exist, or `Deserialization` if the bytes cannot
    /// be parsed into a valid regressor.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| ModelError::Deserialization {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let model =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                ModelError::Deserialization {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;

        info!("Successfully loaded model artifact from {:?}", path);
        Ok(Self { model })
    }
}

impl RegressionModel for ForestModel {
    fn predict_row(&self, row: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![row.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| format!("Prediction failed: {}", e))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_artifact_is_not_found() {
        let result = ForestModel::from_file(Path::new("non_existent.json"));
        assert!(matches!(result, Err(ModelError::ArtifactNotFound { .. })));
    }

    #[test]
    fn test_corrupt_artifact_is_deserialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not a model").unwrap();

        let result = ForestModel::from_file(&path);
        assert!(matches!(result, Err(ModelError::Deserialization { .. })));
    }
}
