use super::ml::forest_model::ForestModel;
use super::ml::predictor::RegressionModel;
use crate::config::ModelsConfig;
use crate::domain::errors::ModelError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// A loaded model with its identity.
///
/// Created once per artifact, shared read-only for the rest of the process
/// lifetime, never mutated.
pub struct ModelHandle {
    name: String,
    source_path: PathBuf,
    model: Box<dyn RegressionModel>,
}

impl ModelHandle {
    pub fn new(
        name: impl Into<String>,
        source_path: PathBuf,
        model: Box<dyn RegressionModel>,
    ) -> Self {
        Self {
            name: name.into(),
            source_path,
            model,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn model(&self) -> &dyn RegressionModel {
        self.model.as_ref()
    }
}

/// Owns every loaded model for the process lifetime and serves shared
/// handles by name.
///
/// Each artifact is deserialized at most once: `load` memoizes by name, and
/// the whole load path runs under the registry lock, so a concurrent host
/// never parses the same artifact twice.
pub struct ModelRegistry {
    models: Mutex<HashMap<String, Arc<ModelHandle>>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self {
            models: Mutex::new(HashMap::new()),
        }
    }

    /// Eagerly loads every artifact named in the config table.
    ///
    /// Any missing or corrupt artifact is fatal here: the selectable menu is
    /// derived from the same table, and the two must stay in sync.
    pub fn from_config(config: &ModelsConfig) -> Result<Self, ModelError> {
        let registry = Self::new();
        for (name, filename) in &config.table {
            registry.load(name, &config.models_dir.join(filename))?;
        }

        info!(count = registry.len(), "Model registry initialized");
        Ok(registry)
    }

    /// Loads the artifact at `path` and registers it under `name`.
    ///
    /// Idempotent per name: repeat calls return the cached handle without
    /// touching storage again.
    pub fn load(&self, name: &str, path: &Path) -> Result<Arc<ModelHandle>, ModelError> {
        let mut models = self.lock_models();
        if let Some(handle) = models.get(name) {
            debug!(model = %name, "Registry cache hit");
            return Ok(Arc::clone(handle));
        }

        let model = ForestModel::from_file(path)?;
        let handle = Arc::new(ModelHandle::new(name, path.to_path_buf(), Box::new(model)));
        models.insert(name.to_string(), Arc::clone(&handle));

        info!(model = %name, path = %path.display(), "Model loaded");
        Ok(handle)
    }

    /// Registers a pre-built model backend under `name`, replacing any
    /// existing entry. Intended for embedding callers that construct their
    /// own backends (and for test stubs).
    pub fn register(
        &self,
        name: &str,
        source_path: PathBuf,
        model: Box<dyn RegressionModel>,
    ) -> Arc<ModelHandle> {
        let handle = Arc::new(ModelHandle::new(name, source_path, model));
        self.lock_models()
            .insert(name.to_string(), Arc::clone(&handle));
        handle
    }

    /// Returns the handle previously loaded for `name`.
    pub fn get(&self, name: &str) -> Result<Arc<ModelHandle>, ModelError> {
        self.lock_models()
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::UnknownModel {
                name: name.to_string(),
            })
    }

    /// Registered model names, sorted for stable menu order.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock_models().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock_models().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_models().is_empty()
    }

    fn lock_models(&self) -> MutexGuard<'_, HashMap<String, Arc<ModelHandle>>> {
        // A poisoned lock still holds a consistent map; no handle is ever
        // mutated after insertion.
        self.models
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantModel(f64);

    impl RegressionModel for ConstantModel {
        fn predict_row(&self, _row: &[f64]) -> Result<f64, String> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_get_returns_registered_handle() {
        let registry = ModelRegistry::new();
        registry.register(
            "TCS",
            PathBuf::from("models/TCS_xgb.json"),
            Box::new(ConstantModel(103.45)),
        );

        let handle = registry.get("TCS").unwrap();
        assert_eq!(handle.name(), "TCS");
        assert_eq!(handle.source_path(), Path::new("models/TCS_xgb.json"));
    }

    #[test]
    fn test_get_unknown_model_fails() {
        let registry = ModelRegistry::new();
        let result = registry.get("Nonexistent");
        assert!(matches!(result, Err(ModelError::UnknownModel { .. })));
    }

    #[test]
    fn test_load_is_memoized_by_name() {
        let registry = ModelRegistry::new();
        let first = registry.register(
            "Tata Motors",
            PathBuf::from("models/TATA_motors_xgb.json"),
            Box::new(ConstantModel(412.0)),
        );

        // The name is already registered, so the bogus path is never read.
        let second = registry
            .load("Tata Motors", Path::new("does/not/exist.json"))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_load_missing_artifact_fails() {
        let registry = ModelRegistry::new();
        let result = registry.load("Tata Steel", Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ModelError::ArtifactNotFound { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_model_names_sorted() {
        let registry = ModelRegistry::new();
        registry.register("TCS", PathBuf::new(), Box::new(ConstantModel(1.0)));
        registry.register("Tata Motors", PathBuf::new(), Box::new(ConstantModel(2.0)));
        registry.register("Tata Steel", PathBuf::new(), Box::new(ConstantModel(3.0)));

        assert_eq!(
            registry.model_names(),
            vec!["TCS", "Tata Motors", "Tata Steel"]
        );
    }
}
