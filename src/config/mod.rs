//! Configuration module for closecast.
//!
//! This module provides structured configuration loading from environment
//! variables, with sane defaults matching the shipped model artifacts.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Static table mapping display names to artifact filenames.
/// The selectable menu and the registry are both derived from this table,
/// which keeps the two in sync by construction.
const MODEL_TABLE: &[(&str, &str)] = &[
    ("Tata Motors", "TATA_motors_xgb.json"),
    ("Tata Steel", "TATA_steel_xgb.json"),
    ("TCS", "TCS_xgb.json"),
];

/// Model store configuration
#[derive(Debug, Clone)]
pub struct ModelsConfig {
    /// Directory containing serialized model artifacts, one file per model
    pub models_dir: PathBuf,
    /// (display name, artifact filename) pairs to load at startup
    pub table: Vec<(String, String)>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            table: MODEL_TABLE
                .iter()
                .map(|(name, file)| (name.to_string(), file.to_string()))
                .collect(),
        }
    }
}

impl ModelsConfig {
    pub fn from_env() -> Self {
        Self {
            models_dir: env::var("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models")),
            ..Default::default()
        }
    }

    /// Display names in menu order.
    pub fn model_names(&self) -> Vec<&str> {
        self.table.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub models: ModelsConfig,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Ok(Config {
            models: ModelsConfig::from_env(),
        })
    }
}
