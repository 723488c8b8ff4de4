//! Service configuration.
//!
//! Configuration is read once at startup, from a JSON file and/or CLI flags,
//! and decides every artifact the service loads. Nothing here is consulted
//! per request.
//!
//! # Examples
//!
//! ```
//! use symptom_vector::config::ServiceConfig;
//!
//! let config: ServiceConfig = serde_json::from_str(
//!     r#"{ "catalog_path": "model/symptoms.txt", "model_path": "model/model.json" }"#,
//! ).unwrap();
//! assert_eq!(config.label_column, "prognosis");
//! assert_eq!(config.max_request_chars, 2000);
//! assert!(config.use_model_feature_names);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_LABEL_COLUMN;
use crate::error::{Result, SymptomError};

/// Longest request accepted by the prediction pipeline, in characters.
pub const DEFAULT_MAX_REQUEST_CHARS: usize = 2000;

fn default_label_column() -> String {
    DEFAULT_LABEL_COLUMN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_request_chars() -> usize {
    DEFAULT_MAX_REQUEST_CHARS
}

/// Startup configuration for the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Symptom catalog artifact.
    pub catalog_path: PathBuf,
    /// Classifier model artifact.
    pub model_path: PathBuf,
    /// Explicit model feature order; takes precedence over names stored in the model.
    #[serde(default)]
    pub model_order_path: Option<PathBuf>,
    /// Label column dropped when a catalog or order is read from a CSV header.
    #[serde(default = "default_label_column")]
    pub label_column: String,
    /// Use the model's own feature names as the feature order when no explicit order is given.
    #[serde(default = "default_true")]
    pub use_model_feature_names: bool,
    /// Cap on characters scanned by the builder per request.
    #[serde(default)]
    pub max_input_chars: Option<usize>,
    /// Requests longer than this are rejected.
    #[serde(default = "default_max_request_chars")]
    pub max_request_chars: usize,
}

impl ServiceConfig {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(catalog_path: P, model_path: Q) -> Self {
        ServiceConfig {
            catalog_path: catalog_path.into(),
            model_path: model_path.into(),
            model_order_path: None,
            label_column: default_label_column(),
            use_model_feature_names: true,
            max_input_chars: None,
            max_request_chars: DEFAULT_MAX_REQUEST_CHARS,
        }
    }

    /// Read a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SymptomError::io_at(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Check the configuration before anything is loaded.
    pub fn validate(&self) -> Result<()> {
        check_file("symptom catalog", &self.catalog_path)?;
        check_file("model", &self.model_path)?;
        if let Some(path) = &self.model_order_path {
            check_file("model feature order", path)?;
        }
        if self.max_request_chars == 0 {
            return Err(SymptomError::config("max_request_chars must be greater than 0"));
        }
        if self.max_input_chars == Some(0) {
            return Err(SymptomError::config("max_input_chars must be greater than 0"));
        }
        Ok(())
    }
}

fn check_file(what: &str, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(SymptomError::config(format!(
            "{what} not found: {}",
            path.display()
        )));
    }
    Ok(())
}
