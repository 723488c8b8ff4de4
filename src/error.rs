//! Error types for the symptom-vector library.
//!
//! All errors are represented by the [`SymptomError`] enum. Configuration and
//! artifact problems are raised while the builder or classifier is loaded;
//! the per-request path only fails on invalid input or a classifier error.
//!
//! # Examples
//!
//! ```
//! use symptom_vector::error::{Result, SymptomError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SymptomError::invalid_input("Input cannot be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for symptom-vector operations.
#[derive(Error, Debug)]
pub enum SymptomError {
    /// I/O errors (artifact files, input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid service configuration; the service must refuse to start
    #[error("Configuration error: {0}")]
    Config(String),

    /// Symptom catalog or model feature order problems
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Classifier model problems
    #[error("Model error: {0}")]
    Model(String),

    /// Request input rejected before reaching the builder
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SymptomError.
pub type Result<T> = std::result::Result<T, SymptomError>;

impl SymptomError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SymptomError::Config(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        SymptomError::Catalog(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        SymptomError::Model(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SymptomError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SymptomError::Other(msg.into())
    }

    /// Wrap an I/O error with the path that caused it.
    pub fn io_at(path: &Path, err: io::Error) -> Self {
        SymptomError::Io(io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    }

    /// Whether this error means the service cannot start.
    pub fn is_fatal_config(&self) -> bool {
        matches!(
            self,
            SymptomError::Config(_) | SymptomError::Catalog(_) | SymptomError::Model(_)
        )
    }
}
