//! Command line argument parsing for the symptom-vector CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_LABEL_COLUMN;
use crate::config::ServiceConfig;
use crate::error::{Result, SymptomError};

/// symptom-vector - Map free-text symptoms to classifier feature vectors
#[derive(Parser, Debug, Clone)]
#[command(name = "symptom-vector")]
#[command(about = "Map free-text symptom descriptions to classifier feature vectors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SymptomVectorArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SymptomVectorArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show how text is normalized before matching
    Normalize(NormalizeArgs),

    /// List the catalog symptoms found in text
    Match(MatchArgs),

    /// Build the feature vector for text
    Vector(VectorArgs),

    /// Predict a condition from text
    Predict(PredictArgs),

    /// Show catalog, feature layout and model details
    Inspect(InspectArgs),
}

/// Catalog and feature order artifacts
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Symptom catalog file (.txt, .json, or training .csv header)
    #[arg(long, env = "SYMPTOM_CATALOG_PATH", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Model feature order file
    #[arg(long, env = "MODEL_ORDER_PATH", value_name = "PATH")]
    pub model_order: Option<PathBuf>,

    /// Label column dropped from CSV headers
    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    pub label_column: String,
}

/// Arguments for normalizing text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for matching symptoms
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Free-text symptom description
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for building a feature vector
#[derive(Parser, Debug, Clone)]
pub struct VectorArgs {
    /// Free-text symptom description
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Cap on input characters scanned
    #[arg(long)]
    pub max_input_chars: Option<usize>,
}

/// Arguments for predicting a condition
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Free-text symptom description
    #[arg(value_name = "TEXT", required_unless_present = "input_file")]
    pub text: Option<String>,

    /// File with one request per line, predicted in parallel
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub input_file: Option<PathBuf>,

    /// Service configuration file (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Symptom catalog file
    #[arg(long, env = "SYMPTOM_CATALOG_PATH", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Classifier model file (JSON)
    #[arg(long, env = "MODEL_PATH", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Model feature order file
    #[arg(long, env = "MODEL_ORDER_PATH", value_name = "PATH")]
    pub model_order: Option<PathBuf>,

    /// Label column dropped from CSV headers
    #[arg(long)]
    pub label_column: Option<String>,

    /// Ignore feature names stored in the model
    #[arg(long)]
    pub no_model_feature_names: bool,

    /// Cap on input characters scanned
    #[arg(long)]
    pub max_input_chars: Option<usize>,

    /// Reject requests longer than this many characters
    #[arg(long)]
    pub max_request_chars: Option<usize>,
}

impl PredictArgs {
    /// Merge the optional config file with command line overrides.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => {
                let catalog = self.catalog.clone().ok_or_else(|| {
                    SymptomError::config("--catalog is required without --config")
                })?;
                let model = self.model.clone().ok_or_else(|| {
                    SymptomError::config("--model is required without --config")
                })?;
                ServiceConfig::new(catalog, model)
            }
        };

        if let Some(catalog) = &self.catalog {
            config.catalog_path = catalog.clone();
        }
        if let Some(model) = &self.model {
            config.model_path = model.clone();
        }
        if let Some(order) = &self.model_order {
            config.model_order_path = Some(order.clone());
        }
        if let Some(label_column) = &self.label_column {
            config.label_column = label_column.clone();
        }
        if self.no_model_feature_names {
            config.use_model_feature_names = false;
        }
        if self.max_input_chars.is_some() {
            config.max_input_chars = self.max_input_chars;
        }
        if let Some(max) = self.max_request_chars {
            config.max_request_chars = max;
        }
        Ok(config)
    }
}

/// Arguments for inspecting artifacts
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Classifier model file (JSON)
    #[arg(long, env = "MODEL_PATH", value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
