//! Loading ordered name lists from artifact files.
//!
//! Supported formats, chosen by file extension:
//!
//! - `.json`: a JSON array of strings
//! - `.csv`: the header row of a training table; the label column is dropped
//!   and the remaining columns are taken in order
//! - anything else: one name per line, blank lines ignored

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error::{Result, SymptomError};

/// Name of the label column dropped from CSV headers by default.
pub const DEFAULT_LABEL_COLUMN: &str = "prognosis";

/// On-disk format of a name list artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    CsvHeader,
    Lines,
}

impl ArtifactFormat {
    /// Pick the format from the path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ArtifactFormat::Json,
            Some("csv") => ArtifactFormat::CsvHeader,
            _ => ArtifactFormat::Lines,
        }
    }
}

/// Read an ordered list of names from `path`.
///
/// `label_column` is only used for CSV headers. Names are returned as found;
/// canonicalization is up to the caller.
pub fn load_names(path: &Path, label_column: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| SymptomError::io_at(path, e))?;
    let format = ArtifactFormat::from_path(path);
    debug!("Loading {:?} artifact from {}", format, path.display());
    parse_names(&content, format, label_column)
}

/// Parse an ordered list of names from artifact content.
pub fn parse_names(content: &str, format: ArtifactFormat, label_column: &str) -> Result<Vec<String>> {
    let content = content.trim_start_matches('\u{feff}');
    match format {
        ArtifactFormat::Json => Ok(serde_json::from_str::<Vec<String>>(content)?),
        ArtifactFormat::CsvHeader => {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .trim(csv::Trim::All)
                .flexible(true)
                .from_reader(content.as_bytes());
            let header = reader
                .records()
                .next()
                .ok_or_else(|| SymptomError::catalog("CSV artifact has no header row"))?
                .map_err(|e| SymptomError::catalog(format!("Failed to read CSV header: {e}")))?;
            let label = label_column.trim().to_lowercase();
            Ok(header
                .iter()
                .filter(|column| column.to_lowercase() != label)
                .map(str::to_string)
                .collect())
        }
        ArtifactFormat::Lines => Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
    }
}
