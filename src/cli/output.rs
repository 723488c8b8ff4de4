//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SymptomVectorArgs};
use crate::error::Result;
use crate::features::assembler::LayoutSource;
use crate::pipeline::PredictionOutcome;

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub input: String,
    pub normalized: String,
}

/// Result structure for symptom matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub normalized: String,
    pub matched_symptoms: Vec<String>,
}

/// Result structure for vector building.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorResult {
    pub normalized: String,
    pub matched_symptoms: Vec<String>,
    pub layout: LayoutSource,
    pub vector: Vec<u8>,
}

/// One line of a batch prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchPredictionEntry {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PredictionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result structure for batch prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchPredictionResult {
    pub entries: Vec<BatchPredictionEntry>,
    pub succeeded: usize,
    pub failed: usize,
    pub duration_ms: u64,
}

/// Artifact details.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectResult {
    pub catalog_size: usize,
    pub vector_len: usize,
    pub layout: LayoutSource,
    pub unmapped_features: Vec<String>,
    pub classifier: Option<ClassifierSummary>,
}

/// Classifier details for `inspect`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifierSummary {
    pub name: String,
    pub feature_count: usize,
    pub has_feature_names: bool,
    pub compatible: bool,
    pub labels: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for NormalizeResult {
    fn render_human(&self) -> String {
        self.normalized.clone()
    }
}

impl HumanOutput for MatchResult {
    fn render_human(&self) -> String {
        let mut out = format!("Normalized: {}\n", self.normalized);
        out.push_str(&format_symptoms(&self.matched_symptoms));
        out
    }
}

impl HumanOutput for VectorResult {
    fn render_human(&self) -> String {
        let mut out = format!("Normalized: {}\n", self.normalized);
        out.push_str(&format_symptoms(&self.matched_symptoms));
        let active = self.vector.iter().filter(|&&v| v == 1).count();
        out.push_str(&format!(
            "\nVector ({:?} order, {} of {} active):\n",
            self.layout,
            active,
            self.vector.len()
        ));
        let bits: Vec<String> = self.vector.iter().map(u8::to_string).collect();
        out.push_str(&bits.join(" "));
        out
    }
}

impl HumanOutput for PredictionOutcome {
    fn render_human(&self) -> String {
        let mut out = format!("Predicted condition: {}\n", self.predicted_label);
        if let Some(confidence) = self.confidence {
            out.push_str(&format!("Confidence: {:.1}%\n", confidence * 100.0));
        }
        out.push_str(&format_symptoms(&self.matched_symptoms));
        out
    }
}

impl HumanOutput for BatchPredictionResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match (&entry.outcome, &entry.error) {
                (Some(outcome), _) => out.push_str(&format!(
                    "{:>5}: {} ({})\n",
                    entry.line,
                    outcome.predicted_label,
                    outcome
                        .confidence
                        .map(|c| format!("{:.1}%", c * 100.0))
                        .unwrap_or_else(|| "n/a".to_string())
                )),
                (None, Some(error)) => {
                    out.push_str(&format!("{:>5}: error: {}\n", entry.line, error))
                }
                (None, None) => {}
            }
        }
        out.push_str(&format!(
            "\n{} succeeded, {} failed in {}ms",
            self.succeeded, self.failed, self.duration_ms
        ));
        out
    }
}

impl HumanOutput for InspectResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Catalog entries: {}\n", self.catalog_size));
        out.push_str(&format!(
            "Vector length: {} ({:?} order)\n",
            self.vector_len, self.layout
        ));
        if !self.unmapped_features.is_empty() {
            out.push_str(&format!(
                "Unmapped model features: {}\n",
                self.unmapped_features.join(", ")
            ));
        }
        if let Some(classifier) = &self.classifier {
            out.push_str(&format!(
                "Classifier: {} ({} features, {})\n",
                classifier.name,
                classifier.feature_count,
                if classifier.compatible {
                    "compatible"
                } else {
                    "INCOMPATIBLE"
                }
            ));
            out.push_str(&format!("Classes: {}", classifier.labels.len()));
            for label in &classifier.labels {
                out.push_str(&format!("\n  {label}"));
            }
        }
        out.trim_end().to_string()
    }
}

fn format_symptoms(symptoms: &[String]) -> String {
    if symptoms.is_empty() {
        "Matched symptoms: none".to_string()
    } else {
        format!("Matched symptoms: {}", symptoms.join(", "))
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SymptomVectorArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &SymptomVectorArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SymptomVectorArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_result_human() {
        let result = VectorResult {
            normalized: "high fever".to_string(),
            matched_symptoms: vec!["high_fever".to_string()],
            layout: LayoutSource::Catalog,
            vector: vec![0, 1, 0],
        };
        let text = result.render_human();
        assert!(text.contains("Matched symptoms: high_fever"));
        assert!(text.contains("1 of 3 active"));
        assert!(text.ends_with("0 1 0"));
    }

    #[test]
    fn test_prediction_human() {
        let outcome = PredictionOutcome {
            user_input: "itching".to_string(),
            predicted_label: "Fungal infection".to_string(),
            confidence: Some(0.875),
            matched_symptoms: vec![],
        };
        let text = outcome.render_human();
        assert!(text.contains("Predicted condition: Fungal infection"));
        assert!(text.contains("Confidence: 87.5%"));
        assert!(text.contains("Matched symptoms: none"));
    }

    #[test]
    fn test_batch_entry_json_skips_empty_fields() {
        let entry = BatchPredictionEntry {
            line: 3,
            outcome: None,
            error: Some("Invalid input: user input cannot be empty".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"line":3,"error":"Invalid input: user input cannot be empty"}"#
        );
    }
}
