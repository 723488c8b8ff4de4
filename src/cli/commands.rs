//! Command implementations for the symptom-vector CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::analysis::normalize;
use crate::catalog::{ModelFeatureOrder, SymptomCatalog};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SymptomError};
use crate::features::SymptomVectorBuilder;
use crate::ml::{Classifier, PrototypeClassifier};
use crate::pipeline::Predictor;

/// Execute a CLI command.
pub fn execute_command(args: SymptomVectorArgs) -> Result<()> {
    match &args.command {
        Command::Normalize(normalize_args) => normalize_text(normalize_args, &args),
        Command::Match(match_args) => match_text(match_args, &args),
        Command::Vector(vector_args) => build_vector(vector_args, &args),
        Command::Predict(predict_args) => predict(predict_args, &args),
        Command::Inspect(inspect_args) => inspect(inspect_args, &args),
    }
}

/// Load the builder described by catalog arguments.
fn load_builder(args: &CatalogArgs) -> Result<SymptomVectorBuilder> {
    let catalog = SymptomCatalog::from_file(&args.catalog, &args.label_column)?;
    let model_order = args
        .model_order
        .as_deref()
        .map(|path| ModelFeatureOrder::from_file(path, &args.label_column))
        .transpose()?;
    SymptomVectorBuilder::new(catalog, model_order)
}

fn normalize_text(args: &NormalizeArgs, cli_args: &SymptomVectorArgs) -> Result<()> {
    output_result(
        "Normalized text",
        &NormalizeResult {
            input: args.text.clone(),
            normalized: normalize(&args.text),
        },
        cli_args,
    )
}

fn match_text(args: &MatchArgs, cli_args: &SymptomVectorArgs) -> Result<()> {
    let catalog = SymptomCatalog::from_file(&args.catalog.catalog, &args.catalog.label_column)?;
    let builder = SymptomVectorBuilder::new(catalog, None)?;

    let normalized = builder.normalize(&args.text);
    let matches = builder.find(&normalized);

    output_result(
        "Symptoms found",
        &MatchResult {
            normalized,
            matched_symptoms: matches.into_names(),
        },
        cli_args,
    )
}

fn build_vector(args: &VectorArgs, cli_args: &SymptomVectorArgs) -> Result<()> {
    let builder = load_builder(&args.catalog)?.with_max_input_chars(args.max_input_chars);
    let built = builder.build(&args.text);

    output_result(
        "Feature vector built",
        &VectorResult {
            normalized: built.normalized,
            matched_symptoms: built.matches.into_names(),
            layout: builder.layout().source(),
            vector: built.vector.as_slice().to_vec(),
        },
        cli_args,
    )
}

fn predict(args: &PredictArgs, cli_args: &SymptomVectorArgs) -> Result<()> {
    let config = args.service_config()?;
    let predictor = Predictor::from_config(&config)?;

    match (&args.text, &args.input_file) {
        (_, Some(path)) => predict_file(&predictor, path, cli_args),
        (Some(text), None) => {
            let outcome = predictor.predict_text(text)?;
            output_result("Prediction", &outcome, cli_args)
        }
        (None, None) => Err(SymptomError::invalid_input(
            "either TEXT or --input-file is required",
        )),
    }
}

fn predict_file(predictor: &Predictor, path: &Path, cli_args: &SymptomVectorArgs) -> Result<()> {
    let result = run_batch(predictor, path)?;
    output_result("Batch prediction", &result, cli_args)
}

/// Predict every line of `path`; line numbers are 1-based.
fn run_batch(predictor: &Predictor, path: &Path) -> Result<BatchPredictionResult> {
    let content = fs::read_to_string(path).map_err(|e| SymptomError::io_at(path, e))?;
    let lines: Vec<&str> = content.lines().collect();
    info!("Predicting {} requests from {}", lines.len(), path.display());

    let start_time = Instant::now();
    let results = predictor.predict_batch(&lines);
    let duration = start_time.elapsed();

    let mut succeeded = 0;
    let mut failed = 0;
    let entries = results
        .into_iter()
        .enumerate()
        .map(|(i, result)| match result {
            Ok(outcome) => {
                succeeded += 1;
                BatchPredictionEntry {
                    line: i + 1,
                    outcome: Some(outcome),
                    error: None,
                }
            }
            Err(e) => {
                failed += 1;
                BatchPredictionEntry {
                    line: i + 1,
                    outcome: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    Ok(BatchPredictionResult {
        entries,
        succeeded,
        failed,
        duration_ms: duration.as_millis() as u64,
    })
}

fn inspect(args: &InspectArgs, cli_args: &SymptomVectorArgs) -> Result<()> {
    output_result("Artifact details", &inspect_result(args)?, cli_args)
}

fn inspect_result(args: &InspectArgs) -> Result<InspectResult> {
    let builder = load_builder(&args.catalog)?;
    let layout = builder.layout();

    let classifier = match &args.model {
        Some(path) => {
            let classifier = PrototypeClassifier::load(path)?;
            Some(ClassifierSummary {
                name: classifier.name().to_string(),
                feature_count: classifier.feature_count(),
                has_feature_names: classifier.feature_names().is_some(),
                compatible: classifier.feature_count() == builder.vector_len(),
                labels: classifier.labels().into_iter().map(str::to_string).collect(),
            })
        }
        None => None,
    };

    Ok(InspectResult {
        catalog_size: builder.catalog().len(),
        vector_len: builder.vector_len(),
        layout: layout.source(),
        unmapped_features: layout
            .unmapped_features()
            .into_iter()
            .map(str::to_string)
            .collect(),
        classifier,
    })
}
