//! Behavioural properties of the symptom vector builder.

use std::sync::Arc;
use std::thread;

use symptom_vector::analysis::normalize;
use symptom_vector::catalog::{ModelFeatureOrder, SymptomCatalog};
use symptom_vector::features::{
    FeatureVector, MatchSet, SymptomVectorBuilder, assemble, match_symptoms,
};

const SAMPLE_INPUTS: &[&str] = &[
    "",
    "   ",
    "I have a high fever and persistent cough",
    "HIGH_FEVER!!! and Joint-Pain since yesterday...",
    "painting the wall gave me a headache",
    "Coughing, sneezing;\tfatigue\nand chills",
    "fièvre, toux et fatigue",
    "🤒🤧 fever 39°C",
    "no symptoms at all",
];

fn catalog() -> SymptomCatalog {
    SymptomCatalog::new([
        "fever",
        "high_fever",
        "cough",
        "fatigue",
        "joint_pain",
        "headache",
        "chills",
        "pain",
    ])
    .unwrap()
}

#[test]
fn test_vector_length_matches_catalog() {
    let catalog = catalog();
    for input in SAMPLE_INPUTS {
        let matches = match_symptoms(&normalize(input), &catalog);
        let vector = assemble(&matches, &catalog, None);
        assert_eq!(vector.len(), catalog.len(), "input: {input:?}");
    }
}

#[test]
fn test_vector_is_binary() {
    let order = ModelFeatureOrder::new(["Pain", "Cough", "Total Weight", "High Fever"]).unwrap();
    let builder = SymptomVectorBuilder::new(catalog(), Some(order)).unwrap();
    for input in SAMPLE_INPUTS {
        let built = builder.build(input);
        assert!(built.vector.as_slice().iter().all(|&v| v == 0 || v == 1));
        assert_eq!(built.vector.len(), 4);
    }
}

#[test]
fn test_normalizing_twice_matches_the_same() {
    let catalog = catalog();
    for input in SAMPLE_INPUTS {
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice);
        assert_eq!(
            match_symptoms(&once, &catalog),
            match_symptoms(&twice, &catalog),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_fever_and_cough_example() {
    let catalog = SymptomCatalog::new(["fever", "cough", "fatigue"]).unwrap();
    let matches = match_symptoms(
        &normalize("I have a high fever and persistent cough"),
        &catalog,
    );
    let expected: MatchSet = ["fever", "cough"].into_iter().collect();
    assert_eq!(matches, expected);
    assert_eq!(assemble(&matches, &catalog, None).as_slice(), &[1, 1, 0]);
}

#[test]
fn test_joint_pain_display_form() {
    let catalog = SymptomCatalog::new(["joint_pain"]).unwrap();
    let matches = match_symptoms(&normalize("my joint pain is severe"), &catalog);
    assert_eq!(matches.names(), &["joint_pain"]);
}

#[test]
fn test_model_order_casing_and_spacing() {
    let catalog = SymptomCatalog::new(["fever", "cough", "fatigue"]).unwrap();
    let order = ModelFeatureOrder::new(["Fever", "Cough", "Fatigue"]).unwrap();
    let matches: MatchSet = ["fever"].into_iter().collect();
    assert_eq!(
        assemble(&matches, &catalog, Some(&order)).as_slice(),
        &[1, 0, 0]
    );
}

#[test]
fn test_substring_matching_artifact() {
    let catalog = SymptomCatalog::new(["pain"]).unwrap();
    let matches = match_symptoms(&normalize("painting the wall"), &catalog);
    assert_eq!(matches.names(), &["pain"]);
}

#[test]
fn test_blank_input_gives_all_zero_vector() {
    let builder = SymptomVectorBuilder::new(catalog(), None).unwrap();
    for input in ["", "   ", "?!;:--", "\n\t"] {
        let built = builder.build(input);
        assert!(built.matches.is_empty());
        assert_eq!(built.vector, FeatureVector::zeros(builder.vector_len()));
    }
}

#[test]
fn test_layout_is_independent_of_requests() {
    let builder = SymptomVectorBuilder::new(catalog(), None).unwrap();
    let len = builder.vector_len();
    let names_before: Vec<String> = builder.layout().feature_names().map(str::to_string).collect();
    for input in SAMPLE_INPUTS {
        assert_eq!(builder.build(input).vector.len(), len);
    }
    let names_after: Vec<String> = builder.layout().feature_names().map(str::to_string).collect();
    assert_eq!(names_before, names_after);
}

#[test]
fn test_concurrent_builds_agree_with_sequential() {
    let builder = Arc::new(SymptomVectorBuilder::new(catalog(), None).unwrap());
    let expected: Vec<_> = SAMPLE_INPUTS.iter().map(|s| builder.build(s)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let builder = Arc::clone(&builder);
            thread::spawn(move || {
                SAMPLE_INPUTS
                    .iter()
                    .map(|s| builder.build(s))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
