//! Training pipeline
//!
//! Fits a two-stage pipeline on the bundled iris dataset:
//! standardization statistics learned from the training split only,
//! followed by a classifier fit on the standardized training features.
//! The held-out split is transformed with the training-split statistics
//! (never refit) before evaluation, then the fitted pipeline and its
//! metadata are written as a single artifact.

use crate::io::save_artifact;
use crate::model::{
    Classifier, ModelArtifact, ModelMetadata, NearestCentroid, Pipeline, StandardScaler,
};
use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use linfa::prelude::*;
use linfa_logistic::MultiLogisticRegression;
use ndarray::{Array1, Array2, Axis, Ix1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Ordered feature names; prediction inputs must match this order
pub const FEATURES: [&str; 4] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

/// Class names, indexed by the dataset's class ids
pub const CLASSES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Held-out fraction per class
const TEST_FRACTION: f64 = 0.2;

/// Solver iteration cap for the logistic classifier
const MAX_ITERATIONS: u64 = 500;

/// Classifier kind to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierChoice {
    /// Multinomial logistic regression (probability-capable)
    #[default]
    Logistic,
    /// Nearest-centroid (label-only)
    NearestCentroid,
}

/// Training options
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Artifact output path
    pub output: PathBuf,
    /// Classifier kind
    pub classifier: ClassifierChoice,
    /// Random seed for the stratified split
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(crate::io::DEFAULT_MODEL_PATH),
            classifier: ClassifierChoice::default(),
            seed: 42,
        }
    }
}

/// Outcome of a training run
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Held-out accuracy in [0, 1]
    pub accuracy: f64,
    /// Where the artifact was written
    pub path: PathBuf,
    /// Model type description recorded in metadata
    pub model_type: String,
}

/// Fit, evaluate, and save an iris classification pipeline
pub fn train(options: &TrainOptions) -> Result<TrainReport> {
    let dataset = linfa_datasets::iris();
    let (train, test) = stratified_split(&dataset, TEST_FRACTION, options.seed);

    let scaler = StandardScaler::fit(&train.records)?;
    let x_train = scaler.transform(&train.records);
    let x_test = scaler.transform(&test.records);

    let classifier = fit_classifier(options.classifier, x_train, &train.targets)?;
    let accuracy = accuracy(&classifier.predict(&x_test), &test.targets);

    let model_type = format!("{} with standard scaling", classifier.name());
    let metadata = ModelMetadata {
        model_type: model_type.clone(),
        problem_type: "classification".to_string(),
        trained_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        features: FEATURES.iter().map(|s| s.to_string()).collect(),
        classes: CLASSES.iter().map(|s| s.to_string()).collect(),
        metrics: HashMap::from([("test_accuracy".to_string(), round4(accuracy))]),
    };

    let artifact = ModelArtifact {
        pipeline: Pipeline { scaler, classifier },
        metadata,
    };
    save_artifact(&artifact, &options.output)?;

    Ok(TrainReport {
        accuracy,
        path: options.output.clone(),
        model_type,
    })
}

fn fit_classifier(
    choice: ClassifierChoice,
    x_train: Array2<f64>,
    y_train: &Array1<usize>,
) -> Result<Classifier> {
    match choice {
        ClassifierChoice::Logistic => {
            let scaled = DatasetBase::new(x_train, y_train.to_owned());
            let model = MultiLogisticRegression::default()
                .max_iterations(MAX_ITERATIONS)
                .fit(&scaled)
                .map_err(|e| Error::Train(format!("logistic regression fit failed: {e}")))?;
            Ok(Classifier::Logistic(model))
        }
        ClassifierChoice::NearestCentroid => Ok(Classifier::NearestCentroid(
            NearestCentroid::fit(&x_train, y_train)?,
        )),
    }
}

/// Per-class 80/20 split with a seeded shuffle, so every class keeps the
/// same train/test proportion and runs are reproducible.
fn stratified_split(
    dataset: &Dataset<f64, usize, Ix1>,
    test_fraction: f64,
    seed: u64,
) -> (Dataset<f64, usize, Ix1>, Dataset<f64, usize, Ix1>) {
    let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, &class) in dataset.targets.iter().enumerate() {
        by_class.entry(class).or_default().push(i);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_idx = Vec::new();
    let mut test_idx = Vec::new();
    for mut indices in by_class.into_values() {
        indices.shuffle(&mut rng);
        let n_test = (indices.len() as f64 * test_fraction).round() as usize;
        test_idx.extend_from_slice(&indices[..n_test]);
        train_idx.extend_from_slice(&indices[n_test..]);
    }

    (subset(dataset, &train_idx), subset(dataset, &test_idx))
}

fn subset(dataset: &Dataset<f64, usize, Ix1>, indices: &[usize]) -> Dataset<f64, usize, Ix1> {
    DatasetBase::new(
        dataset.records.select(Axis(0), indices),
        dataset.targets.select(Axis(0), indices),
    )
}

fn accuracy(predicted: &Array1<usize>, expected: &Array1<usize>) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(expected.iter())
        .filter(|(p, e)| p == e)
        .count();
    correct as f64 / expected.len() as f64
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    #[test]
    fn test_stratified_split_keeps_class_proportions() {
        let dataset = linfa_datasets::iris();
        let (train, test) = stratified_split(&dataset, TEST_FRACTION, 42);

        assert_eq!(train.targets.len(), 120);
        assert_eq!(test.targets.len(), 30);
        for class in 0..3 {
            let in_test = test.targets.iter().filter(|&&c| c == class).count();
            assert_eq!(in_test, 10, "class {class} should hold out 10 samples");
        }
    }

    #[test]
    fn test_stratified_split_is_reproducible() {
        let dataset = linfa_datasets::iris();
        let (_, test_a) = stratified_split(&dataset, TEST_FRACTION, 42);
        let (_, test_b) = stratified_split(&dataset, TEST_FRACTION, 42);
        assert_eq!(test_a.targets, test_b.targets);
        assert_eq!(test_a.records, test_b.records);
    }

    #[test]
    fn test_accuracy_counts_matches() {
        let predicted = array![0, 1, 2, 2];
        let expected = array![0, 1, 1, 2];
        assert!((accuracy(&predicted, &expected) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_round4() {
        assert!((round4(0.966_666_7) - 0.9667).abs() < 1e-12);
    }

    #[test]
    fn test_train_writes_artifact_with_expected_metadata() {
        let dir = tempdir().unwrap();
        let options = TrainOptions {
            output: dir.path().join("model.json"),
            ..TrainOptions::default()
        };

        let report = train(&options).expect("training should succeed");
        assert!(report.accuracy > 0.85, "accuracy was {}", report.accuracy);

        let artifact = crate::io::load_artifact(&options.output).expect("load should succeed");
        assert_eq!(artifact.metadata.features, FEATURES.to_vec());
        assert_eq!(artifact.metadata.classes, CLASSES.to_vec());
        assert_eq!(artifact.metadata.problem_type, "classification");
        let recorded = artifact.metadata.metrics["test_accuracy"];
        assert!((recorded - round4(report.accuracy)).abs() < 1e-12);
    }

    #[test]
    fn test_train_centroid_variant() {
        let dir = tempdir().unwrap();
        let options = TrainOptions {
            output: dir.path().join("model.json"),
            classifier: ClassifierChoice::NearestCentroid,
            ..TrainOptions::default()
        };

        let report = train(&options).expect("training should succeed");
        assert!(report.accuracy > 0.7, "accuracy was {}", report.accuracy);
        assert!(report.model_type.contains("NearestCentroid"));

        let artifact = crate::io::load_artifact(&options.output).expect("load should succeed");
        assert!(!artifact.pipeline.classifier.supports_probabilities());
    }

    #[test]
    fn test_train_unwritable_path_fails() {
        let options = TrainOptions {
            output: PathBuf::from("/nonexistent-dir/model.json"),
            ..TrainOptions::default()
        };
        assert!(train(&options).is_err());
    }
}
