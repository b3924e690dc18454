//! Model artifact structures
//!
//! The artifact is the only interface between training and serving: a
//! fitted [`Pipeline`] (scaler + classifier) bundled with descriptive
//! [`ModelMetadata`]. Both halves are produced together by `train` and
//! consumed read-only by the inference service.

mod classifier;
mod scaler;

pub use classifier::{Classifier, NearestCentroid};
pub use scaler::StandardScaler;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive metadata recorded alongside the fitted pipeline
///
/// `classes[i]` is the human-readable name for internal class id `i`;
/// `features` is the exact column order the pipeline was fit on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model type description (e.g. "LogisticRegression with StandardScaler")
    pub model_type: String,

    /// Problem type, always "classification"
    pub problem_type: String,

    /// Training timestamp, RFC 3339 UTC
    pub trained_at: String,

    /// Ordered feature names matching the pipeline's input columns
    pub features: Vec<String>,

    /// Ordered class names; index `i` names class id `i`
    pub classes: Vec<String>,

    /// Evaluation metrics, at minimum `test_accuracy` in [0, 1]
    pub metrics: HashMap<String, f64>,
}

/// Fitted transformation + classification chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Stage 1: per-feature standardization learned from the training split
    pub scaler: StandardScaler,

    /// Stage 2: the fitted classifier
    pub classifier: Classifier,
}

impl Pipeline {
    /// Predict class ids for each row of `x` (unscaled feature space)
    pub fn predict(&self, x: &Array2<f64>) -> Array1<usize> {
        self.classifier.predict(&self.scaler.transform(x))
    }
}

/// The serialized bundle written by training and loaded by serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Fitted pipeline
    pub pipeline: Pipeline,

    /// Descriptive metadata
    pub metadata: ModelMetadata,
}
