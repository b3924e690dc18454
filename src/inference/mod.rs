//! Inference service core
//!
//! [`ModelService`] owns the process-wide model slot. The slot is filled
//! exactly once, at startup, by [`ModelService::load`]; a failed load is
//! deferred rather than propagated: the service starts anyway and every
//! request that needs the model reports [`Error::ModelUnavailable`]
//! carrying the preserved load-failure reason. After startup the slot is
//! read-only, so request handlers share it behind an `Arc` without
//! locking.

use crate::model::{Classifier, ModelArtifact, ModelMetadata};
use crate::{Error, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// One prediction input: the four iris measurements in cm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Sepal length in cm
    pub sepal_length: f64,
    /// Sepal width in cm
    pub sepal_width: f64,
    /// Petal length in cm
    pub petal_length: f64,
    /// Petal width in cm
    pub petal_width: f64,
}

impl FeatureVector {
    /// Value of the feature with the given metadata name, if known
    fn value(&self, name: &str) -> Option<f64> {
        match name {
            "sepal_length" => Some(self.sepal_length),
            "sepal_width" => Some(self.sepal_width),
            "petal_length" => Some(self.petal_length),
            "petal_width" => Some(self.petal_width),
            _ => None,
        }
    }
}

/// One prediction output
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class name, one of the metadata's `classes`
    pub label: String,
    /// Maximum class probability; absent for label-only classifiers
    pub confidence: Option<f64>,
}

/// Process-wide model slot: loaded once, never reloaded
enum ModelSlot {
    Loaded(Arc<ModelArtifact>),
    Unavailable(String),
}

/// The inference service: a loaded (or deliberately unloaded) model plus
/// the predict/describe operations on it
pub struct ModelService {
    slot: ModelSlot,
}

impl ModelService {
    /// Attempt the one-time artifact load; failures are deferred
    ///
    /// This never fails: a missing or corrupt artifact leaves the service
    /// answering health checks while predict/describe report the reason.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match crate::io::load_artifact(path.as_ref()) {
            Ok(artifact) => Self {
                slot: ModelSlot::Loaded(Arc::new(artifact)),
            },
            Err(e) => Self {
                slot: ModelSlot::Unavailable(e.to_string()),
            },
        }
    }

    /// Build a service around an already-loaded artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            slot: ModelSlot::Loaded(Arc::new(artifact)),
        }
    }

    /// Whether the artifact loaded successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.slot, ModelSlot::Loaded(_))
    }

    /// The load-failure reason, when the model is unavailable
    pub fn load_error(&self) -> Option<&str> {
        match &self.slot {
            ModelSlot::Loaded(_) => None,
            ModelSlot::Unavailable(reason) => Some(reason),
        }
    }

    fn artifact(&self) -> Result<&ModelArtifact> {
        match &self.slot {
            ModelSlot::Loaded(artifact) => Ok(artifact),
            ModelSlot::Unavailable(reason) => Err(Error::ModelUnavailable(reason.clone())),
        }
    }

    /// Classify one feature vector
    ///
    /// Assembles a single-row matrix in the exact order declared by the
    /// metadata's feature names, runs the pipeline, and maps the
    /// predicted class id through the metadata's class names. Confidence
    /// is the maximum class probability when the classifier supports
    /// probability output, absent otherwise.
    pub fn predict(&self, input: &FeatureVector) -> Result<Prediction> {
        let artifact = self.artifact()?;
        let meta = &artifact.metadata;

        let mut row = Vec::with_capacity(meta.features.len());
        for name in &meta.features {
            let value = input.value(name).ok_or_else(|| {
                Error::ModelInconsistency(format!(
                    "metadata declares unknown feature '{name}'"
                ))
            })?;
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "feature '{name}' must be a finite number, got {value}"
                )));
            }
            row.push(value);
        }

        let n = row.len();
        let x = Array2::from_shape_vec((1, n), row)
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        let x = artifact.pipeline.scaler.transform(&x);

        let (class_id, confidence) = match &artifact.pipeline.classifier {
            Classifier::Logistic(model) => {
                let proba = model.predict_probabilities(&x);
                let max = proba
                    .row(0)
                    .iter()
                    .cloned()
                    .fold(f64::NEG_INFINITY, f64::max);
                if !max.is_finite() {
                    return Err(Error::InvalidInput(format!(
                        "probability inference produced a non-finite value ({max}) for the given features"
                    )));
                }
                let class_id = artifact.pipeline.classifier.predict(&x)[0];
                (class_id, Some(max))
            }
            Classifier::NearestCentroid(model) => (model.predict_row(x.row(0)), None),
        };

        let label = meta.classes.get(class_id).cloned().ok_or_else(|| {
            Error::ModelInconsistency(format!(
                "predicted class id {class_id} has no name among {} classes",
                meta.classes.len()
            ))
        })?;

        Ok(Prediction { label, confidence })
    }

    /// The metadata record, verbatim
    ///
    /// Returns the same in-memory record the predict path consults, so
    /// class ordering reported here is exactly what predictions use.
    pub fn describe(&self) -> Result<&ModelMetadata> {
        Ok(&self.artifact()?.metadata)
    }
}
