//! Capability-polymorphic classifiers
//!
//! The pipeline's classification stage is one of two fitted model kinds,
//! tagged in the artifact and decided once at load time:
//!
//! - [`Classifier::Logistic`]: multinomial logistic regression; emits a
//!   class-probability distribution per row.
//! - [`Classifier::NearestCentroid`]: hard labels only, no probabilities.

use crate::{Error, Result};
use linfa::traits::Predict;
use linfa_logistic::MultiFittedLogisticRegression;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

/// Fitted classification stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum Classifier {
    /// Multinomial logistic regression (probability-capable)
    Logistic(MultiFittedLogisticRegression<f64, usize>),

    /// Nearest-centroid classifier (label-only)
    NearestCentroid(NearestCentroid),
}

impl Classifier {
    /// Whether this classifier can emit class-probability distributions
    pub fn supports_probabilities(&self) -> bool {
        match self {
            Classifier::Logistic(_) => true,
            Classifier::NearestCentroid(_) => false,
        }
    }

    /// Short name used in metadata descriptions
    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Logistic(_) => "LogisticRegression",
            Classifier::NearestCentroid(_) => "NearestCentroid",
        }
    }

    /// Predict a class id per row of the (already standardized) matrix
    pub fn predict(&self, x: &Array2<f64>) -> Array1<usize> {
        match self {
            Classifier::Logistic(model) => model.predict(x),
            Classifier::NearestCentroid(model) => {
                Array1::from_iter(x.axis_iter(Axis(0)).map(|row| model.predict_row(row)))
            }
        }
    }

    /// Class-probability distributions per row, if supported
    pub fn predict_probabilities(&self, x: &Array2<f64>) -> Option<Array2<f64>> {
        match self {
            Classifier::Logistic(model) => Some(model.predict_probabilities(x)),
            Classifier::NearestCentroid(_) => None,
        }
    }
}

/// Nearest-centroid classifier: one centroid per class id, prediction is
/// the class whose centroid is closest in Euclidean distance (ties broken
/// by lowest class id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestCentroid {
    centroids: Array2<f64>,
}

impl NearestCentroid {
    /// Compute per-class centroids from rows of `x` labeled by `y`
    ///
    /// Class ids must be contiguous starting at 0; every class id up to
    /// the maximum must have at least one sample.
    pub fn fit(x: &Array2<f64>, y: &Array1<usize>) -> Result<Self> {
        if x.nrows() == 0 || x.nrows() != y.len() {
            return Err(Error::Train(format!(
                "centroid fit needs matching non-empty samples, got {} rows and {} labels",
                x.nrows(),
                y.len()
            )));
        }

        let n_classes = y.iter().max().copied().unwrap_or(0) + 1;
        let mut sums = Array2::<f64>::zeros((n_classes, x.ncols()));
        let mut counts = vec![0usize; n_classes];

        for (row, &class) in x.axis_iter(Axis(0)).zip(y.iter()) {
            let mut sum = sums.row_mut(class);
            sum += &row;
            counts[class] += 1;
        }

        for (class, &count) in counts.iter().enumerate() {
            if count == 0 {
                return Err(Error::Train(format!("class id {class} has no samples")));
            }
            let mut row = sums.row_mut(class);
            row /= count as f64;
        }

        Ok(Self { centroids: sums })
    }

    /// Number of classes (centroid rows)
    pub fn n_classes(&self) -> usize {
        self.centroids.nrows()
    }

    /// Class id of the closest centroid for a single feature row
    pub fn predict_row(&self, row: ArrayView1<'_, f64>) -> usize {
        let mut best = 0usize;
        let mut best_dist = f64::INFINITY;
        for (class, centroid) in self.centroids.axis_iter(Axis(0)).enumerate() {
            let dist: f64 = centroid
                .iter()
                .zip(row.iter())
                .map(|(c, v)| (c - v) * (c - v))
                .sum();
            if dist < best_dist {
                best = class;
                best_dist = dist;
            }
        }
        best
    }
}
