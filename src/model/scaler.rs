//! Feature standardization (zero mean, unit variance)

use crate::{Error, Result};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Per-feature standardization statistics learned from a training matrix
///
/// Statistics are learned once from the training split and applied
/// unchanged to every later matrix, including the held-out evaluation
/// split and inference-time rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Learn column means and standard deviations from `x`
    ///
    /// Zero-variance columns get a unit divisor so transformation stays
    /// finite.
    pub fn fit(x: &Array2<f64>) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(Error::Train(
                "cannot fit scaler on an empty matrix".to_string(),
            ));
        }

        let mean = x
            .mean_axis(Axis(0))
            .ok_or_else(|| Error::Train("cannot fit scaler on an empty matrix".to_string()))?
            .to_vec();
        let std = x
            .std_axis(Axis(0), 0.0)
            .iter()
            .map(|&s| if s > 0.0 { s } else { 1.0 })
            .collect();

        Ok(Self { mean, std })
    }

    /// Scaler that leaves its input unchanged (zero mean, unit std)
    pub fn identity(n_features: usize) -> Self {
        Self {
            mean: vec![0.0; n_features],
            std: vec![1.0; n_features],
        }
    }

    /// Number of feature columns the scaler was fit on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardize each column of `x` with the learned statistics
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        debug_assert_eq!(x.ncols(), self.n_features());

        let mut out = x.to_owned();
        for (j, mut col) in out.axis_iter_mut(Axis(1)).enumerate() {
            let mean = self.mean[j];
            let std = self.std[j];
            col.mapv_inplace(|v| (v - mean) / std);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_learns_column_statistics() {
        let x = array![[1.0, 10.0], [3.0, 10.0], [5.0, 10.0]];
        let scaler = StandardScaler::fit(&x).expect("fit should succeed");

        let scaled = scaler.transform(&x);
        for j in 0..2 {
            let col = scaled.column(j);
            let mean: f64 = col.iter().sum::<f64>() / col.len() as f64;
            assert!(mean.abs() < 1e-12, "column {j} mean should be 0, got {mean}");
        }
    }

    #[test]
    fn test_zero_variance_column_stays_finite() {
        let x = array![[2.0], [2.0], [2.0]];
        let scaler = StandardScaler::fit(&x).expect("fit should succeed");
        let scaled = scaler.transform(&x);
        assert!(scaled.iter().all(|v| v.is_finite()));
        assert!(scaled.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_fit_empty_matrix_fails() {
        let x = Array2::<f64>::zeros((0, 4));
        assert!(StandardScaler::fit(&x).is_err());
    }

    #[test]
    fn test_identity_is_noop() {
        let x = array![[1.5, -2.0], [0.0, 7.0]];
        let scaled = StandardScaler::identity(2).transform(&x);
        assert_eq!(scaled, x);
    }

    #[test]
    fn test_transform_uses_training_statistics_only() {
        let train = array![[0.0], [2.0]];
        let scaler = StandardScaler::fit(&train).expect("fit should succeed");

        // Values outside the training range scale with the same statistics.
        let scaled = scaler.transform(&array![[4.0]]);
        assert!((scaled[[0, 0]] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_roundtrip() {
        let scaler =
            StandardScaler::fit(&array![[1.0, 2.0], [3.0, 4.0]]).expect("fit should succeed");
        let json = serde_json::to_string(&scaler).expect("serialize should succeed");
        let parsed: StandardScaler =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(parsed, scaler);
    }
}
