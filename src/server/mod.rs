//! HTTP inference server
//!
//! Thin axum layer over [`crate::inference::ModelService`]:
//!
//! - `GET /` — liveness only, never consults the model
//! - `POST /predict` — classify one feature vector
//! - `GET /model-info` — the artifact metadata, verbatim
//!
//! Error mapping: `ModelUnavailable` → 503, `InvalidInput` → 400,
//! everything else → 500.
//!
//! # Example
//!
//! ```ignore
//! use predecir::inference::ModelService;
//! use predecir::server::{serve, ServerConfig};
//!
//! let service = ModelService::load("model.json");
//! serve(ServerConfig::default(), service).await?;
//! ```

mod api;
mod handlers;
mod state;

pub use api::{router, serve};
pub use handlers::{health_check, model_info, predict};
pub use state::AppState;

use crate::inference::FeatureVector;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub address: SocketAddr,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8000".parse().expect("static address is valid"),
            max_body_size: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// Config with a custom bind address
    pub fn with_address(mut self, address: SocketAddr) -> Self {
        self.address = address;
        self
    }

    /// Config with a custom body size limit
    pub fn with_max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }
}

// =============================================================================
// Request/Response DTOs
// =============================================================================

/// Predict request body: the four iris measurements, all required
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Sepal length in cm
    pub sepal_length: f64,
    /// Sepal width in cm
    pub sepal_width: f64,
    /// Petal length in cm
    pub petal_length: f64,
    /// Petal width in cm
    pub petal_width: f64,
}

impl From<PredictRequest> for FeatureVector {
    fn from(req: PredictRequest) -> Self {
        FeatureVector {
            sepal_length: req.sepal_length,
            sepal_width: req.sepal_width,
            petal_length: req.petal_length,
            petal_width: req.petal_width,
        }
    }
}

/// Predict response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted class name
    pub prediction: String,
    /// Maximum class probability; null for label-only classifiers
    pub confidence: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Human-readable liveness message
    pub message: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Failure description
    pub error: String,
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_server_config_port_preserved(port in 1024u16..65535) {
            let addr: SocketAddr = format!("127.0.0.1:{port}").parse().unwrap();
            let config = ServerConfig::default().with_address(addr);
            prop_assert_eq!(config.address.port(), port);
        }

        #[test]
        fn prop_predict_request_roundtrip(
            sl in -100.0f64..100.0,
            sw in -100.0f64..100.0,
            pl in -100.0f64..100.0,
            pw in -100.0f64..100.0,
        ) {
            let req = PredictRequest {
                sepal_length: sl,
                sepal_width: sw,
                petal_length: pl,
                petal_width: pw,
            };
            let json = serde_json::to_string(&req).unwrap();
            let parsed: PredictRequest = serde_json::from_str(&json).unwrap();
            prop_assert!((parsed.sepal_length - sl).abs() < 1e-9);
            prop_assert!((parsed.petal_width - pw).abs() < 1e-9);
        }

        #[test]
        fn prop_predict_response_roundtrip(
            label in "[a-z]{1,20}",
            confidence in proptest::option::of(0.0f64..=1.0),
        ) {
            let response = PredictResponse {
                prediction: label.clone(),
                confidence,
            };
            let json = serde_json::to_string(&response).unwrap();
            let parsed: PredictResponse = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed.prediction, label);
            prop_assert_eq!(parsed.confidence.is_some(), confidence.is_some());
        }
    }
}
