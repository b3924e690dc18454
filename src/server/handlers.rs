//! HTTP request handlers
//!
//! Axum handlers for the inference API.

use crate::model::ModelMetadata;
use crate::server::{
    state::AppState, ErrorResponse, HealthResponse, PredictRequest, PredictResponse,
};
use crate::Error;
use axum::{extract::State, http::StatusCode, Json};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: &Error) -> ApiError {
    let status = match err {
        Error::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Liveness probe; succeeds regardless of model state
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        message: "iris inference service is running".to_string(),
    };
    (StatusCode::OK, Json(health))
}

/// Classify one feature vector
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    match state.service.predict(&payload.into()) {
        Ok(prediction) => Ok(Json(PredictResponse {
            prediction: prediction.label,
            confidence: prediction.confidence,
        })),
        Err(e) => Err(error_response(&e)),
    }
}

/// The artifact metadata, verbatim
pub async fn model_info(
    State(state): State<AppState>,
) -> Result<Json<ModelMetadata>, ApiError> {
    match state.service.describe() {
        Ok(metadata) => Ok(Json(metadata.clone())),
        Err(e) => Err(error_response(&e)),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::ModelService;
    use crate::model::{
        Classifier, ModelArtifact, NearestCentroid, Pipeline, StandardScaler,
    };
    use crate::server::ServerConfig;
    use ndarray::array;
    use std::collections::HashMap;

    fn loaded_state() -> AppState {
        let classifier = Classifier::NearestCentroid(
            NearestCentroid::fit(
                &array![[0.0, 0.0, 0.0, 0.0], [10.0, 10.0, 10.0, 10.0]],
                &array![0, 1],
            )
            .expect("fit should succeed"),
        );
        let artifact = ModelArtifact {
            pipeline: Pipeline {
                scaler: StandardScaler::identity(4),
                classifier,
            },
            metadata: ModelMetadata {
                model_type: "NearestCentroid with standard scaling".to_string(),
                problem_type: "classification".to_string(),
                trained_at: "2024-01-15T10:00:00Z".to_string(),
                features: crate::train::FEATURES.iter().map(|s| s.to_string()).collect(),
                classes: vec!["near".to_string(), "far".to_string()],
                metrics: HashMap::from([("test_accuracy".to_string(), 1.0)]),
            },
        };
        AppState::new(
            ServerConfig::default(),
            ModelService::from_artifact(artifact),
        )
    }

    fn unloaded_state() -> AppState {
        AppState::new(
            ServerConfig::default(),
            ModelService::load("/nonexistent/model.json"),
        )
    }

    fn request(values: [f64; 4]) -> PredictRequest {
        PredictRequest {
            sepal_length: values[0],
            sepal_width: values[1],
            petal_length: values[2],
            petal_width: values[3],
        }
    }

    #[tokio::test]
    async fn test_health_check_always_healthy() {
        let (status, Json(body)) = health_check().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn test_predict_success() {
        let result = predict(
            State(loaded_state()),
            Json(request([0.1, 0.0, 0.2, 0.1])),
        )
        .await;

        let Json(body) = result.expect("predict should succeed");
        assert_eq!(body.prediction, "near");
        assert_eq!(body.confidence, None);
    }

    #[tokio::test]
    async fn test_predict_unloaded_model_is_service_unavailable() {
        let result = predict(
            State(unloaded_state()),
            Json(request([0.1, 0.0, 0.2, 0.1])),
        )
        .await;

        let (status, Json(body)) = result.expect_err("predict should fail");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.error.contains("model not loaded"));
    }

    #[tokio::test]
    async fn test_predict_non_finite_input_is_bad_request() {
        let result = predict(
            State(loaded_state()),
            Json(request([f64::NAN, 0.0, 0.2, 0.1])),
        )
        .await;

        let (status, Json(body)) = result.expect_err("predict should fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("sepal_length"));
    }

    #[tokio::test]
    async fn test_model_info_returns_metadata_verbatim() {
        let state = loaded_state();
        let result = model_info(State(state.clone())).await;

        let Json(metadata) = result.expect("model-info should succeed");
        let expected = state.service.describe().expect("describe should succeed");
        assert_eq!(&metadata, expected);
    }

    #[tokio::test]
    async fn test_model_info_unloaded_model_is_service_unavailable() {
        let result = model_info(State(unloaded_state())).await;

        let (status, _) = result.expect_err("model-info should fail");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
