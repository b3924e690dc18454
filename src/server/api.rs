//! Router assembly and server entry point

use crate::inference::ModelService;
use crate::server::{handlers, AppState, ServerConfig};
use crate::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

/// Build the inference router over shared state
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_body_size;
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/predict", post(handlers::predict))
        .route("/model-info", get(handlers::model_info))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind and serve until the process is stopped
///
/// The model slot in `service` was populated (or left deliberately
/// empty) before this is called; startup itself never fails because of
/// a missing model.
pub async fn serve(config: ServerConfig, service: ModelService) -> Result<()> {
    let address = config.address;
    let state = AppState::new(config, service);

    let listener = TcpListener::bind(address).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
