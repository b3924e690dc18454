//! Shared request-handling state

use crate::inference::ModelService;
use crate::server::ServerConfig;
use std::sync::Arc;

/// State shared by all request handlers
///
/// The model slot inside [`ModelService`] is populated before the first
/// request is accepted and read-only afterwards, so handlers share it
/// behind an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// The process-wide model service
    pub service: Arc<ModelService>,
}

impl AppState {
    /// Bundle config and the loaded (or deliberately unloaded) service
    pub fn new(config: ServerConfig, service: ModelService) -> Self {
        Self {
            config,
            service: Arc::new(service),
        }
    }
}
