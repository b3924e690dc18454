//! Predecir: train and serve an iris classifier
//!
//! Two components connected only through a serialized artifact file:
//!
//! - [`train`]: fits a standard-scaling + classification pipeline on the
//!   bundled iris dataset, evaluates it on a held-out split, and writes a
//!   [`model::ModelArtifact`] (pipeline + metadata) as JSON.
//! - [`inference`] / [`server`]: loads the artifact once at startup and
//!   answers predict / model-info / health requests over HTTP.
//!
//! A failed load at startup is deferred: the service still starts and
//! answers health checks, and every request that needs the model reports
//! [`Error::ModelUnavailable`] with the preserved load-failure reason.
//!
//! # Example
//!
//! ```no_run
//! use predecir::inference::{FeatureVector, ModelService};
//!
//! let service = ModelService::load("model.json");
//! let prediction = service.predict(&FeatureVector {
//!     sepal_length: 5.1,
//!     sepal_width: 3.5,
//!     petal_length: 1.4,
//!     petal_width: 0.2,
//! })?;
//! println!("{} ({:?})", prediction.label, prediction.confidence);
//! # Ok::<(), predecir::Error>(())
//! ```

pub mod cli;
pub mod inference;
pub mod io;
pub mod model;
pub mod server;
pub mod train;

use thiserror::Error as ThisError;

/// Crate-wide error type
#[derive(Debug, ThisError)]
pub enum Error {
    /// The model artifact is not loaded; requests that need it cannot be served
    #[error("model not loaded ({0}); run `predecir train` and restart the service")]
    ModelUnavailable(String),

    /// The supplied feature values could not be consumed by the pipeline
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The pipeline and its metadata disagree (corrupt or mismatched artifact)
    #[error("model artifact inconsistent: {0}")]
    ModelInconsistency(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact (de)serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Training error
    #[error("training error: {0}")]
    Train(String),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
