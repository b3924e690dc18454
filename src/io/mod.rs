//! Artifact I/O
//!
//! The artifact is written and read as a single JSON document at a
//! well-known path. Compatibility contract: the service deserializes
//! exactly what the trainer produced; nothing else is guaranteed.

mod load;
mod save;

pub use load::load_artifact;
pub use save::save_artifact;

/// Default artifact path shared by the trainer and the service
pub const DEFAULT_MODEL_PATH: &str = "model.json";
