//! Artifact loading

use crate::model::ModelArtifact;
use crate::{Error, Result};
use std::path::Path;

/// Load an artifact from a JSON file and check its internal shape
///
/// The shape checks catch mismatched pipeline/metadata pairings at load
/// time, before any prediction consults them.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact> {
    let content = std::fs::read_to_string(path.as_ref())?;

    let artifact: ModelArtifact = serde_json::from_str(&content)
        .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?;

    validate(&artifact)?;
    Ok(artifact)
}

fn validate(artifact: &ModelArtifact) -> Result<()> {
    let meta = &artifact.metadata;
    if meta.features.is_empty() {
        return Err(Error::Serialization(
            "artifact metadata declares no features".to_string(),
        ));
    }
    if meta.classes.is_empty() {
        return Err(Error::Serialization(
            "artifact metadata declares no classes".to_string(),
        ));
    }
    let n_scaler = artifact.pipeline.scaler.n_features();
    if n_scaler != meta.features.len() {
        return Err(Error::Serialization(format!(
            "scaler was fit on {n_scaler} features but metadata declares {}",
            meta.features.len()
        )));
    }
    Ok(())
}
