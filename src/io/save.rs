//! Artifact saving

use crate::model::ModelArtifact;
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save an artifact as pretty-printed JSON
///
/// # Example
///
/// ```no_run
/// use predecir::io::save_artifact;
/// # let artifact: predecir::model::ModelArtifact = unimplemented!();
///
/// save_artifact(&artifact, "model.json").unwrap();
/// ```
pub fn save_artifact(artifact: &ModelArtifact, path: impl AsRef<Path>) -> Result<()> {
    let data = serde_json::to_string_pretty(artifact)
        .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;

    let mut file = File::create(path.as_ref())?;
    file.write_all(data.as_bytes())?;

    Ok(())
}
