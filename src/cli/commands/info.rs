//! Info command implementation

use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel};
use crate::io::load_artifact;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let artifact = load_artifact(&args.model)
        .map_err(|e| format!("Cannot read {}: {e}", args.model.display()))?;
    let meta = &artifact.metadata;

    log(level, LogLevel::Normal, &format!("Model: {}", meta.model_type));
    log(
        level,
        LogLevel::Normal,
        &format!("Problem type: {}", meta.problem_type),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("Trained at: {}", meta.trained_at),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("Features: {}", meta.features.join(", ")),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("Classes: {}", meta.classes.join(", ")),
    );
    for (name, value) in &meta.metrics {
        log(level, LogLevel::Normal, &format!("  {name}: {value:.4}"));
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Probability output: {}",
            artifact.pipeline.classifier.supports_probabilities()
        ),
    );
    Ok(())
}
