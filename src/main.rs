//! Predecir CLI
//!
//! Entry point for training and serving the iris classifier.
//!
//! # Usage
//!
//! ```bash
//! # Fit the pipeline and save model.json
//! predecir train
//!
//! # Serve the artifact over HTTP
//! predecir serve --address 127.0.0.1:8000
//!
//! # Inspect a saved artifact
//! predecir info model.json
//! ```

use clap::Parser;
use predecir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
