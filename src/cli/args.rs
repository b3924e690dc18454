//! CLI argument parsing
//!
//! ```bash
//! predecir train
//! predecir train --output models/iris.json --centroid
//! predecir serve --address 0.0.0.0:8000 --model models/iris.json
//! predecir info models/iris.json
//! ```

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Predecir: iris classifier training and serving
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "predecir")]
#[command(version)]
#[command(about = "Train an iris classification pipeline and serve it over HTTP")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Fit the pipeline on the bundled iris dataset and save the artifact
    Train(TrainArgs),

    /// Serve the artifact over HTTP
    Serve(ServeArgs),

    /// Display the metadata of a saved artifact
    Info(InfoArgs),
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Artifact output path
    #[arg(short, long, default_value = crate::io::DEFAULT_MODEL_PATH)]
    pub output: PathBuf,

    /// Fit a label-only nearest-centroid classifier instead of logistic
    /// regression
    #[arg(long)]
    pub centroid: bool,

    /// Random seed for the stratified split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for the serve command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    pub address: String,

    /// Artifact path to load at startup
    #[arg(short, long, default_value = crate::io::DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Artifact path
    #[arg(value_name = "MODEL", default_value = crate::io::DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
}

/// Parse arguments from an explicit iterator (used by tests)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
