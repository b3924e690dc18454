//! Train command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, TrainArgs};
use crate::train::{train, ClassifierChoice, TrainOptions};

pub fn run_train(args: TrainArgs, level: LogLevel) -> Result<(), String> {
    let options = TrainOptions {
        output: args.output,
        classifier: if args.centroid {
            ClassifierChoice::NearestCentroid
        } else {
            ClassifierChoice::Logistic
        },
        seed: args.seed,
    };

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Fitting {:?} classifier (seed {})",
            options.classifier, options.seed
        ),
    );

    let report = train(&options).map_err(|e| format!("Training error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Test accuracy: {:.4}", report.accuracy),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("Saved {}", report.path.display()),
    );
    Ok(())
}
