//! Serve command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ServeArgs};
use crate::inference::ModelService;
use crate::server::{serve, ServerConfig};
use std::net::SocketAddr;

pub fn run_serve(args: ServeArgs, level: LogLevel) -> Result<(), String> {
    let address: SocketAddr = args
        .address
        .parse()
        .map_err(|e| format!("Invalid bind address '{}': {e}", args.address))?;
    let config = ServerConfig::default().with_address(address);

    // Deferred-failure load: the service starts even without a usable
    // artifact and reports the reason on every predict/model-info call.
    let service = ModelService::load(&args.model);
    match service.load_error() {
        None => log(
            level,
            LogLevel::Normal,
            &format!("Loaded model from {}", args.model.display()),
        ),
        Some(reason) => log(
            level,
            LogLevel::Normal,
            &format!(
                "Model not loaded ({reason}); predict and model-info will fail until an artifact is provided and the service is restarted"
            ),
        ),
    }

    log(
        level,
        LogLevel::Normal,
        &format!("Listening on http://{address}"),
    );

    let runtime = tokio::runtime::Runtime::new().map_err(|e| format!("Runtime error: {e}"))?;
    runtime
        .block_on(serve(config, service))
        .map_err(|e| format!("Server error: {e}"))
}
