//! Court booking API server entry point
//!
//! Configuration comes from environment variables; a `.env` file is
//! honored in development. Run with `cargo run -p court-api`.

use court_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Config is loaded before tracing so the environment can pick the
    // log format; config loading itself does not log.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = TracingConfig::for_environment(config.app.env);
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    if let Err(e) = court_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
