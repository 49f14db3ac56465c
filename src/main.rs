use std::process::ExitCode;

use bibliorelay::config::{self, RelayConfig};
use bibliorelay::infrastructure::logging;
use bibliorelay::server;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env first so RUST_LOG from it reaches the filter
    let dotenv_result = config::load_dotenv();

    // Initialize tracing
    logging::init_tracing();

    if let Err(e) = dotenv_result {
        tracing::warn!("Failed to load .env file: {}", e);
    }

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Loaded configuration: {:?}", config);

    // Start server
    if let Err(e) = server::run(config).await {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
