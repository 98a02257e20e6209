pub mod config;

pub use config::{Config, GuessConfig, TasksConfig, WeatherConfig};

use anyhow::Result;

/// Initialize tracing for any of the kata binaries.
///
/// Diagnostics go to stderr through `tracing`; program output stays on stdout.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::debug!("kata core initialized");
    Ok(())
}
