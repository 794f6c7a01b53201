//! Tracing setup for the console.

use crate::config::{ConfigError, ConsoleConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter used until the config file has been read.
pub const BOOTSTRAP_FILTER: &str = "warn";

/// `RUST_LOG` if set, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Loads the config with a provisional subscriber in place, so config
/// loading is traced even though the final filter comes from the config.
pub fn load_config<W>(
    path: Option<&Path>,
    filter: EnvFilter,
    writer: W,
) -> Result<ConsoleConfig, ConfigError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let provisional = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(provisional, || ConsoleConfig::load(path))
}

/// Installs the global subscriber, writing to stderr.
pub fn init(config: &ConsoleConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();
}
