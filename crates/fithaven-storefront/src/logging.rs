//! Tracing subscriber setup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Result, StorefrontError};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Build the event filter: `RUST_LOG` wins, then `level_override`, then the
/// configured level.
pub fn env_filter(config: &LoggingConfig, level_override: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_override.unwrap_or(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig, level_override: Option<&str>) -> Result<()> {
    let filter = env_filter(config, level_override);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| StorefrontError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        let config: LoggingConfig = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(LoggingConfig::default().format, LogFormat::Compact);
    }
}
