//! Structured logging setup.
//!
//! `RUST_LOG` always wins over the configured level, so
//! `RUST_LOG=trace_core_postgres=debug` works without touching the config file.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingSettings;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// JSON lines (true) or human-readable text (false)
    pub json_format: bool,
    /// Level used when RUST_LOG is not set
    pub default_level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            default_level: Level::INFO,
        }
    }
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            json_format: settings.json,
            default_level: parse_log_level(&settings.level),
        }
    }
}

/// Parse a level name, falling back to `INFO` for anything unrecognised.
pub fn parse_log_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(config: LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_level.to_string()));

    if config.json_format {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        );
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true));
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Level::DEBUG);
        assert_eq!(parse_log_level("WARN"), Level::WARN);
        assert_eq!(parse_log_level(" error "), Level::ERROR);
        assert_eq!(parse_log_level("chatty"), Level::INFO);
    }

    #[test]
    fn test_from_settings() {
        let settings = LoggingSettings {
            level: "trace".to_string(),
            json: true,
        };
        let config = LoggingConfig::from(&settings);
        assert!(config.json_format);
        assert_eq!(config.default_level, Level::TRACE);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
