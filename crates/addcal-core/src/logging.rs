//! Log subscriber setup.
//!
//! Logs always go to stderr; stdout is reserved for generated links and
//! markup. `RUST_LOG` is honoured unless an explicit filter is given.
//!
//! ```ignore
//! use addcal_core::logging::{LogFormat, LoggingConfig, init_logging};
//!
//! init_logging(&LoggingConfig::for_cli(false, LogFormat::Compact))?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("failed to parse log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

/// Line format of emitted logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line text without timestamps.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Subscriber settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for addcal targets when no filter is given.
    pub level: Level,
    pub format: LogFormat,
    /// Filter directive; wins over both `level` and `RUST_LOG`.
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// Settings for the command-line tool.
    ///
    /// `debug` forces debug output for addcal targets, ignoring `RUST_LOG`.
    /// Targets match by prefix, so `addcal` also covers `addcal_core`.
    #[must_use]
    pub fn for_cli(debug: bool, format: LogFormat) -> Self {
        Self {
            level: if debug { Level::DEBUG } else { Level::WARN },
            format,
            filter: debug.then(|| "addcal=debug".to_string()),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Some(ref directive) = self.filter {
            return Ok(EnvFilter::try_new(directive)?);
        }
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("addcal={}", self.level))))
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the filter directive is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(layer.compact().without_time());
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(layer.json());
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_quiet_compact_output() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.filter.is_none());
    }

    #[test]
    fn cli_debug_overrides_environment() {
        let config = LoggingConfig::for_cli(true, LogFormat::Json);
        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter.as_deref(), Some("addcal=debug"));
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn cli_without_debug_defers_to_environment() {
        let config = LoggingConfig::for_cli(false, LogFormat::Compact);
        assert_eq!(config.level, Level::WARN);
        assert!(config.filter.is_none());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = LoggingConfig {
            filter: Some("addcal=[".into()),
            ..Default::default()
        };
        assert!(matches!(init_logging(&config), Err(LoggingError::Filter(_))));
    }
}
