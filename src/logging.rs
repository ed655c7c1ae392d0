//! Tracing subscriber setup.
//!
//! Logs always go to stderr: stdout is reserved for the progress report.

use crate::config::LoggingConfig;
use crate::error::{PrismError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG` when set, otherwise from the configured level.
/// `verbose` forces `debug` regardless of either.
pub fn build_filter(config: &LoggingConfig, verbose: bool) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            PrismError::Configuration(format!("invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber. Calling this twice is harmless.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = build_filter(config, verbose)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        other => {
            return Err(PrismError::Configuration(format!(
                "unknown log format '{}' (expected pretty, json or compact)",
                other
            )));
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        let config = LoggingConfig {
            level: "error".to_string(),
            format: "compact".to_string(),
        };

        let filter = build_filter(&config, true).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "xml".to_string(),
        };

        let err = init_logging(&config, false).unwrap_err();
        assert!(matches!(err, PrismError::Configuration(_)));
    }
}
