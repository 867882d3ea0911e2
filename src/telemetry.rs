//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::AppError;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| AppError::Telemetry(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
    };

    result.map_err(|e| AppError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_reported() {
        let config = LoggingConfig {
            format: LogFormat::Pretty,
            filter: "comic_reader_ui=notalevel".to_string(),
        };
        // Only reached when RUST_LOG is unset in the test environment.
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(
                init_tracing(&config),
                Err(AppError::Telemetry(_))
            ));
        }
    }
}
