//! Process-level setup from a [`QuarryConfig`].

use quarry_config::{ConfigError, QuarryConfig};
use quarry_schema::QsParser;
use quarry_telemetry::TelemetryError;
use thiserror::Error;

/// Errors raised while applying a configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// Validates `config`, installs the global log subscriber and returns the
/// nested parser configured by its `[nested]` section.
///
/// Logging is skipped when `logging.enabled` is false.
///
/// # Errors
///
/// Returns [`SetupError::Config`] for an invalid configuration and
/// [`SetupError::Telemetry`] if a subscriber is already installed.
///
/// # Example
///
/// ```rust
/// use quarry::config::{LoggingConfig, QuarryConfig};
///
/// let config = QuarryConfig::builder()
///     .logging(LoggingConfig { enabled: false, ..Default::default() })
///     .build();
///
/// let parser = quarry::init(&config).unwrap();
/// let params = quarry::QueryParams::parse("f=a%3D1").unwrap();
/// assert!(quarry::object_with(&params, "f", &parser, &quarry::schema::AnyObject).is_some());
/// ```
pub fn init(config: &QuarryConfig) -> Result<QsParser, SetupError> {
    config.validate()?;
    quarry_telemetry::init_logging(&config.logging.to_log_config())?;

    quarry_telemetry::tracing::debug!(
        max_depth = config.nested.max_depth,
        strict = config.nested.strict,
        parameter_limit = config.nested.parameter_limit,
        "quarry initialized"
    );

    Ok(QsParser::from_config(&config.nested))
}
