//! Root configuration type.
//!
//! This module provides [`QuarryConfig`] and its builder.

use serde::{Deserialize, Serialize};

use crate::{LogFormat, LoggingConfig, NestedConfig};

/// Complete quarry configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use quarry_config::QuarryConfig;
///
/// let config = QuarryConfig::default();
/// assert_eq!(config.nested.max_depth, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct QuarryConfig {
    /// Nested-object parser limits.
    #[serde(default)]
    pub nested: NestedConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuarryConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> QuarryConfigBuilder {
        QuarryConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - `nested.max_depth` is zero
    /// - `nested.parameter_limit` is zero
    /// - `logging.level` is not a valid filter directive
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if self.nested.max_depth == 0 {
            return Err(crate::ConfigError::invalid_value(
                "nested.max_depth",
                "must be at least 1",
            ));
        }

        if self.nested.parameter_limit == 0 {
            return Err(crate::ConfigError::invalid_value(
                "nested.parameter_limit",
                "must be at least 1",
            ));
        }

        if self.logging.enabled {
            quarry_telemetry::create_env_filter(&self.logging.level).map_err(|e| {
                crate::ConfigError::invalid_value("logging.level", e.to_string())
            })?;
        }

        Ok(())
    }

    /// Development preset: pretty logs with decoder rejections visible.
    ///
    /// # Example
    ///
    /// ```
    /// use quarry_config::QuarryConfig;
    ///
    /// let config = QuarryConfig::development();
    /// assert!(config.logging.level.contains("quarry_core=trace"));
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "info,quarry_core=trace,quarry_schema=trace".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.include_location = true;

        config
    }

    /// Production preset: JSON logs and a strict nested parser.
    ///
    /// # Example
    ///
    /// ```
    /// use quarry_config::QuarryConfig;
    ///
    /// let config = QuarryConfig::production();
    /// assert_eq!(config.logging.format, quarry_config::LogFormat::Json);
    /// assert!(config.nested.strict);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.nested.strict = true;

        config
    }
}

/// Builder for [`QuarryConfig`].
#[derive(Debug, Default)]
pub struct QuarryConfigBuilder {
    nested: Option<NestedConfig>,
    logging: Option<LoggingConfig>,
}

impl QuarryConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nested parser configuration.
    #[must_use]
    pub fn nested(mut self, nested: NestedConfig) -> Self {
        self.nested = Some(nested);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Build the configuration. Unset sections use their defaults.
    #[must_use]
    pub fn build(self) -> QuarryConfig {
        QuarryConfig {
            nested: self.nested.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<QuarryConfig, crate::ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(QuarryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_nested() {
        let config = QuarryConfig::builder()
            .nested(NestedConfig {
                max_depth: 1,
                ..Default::default()
            })
            .build();

        assert_eq!(config.nested.max_depth, 1);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = QuarryConfig::builder()
            .nested(NestedConfig {
                max_depth: 0,
                ..Default::default()
            })
            .build_validated();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("nested.max_depth"));
    }

    #[test]
    fn test_zero_parameter_limit_rejected() {
        let config = QuarryConfig::builder()
            .nested(NestedConfig {
                parameter_limit: 0,
                ..Default::default()
            })
            .build();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = QuarryConfig::builder()
            .logging(LoggingConfig {
                level: "quarry_core=loud".to_string(),
                ..Default::default()
            })
            .build();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_invalid_log_level_ignored_when_disabled() {
        let config = QuarryConfig::builder()
            .logging(LoggingConfig {
                enabled: false,
                level: "quarry_core=loud".to_string(),
                ..Default::default()
            })
            .build();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(QuarryConfig::development().validate().is_ok());
        assert!(QuarryConfig::production().validate().is_ok());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = QuarryConfig::development();
        let text = toml::to_string(&config).unwrap();
        let parsed: QuarryConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
