//! Configuration section types.

use quarry_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

/// Limits of the nested-object (bracket notation) parser.
///
/// # Example
///
/// ```
/// use quarry_config::NestedConfig;
///
/// let config = NestedConfig {
///     max_depth: 3,
///     strict: true,
///     parameter_limit: 100,
/// };
/// assert_eq!(config.max_depth, 3);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NestedConfig {
    /// Maximum bracket nesting depth (`a[b][c]` has depth 2).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Reject keys nested deeper than `max_depth` instead of keeping the
    /// remainder as one literal key.
    #[serde(default)]
    pub strict: bool,

    /// Number of `&`-separated pairs read from one nested value; later pairs
    /// are ignored.
    #[serde(default = "default_parameter_limit")]
    pub parameter_limit: usize,
}

impl Default for NestedConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            strict: false,
            parameter_limit: default_parameter_limit(),
        }
    }
}

fn default_max_depth() -> usize {
    5
}

fn default_parameter_limit() -> usize {
    1000
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs.
    #[default]
    Json,
    /// Human-readable pretty format.
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directive (trace, debug, info, or `target=level` lists).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Converts this section into the subscriber settings of `quarry-telemetry`.
    ///
    /// # Example
    ///
    /// ```
    /// use quarry_config::{LogFormat, LoggingConfig};
    ///
    /// let section = LoggingConfig {
    ///     format: LogFormat::Pretty,
    ///     ..Default::default()
    /// };
    /// assert!(!section.to_log_config().json_format);
    /// ```
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            json_format: self.format == LogFormat::Json,
            file_line_info: self.include_location,
            ..LogConfig::default()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_config_default() {
        let config = NestedConfig::default();
        assert_eq!(config.max_depth, 5);
        assert!(!config.strict);
        assert_eq!(config.parameter_limit, 1000);
    }

    #[test]
    fn test_nested_config_deserialize() {
        let toml = r"
            max_depth = 2
            strict = true
        ";
        let config: NestedConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.max_depth, 2);
        assert!(config.strict);
        // Defaults applied
        assert_eq!(config.parameter_limit, 1000);
    }

    #[test]
    fn test_nested_config_unknown_field_rejected() {
        let toml = r"
            max_depth = 2
            array_limit = 20
        ";
        let result: Result<NestedConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_deserialize() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);

        let format: LogFormat = serde_json::from_str(r#""pretty""#).unwrap();
        assert_eq!(format, LogFormat::Pretty);

        assert!(serde_json::from_str::<LogFormat>(r#""xml""#).is_err());
    }

    #[test]
    fn test_to_log_config() {
        let section = LoggingConfig {
            enabled: true,
            level: "quarry_core=trace".to_string(),
            format: LogFormat::Pretty,
            include_location: true,
        };

        let log = section.to_log_config();
        assert_eq!(log.level, "quarry_core=trace");
        assert!(!log.json_format);
        assert!(log.file_line_info);
    }
}
