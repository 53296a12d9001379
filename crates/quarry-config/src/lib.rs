//! Typed configuration for quarry.
//!
//! The decoders themselves are pure functions and take no configuration.
//! What is configurable is the machinery around them:
//!
//! - [`NestedConfig`] - limits of the bracket-notation parser used by the
//!   `object` decoder (depth, strictness, parameter count)
//! - [`LoggingConfig`] - how decoder rejection events are rendered
//!
//! Configuration is layered: defaults → file (TOML or JSON) → environment.
//!
//! # Example
//!
//! ```no_run
//! use quarry_config::ConfigLoader;
//!
//! # fn main() -> Result<(), quarry_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_file("quarry.toml")?
//!     .with_env_prefix("QUARRY")
//!     .load()?;
//!
//! println!("nested objects may nest {} levels", config.nested.max_depth);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [nested]
//! max_depth = 5
//! strict = false
//! parameter_limit = 1000
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Values can be overridden with `PREFIX__SECTION__KEY` variables:
//!
//! - `QUARRY__NESTED__MAX_DEPTH=3`
//! - `QUARRY__LOGGING__LEVEL=quarry_core=trace`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuarryConfig::default();
        assert_eq!(config.nested.max_depth, 5);
        assert_eq!(config.nested.parameter_limit, 1000);
    }

    #[test]
    fn test_config_builder() {
        let config = QuarryConfig::builder()
            .nested(NestedConfig {
                max_depth: 2,
                ..Default::default()
            })
            .build();

        assert_eq!(config.nested.max_depth, 2);
    }
}
