//! Loading configuration files from disk.

use quarry_config::{ConfigError, ConfigLoader, LogFormat};
use std::io::Write;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
            [nested]
            max_depth = 4
            strict = true

            [logging]
            level = "warn"
            format = "pretty"
        "#,
    );

    let config = ConfigLoader::new()
        .with_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    assert_eq!(config.nested.max_depth, 4);
    assert!(config.nested.strict);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn loads_json_file() {
    let file = write_temp(".json", r#"{"nested": {"parameter_limit": 25}}"#);

    let config = ConfigLoader::new()
        .with_optional_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    assert_eq!(config.nested.parameter_limit, 25);
    assert_eq!(config.nested.max_depth, 5);
}

#[test]
fn rejects_unknown_extension() {
    let file = write_temp(".yaml", "nested: {}");

    let result = ConfigLoader::new().with_file(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn rejects_invalid_values_on_load() {
    let file = write_temp(".toml", "[nested]\nparameter_limit = 0\n");

    let result = ConfigLoader::new().with_file(file.path()).unwrap().load();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn file_section_bridges_to_telemetry() {
    let file = write_temp(".toml", "[logging]\nformat = \"pretty\"\ninclude_location = true\n");

    let config = ConfigLoader::new()
        .with_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    let log = config.logging.to_log_config();
    assert!(!log.json_format);
    assert!(log.file_line_info);
}
