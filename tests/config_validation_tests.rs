//! Config Validation Tests
//!
//! Loading service config files from disk: typo warnings, defaults for
//! missing sections and rejection of unusable values.

use std::io::Write;

use h2oil_wellprofile::config::validation::{known_config_keys, suggest_correction, validate_unknown_keys};
use h2oil_wellprofile::config::{ConfigError, ServiceConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn full_config_loads_from_file() {
    let file = write_config(
        r#"
[service]
name = "Well Profile API (staging)"

[server]
addr = "127.0.0.1:8100"
max_body_bytes = 524288

[cors]
allowed_origins = ["https://wells.example.com"]
"#,
    );

    let config = ServiceConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.service.name, "Well Profile API (staging)");
    assert_eq!(config.server.addr, "127.0.0.1:8100");
    assert_eq!(config.server.max_body_bytes, 524_288);
    assert_eq!(config.cors.allowed_origins, vec!["https://wells.example.com"]);
}

#[test]
fn empty_file_gives_defaults() {
    let file = write_config("");
    let config = ServiceConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn typo_still_loads_with_warning() {
    let toml_str = "[cors]\nallowed_origin = [\"http://localhost:3000\"]\n";

    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("cors.allowed_origins")
    );

    // Unknown keys never block loading; the real field keeps its default
    let file = write_config(toml_str);
    let config = ServiceConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.cors.allowed_origins.len(), 3);
}

#[test]
fn invalid_address_is_rejected() {
    let file = write_config("[server]\naddr = \"not-an-address\"\n");
    match ServiceConfig::load_from_file(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("server.addr"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn zero_body_limit_is_rejected() {
    let file = write_config("[server]\nmax_body_bytes = 0\n");
    assert!(matches!(
        ServiceConfig::load_from_file(file.path()),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn wrong_type_is_parse_error() {
    let file = write_config("[server]\nmax_body_bytes = \"lots\"\n");
    assert!(matches!(
        ServiceConfig::load_from_file(file.path()),
        Err(ConfigError::Parse(_, _))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ServiceConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_, _)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn suggestion_requires_close_match() {
    let known = known_config_keys();
    assert_eq!(
        suggest_correction("server.max_body_byte", &known).as_deref(),
        Some("server.max_body_bytes")
    );
    assert!(suggest_correction("renderer.backend", &known).is_none());
}
