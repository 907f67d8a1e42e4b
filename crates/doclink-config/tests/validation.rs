use doclink_config::{
    ConfigError, ConfigValidator, DoclinkConfig, FsValidator, SchemaValidator, validate_fs,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    SchemaValidator.validate(&DoclinkConfig::default()).unwrap();
}

#[test]
fn relative_href_base_is_rejected() {
    let config = DoclinkConfig {
        builtin_href_base: "builtin".to_string(),
        ..Default::default()
    };
    let err = SchemaValidator.validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::SchemaValidation { .. }));
    assert!(err.hint().is_some());
}

#[test]
fn external_links_must_be_http_urls() {
    let mut config = DoclinkConfig::default();
    config
        .external_links
        .insert("Response".to_string(), "ftp://example.com".to_string());

    let err = SchemaValidator.validate(&config).unwrap_err();
    assert!(err.to_string().contains("Response"));
}

#[test]
fn builtins_must_exist_relative_to_root() {
    let dir = TempDir::new().unwrap();
    let config = DoclinkConfig {
        builtins: Some(PathBuf::from("lib.json")),
        ..Default::default()
    };

    let err = FsValidator::new(dir.path()).validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::BuiltinsNotFound { ref path } if path.ends_with("lib.json")));

    fs::write(dir.path().join("lib.json"), "[]").unwrap();
    validate_fs(&config, dir.path()).unwrap();
}
