use std::io::Write;
use std::path::PathBuf;

use hubql_core::RegistryConfig;

use super::config_loader::{ConfigError, RegistryArgs, load_config, load_registry};

fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_without_file_or_flags() {
    let config = load_config(&RegistryArgs::default()).unwrap();
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn file_then_flags() {
    let file = config_file(r#"{ "pageLimit": 60, "nestedPageLimit": 15 }"#);

    let from_file = load_config(&RegistryArgs {
        config: Some(file.path().to_path_buf()),
        ..RegistryArgs::default()
    })
    .unwrap();
    assert_eq!(from_file, RegistryConfig::new().page_limit(60).nested_page_limit(15));

    let overridden = load_config(&RegistryArgs {
        config: Some(file.path().to_path_buf()),
        page_limit: Some(30),
        nested_page_limit: None,
    })
    .unwrap();
    assert_eq!(overridden, RegistryConfig::new().page_limit(30).nested_page_limit(15));
}

#[test]
fn registry_uses_loaded_limits() {
    let registry = load_registry(&RegistryArgs {
        page_limit: Some(5),
        ..RegistryArgs::default()
    })
    .unwrap();

    assert_eq!(registry.page_limit(), 5);
    assert_eq!(registry.nested_page_limit(), 25);
}

#[test]
fn missing_file() {
    let err = load_config(&RegistryArgs {
        config: Some(PathBuf::from("/nonexistent/hubql.json")),
        ..RegistryArgs::default()
    })
    .unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/hubql.json'"));
}

#[test]
fn malformed_file() {
    let file = config_file("{ pageLimit: 60 }");
    let err = load_config(&RegistryArgs {
        config: Some(file.path().to_path_buf()),
        ..RegistryArgs::default()
    })
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_limit_from_file() {
    let file = config_file(r#"{ "nestedPageLimit": 0 }"#);
    let err = load_config(&RegistryArgs {
        config: Some(file.path().to_path_buf()),
        ..RegistryArgs::default()
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "nestedPageLimit must be at least 1");
}
