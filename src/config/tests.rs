// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::mesh::PrefixList;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.mesh.prefixes, PrefixList::default());
    assert!(!config.mesh.debug);
}

#[test]
fn test_format_options() {
    let config = Config::default();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level   = 5
    global.json_log         = false
    global.log_file         = <unset>
    global.output_log_level = 2
    mesh.debug              = false
    mesh.prefixes           = [PUBLIC_, VITE_, NEXT_PUBLIC_, NX_, REACT_APP_]
    ");
}

#[test]
fn test_parse_mesh_section() {
    let config = Config::parse(
        r#"
[mesh]
prefixes = ["PUBLIC_", "ASTRO_"]
debug = true
"#,
    )
    .expect("valid config");

    assert_eq!(config.mesh.prefixes, PrefixList::from(["PUBLIC_", "ASTRO_"]));
    assert!(config.mesh.debug);
}

#[test]
fn test_parse_rejects_unknown_fields() {
    let result = Config::parse("[mesh]\nprefix = [\"PUBLIC_\"]");
    assert!(result.is_err(), "typo'd key should be rejected");
}

#[test]
fn test_parse_rejects_invalid_log_level() {
    let result = Config::parse("[global]\noutput_log_level = 9");
    assert!(result.is_err());
}

#[test]
fn test_config_loader_missing_required_file() {
    let err = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/envmesh.toml")
        .build()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_config_loader_optional_file_missing_is_ok() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/envmesh.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    let err = ConfigLoader::new().add_toml_file(file.path()).build().unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: Variable name is unique to this test.
    unsafe {
        std::env::set_var("ENVMESHUNIT_MESH__DEBUG", "true");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[mesh]\ndebug = false")
        .with_env_prefix("ENVMESHUNIT")
        .build()
        .expect("build should succeed");

    assert!(config.mesh.debug, "env var should override TOML value");

    // SAFETY: Same as above
    unsafe {
        std::env::remove_var("ENVMESHUNIT_MESH__DEBUG");
    }
}

#[test]
fn test_config_loader_env_prefix_list() {
    // SAFETY: Variable name is unique to this test.
    unsafe {
        std::env::set_var("ENVMESHLIST_MESH__PREFIXES", "NX_,PUBLIC_");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[mesh]\nprefixes = [\"VITE_\"]")
        .with_env_prefix("ENVMESHLIST")
        .build();

    // SAFETY: Same as above
    unsafe {
        std::env::remove_var("ENVMESHLIST_MESH__PREFIXES");
    }

    let config = config.expect("build should succeed");
    assert_eq!(config.mesh.prefixes, PrefixList::from(["NX_", "PUBLIC_"]));
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[mesh]\ndebug = false")
        .set("mesh.debug", true)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert!(config.mesh.debug, "set override should take effect");
}

#[test]
fn test_config_loader_set_str() {
    let config = ConfigLoader::new()
        .set_str("global.output_log_level=4")
        .expect("valid assignment")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_config_loader_set_str_rejects_malformed() {
    assert!(ConfigLoader::new().set_str("mesh.debug").is_err());
    assert!(ConfigLoader::new().set_str("debug=true").is_err());
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[global]
output_log_level = 3

[mesh]
prefixes = ["PUBLIC_", "VITE_"]
"#
    )
    .expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[mesh]\ndebug = true")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.mesh.prefixes, PrefixList::from(["PUBLIC_", "VITE_"]));
    assert!(config.mesh.debug);
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new().add_toml_str("[mesh]\ndebug = true");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

#[test]
fn test_config_loader_set_str_prefix_list() {
    let config = ConfigLoader::new()
        .set_str("mesh.prefixes=PUBLIC_, VITE_")
        .expect("valid assignment")
        .build()
        .expect("build should succeed");

    assert_eq!(config.mesh.prefixes, PrefixList::from(["PUBLIC_", "VITE_"]));
}
