// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{NEXT_PUBLIC_PREFIX, NextConfig, with_public_env_from};
use crate::core::env::container::EnvSource;
use crate::error::{AdapterError, EnvMeshError};
use crate::mesh::MeshOptions;
use serde_json::json;

fn host_config(value: serde_json::Value) -> NextConfig {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_preserves_existing_fields() {
    let wrapper = with_public_env_from(MeshOptions::default(), EnvSource::new());
    let input = host_config(json!({
        "reactStrictMode": true,
        "images": { "domains": ["example.com"] },
    }));

    let config = wrapper(Some(&input));

    assert_eq!(config.get("reactStrictMode"), Some(&json!(true)));
    assert_eq!(config.get("images"), Some(&json!({ "domains": ["example.com"] })));
    assert_eq!(config.rest, input.rest);
}

#[test]
fn test_adds_next_public_vars_to_env() {
    let source = EnvSource::from([("PUBLIC_API_URL", "https://api.example.com")]);
    let wrapper = with_public_env_from(MeshOptions::default(), source);

    let config = wrapper(Some(&NextConfig::default()));
    let env = config.env.unwrap();

    assert_eq!(env.len(), 1);
    assert_eq!(
        env.get("NEXT_PUBLIC_API_URL").map(String::as_str),
        Some("https://api.example.com")
    );
}

#[test]
fn test_meshes_other_prefixes_into_next_public() {
    let source = EnvSource::from([("VITE_FEATURE", "enabled"), ("PUBLIC_DEBUG", "true")]);
    let wrapper = with_public_env_from(MeshOptions::default(), source);

    let config = wrapper(None);

    insta::assert_snapshot!(serde_json::to_string_pretty(&config).unwrap(), @r#"
    {
      "env": {
        "NEXT_PUBLIC_DEBUG": "true",
        "NEXT_PUBLIC_FEATURE": "enabled"
      }
    }
    "#);
}

#[test]
fn test_only_next_public_keys_are_added() {
    let source = EnvSource::from([("PUBLIC_API_URL", "https://api.example.com"), ("SECRET", "x")]);
    let wrapper = with_public_env_from(MeshOptions::default(), source);

    let env = wrapper(None).env.unwrap();

    assert!(env.keys().all(|k| k.starts_with(NEXT_PUBLIC_PREFIX)));
}

#[test]
fn test_merges_with_existing_env_meshed_wins() {
    let source = EnvSource::from([("PUBLIC_API_URL", "https://meshed.example.com")]);
    let wrapper = with_public_env_from(MeshOptions::default(), source);
    let input = host_config(json!({
        "env": {
            "EXISTING_VAR": "existing",
            "NEXT_PUBLIC_API_URL": "https://stale.example.com",
        }
    }));

    let config = wrapper(Some(&input));

    insta::assert_snapshot!(serde_json::to_string_pretty(&config.env).unwrap(), @r#"
    {
      "EXISTING_VAR": "existing",
      "NEXT_PUBLIC_API_URL": "https://meshed.example.com"
    }
    "#);
}

#[test]
fn test_does_not_mutate_input() {
    let source = EnvSource::from([("PUBLIC_X", "1")]);
    let wrapper = with_public_env_from(MeshOptions::default(), source);
    let input = host_config(json!({ "env": { "A": "b" }, "basePath": "/docs" }));
    let snapshot = input.clone();

    let _ = wrapper(Some(&input));

    assert_eq!(input, snapshot);
}

#[test]
fn test_empty_env_yields_empty_env_block() {
    let wrapper = with_public_env_from(MeshOptions::default(), EnvSource::new());
    let config = wrapper(Some(&NextConfig::default()));

    assert_eq!(config.env, Some(Default::default()));
}

#[test]
fn test_respects_custom_prefixes() {
    let source = EnvSource::from([("CUSTOM_VAR", "custom-value"), ("PUBLIC_VAR", "ignored")]);
    let options = MeshOptions::builder()
        .with_prefixes(["CUSTOM_", "NEXT_PUBLIC_"])
        .build();
    let wrapper = with_public_env_from(options, source);

    let env = wrapper(None).env.unwrap();

    assert_eq!(env.get("NEXT_PUBLIC_VAR").map(String::as_str), Some("custom-value"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_from_json_str_roundtrips_unknown_fields() {
    let config = NextConfig::from_json_str(r#"{"output":"export","env":{"A":"1"}}"#).unwrap();

    assert_eq!(config.get("output"), Some(&json!("export")));
    assert_eq!(config.env.as_ref().and_then(|e| e.get("A")).map(String::as_str), Some("1"));
}

#[test]
fn test_from_json_str_rejects_non_object() {
    let err = NextConfig::from_json_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(
        err,
        EnvMeshError::Adapter(ref inner)
            if matches!(**inner, AdapterError::InvalidHostConfig { .. })
    ));
}

#[test]
fn test_from_json_str_rejects_non_string_env() {
    let result = NextConfig::from_json_str(r#"{"env":{"PORT":3000}}"#);
    assert!(result.is_err());
}

#[test]
fn test_from_reader() {
    let config =
        NextConfig::from_reader(r#"{"trailingSlash":true}"#.as_bytes(), "<memory>").unwrap();
    assert_eq!(config.get("trailingSlash"), Some(&json!(true)));
    assert!(config.env.is_none());
}
