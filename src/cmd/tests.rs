// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::mesh::{OutputFormat, PrefixArgs};
use crate::cmd::mesh::mesh_options;
use crate::cmd::output::{render_json, render_mesh};
use crate::config::Config;
use crate::core::env::container::EnvSource;
use crate::mesh::{PrefixList, mesh};

fn sample() -> crate::mesh::MeshedEnv {
    let source = EnvSource::from([
        ("PUBLIC_API_URL", "https://api.example.com"),
        ("PUBLIC_GREETING", "hello world"),
    ]);
    mesh(&source, &PrefixList::from(["PUBLIC_", "VITE_"]))
}

#[test]
fn test_render_mesh_env_format() {
    let text = render_mesh(&sample(), OutputFormat::Env).unwrap();
    insta::assert_snapshot!(text, @r#"
    PUBLIC_API_URL=https://api.example.com
    PUBLIC_GREETING='hello world'
    VITE_API_URL=https://api.example.com
    VITE_GREETING='hello world'
    "#);
}

#[test]
fn test_render_mesh_env_format_does_not_expand_variables() {
    let source = EnvSource::from([
        ("PUBLIC_HOME", "$HOME/app"),
        ("PUBLIC_QUOTE", "it's $USER"),
        ("PUBLIC_LINES", "a\nb"),
    ]);
    let meshed = mesh(&source, &PrefixList::from(["PUBLIC_"]));

    let text = render_mesh(&meshed, OutputFormat::Env).unwrap();
    insta::assert_snapshot!(text, @r#"
    PUBLIC_HOME='$HOME/app'
    PUBLIC_LINES="a\nb"
    PUBLIC_QUOTE="it's \$USER"
    "#);
}

#[test]
fn test_render_mesh_json_format() {
    let text = render_mesh(&sample(), OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["VITE_GREETING"], "hello world");
    assert_eq!(parsed.as_object().map(serde_json::Map::len), Some(4));
}

#[test]
fn test_render_mesh_empty() {
    let empty = crate::mesh::MeshedEnv::new();
    assert_eq!(render_mesh(&empty, OutputFormat::Env).unwrap(), "");
    assert_eq!(render_json(&empty).unwrap(), "{}");
}

#[test]
fn test_mesh_options_prefers_cli_prefixes() {
    let config = Config::parse("[mesh]\nprefixes = [\"PUBLIC_\"]\ndebug = true").unwrap();

    let from_config = mesh_options(&PrefixArgs::default(), &config);
    assert_eq!(from_config.prefixes, PrefixList::from(["PUBLIC_"]));
    assert!(from_config.debug);

    let args = PrefixArgs {
        prefixes: vec!["VITE_".to_string(), "NX_".to_string()],
    };
    let from_cli = mesh_options(&args, &config);
    assert_eq!(from_cli.prefixes, PrefixList::from(["VITE_", "NX_"]));
    assert!(from_cli.debug);
}
