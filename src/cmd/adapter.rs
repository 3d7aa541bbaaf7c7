// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vite and Next.js command implementations.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::adapter::Plugin;
use crate::adapter::next::{NextConfig, with_public_env};
use crate::adapter::vite::{ConfigEnv, public_env};
use crate::cli::adapter::{NextArgs, ViteArgs};
use crate::cmd::mesh::mesh_options;
use crate::cmd::output::{emit, render_json};
use crate::config::Config;
use crate::error::{AdapterError, Result};

/// Main handler for the vite command.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered or written.
pub fn run_vite_command(args: &ViteArgs, config: &Config) -> Result<()> {
    let plugin = public_env(mesh_options(&args.prefixes, config));
    let user_config = plugin.config(&serde_json::Value::Null, &ConfigEnv::default());
    info!(plugin = plugin.name(), defines = user_config.define.len(), "resolved vite config");

    emit(&render_json(&user_config)?)?;
    Ok(())
}

/// Main handler for the next command.
///
/// # Errors
///
/// Returns an error if the host config cannot be read or parsed, or the
/// output cannot be written.
pub fn run_next_command(args: &NextArgs, config: &Config) -> Result<()> {
    let host_config = match args.config.as_deref() {
        Some(path) => Some(read_host_config(path)?),
        None => None,
    };

    let wrap = with_public_env(mesh_options(&args.prefixes, config));
    let wrapped = wrap(host_config.as_ref());
    info!(
        env_entries = wrapped.env.as_ref().map_or(0, std::collections::BTreeMap::len),
        "wrapped next config"
    );

    emit(&render_json(&wrapped)?)?;
    Ok(())
}

fn read_host_config(path: &Path) -> Result<NextConfig> {
    if path == Path::new("-") {
        return NextConfig::from_reader(std::io::stdin().lock(), "<stdin>")
            .context("failed to load host config from stdin");
    }

    let file = File::open(path).map_err(|source| AdapterError::ReadHostConfig {
        path: path.display().to_string(),
        source,
    })?;
    NextConfig::from_reader(file, &path.display().to_string())
        .with_context(|| format!("failed to load host config {}", path.display()))
}
