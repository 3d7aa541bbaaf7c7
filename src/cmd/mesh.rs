// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mesh command implementation.

use tracing::info;

use crate::cli::mesh::{MeshArgs, PrefixArgs};
use crate::cmd::output::{emit, render_mesh};
use crate::config::Config;
use crate::error::Result;
use crate::mesh::{MeshOptions, get_public_env};

/// Builds mesh options from the configuration and any `--prefix` override.
#[must_use]
pub fn mesh_options(args: &PrefixArgs, config: &Config) -> MeshOptions {
    MeshOptions::builder()
        .with_prefixes(args.resolve(&config.mesh.prefixes))
        .with_debug(config.mesh.debug)
        .build()
}

/// Main handler for the mesh command.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered or written.
pub fn run_mesh_command(args: &MeshArgs, config: &Config) -> Result<()> {
    let options = mesh_options(&args.prefixes, config);
    let meshed = get_public_env(&options);
    info!(prefixes = %options.prefixes, entries = meshed.len(), "meshed process environment");

    emit(&render_mesh(&meshed, args.format)?)?;
    Ok(())
}
