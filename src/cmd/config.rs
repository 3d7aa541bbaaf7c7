// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envmesh.

use crate::cli::mesh::PrefixArgs;
use crate::cmd::output::emit;
use crate::config::Config;
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_options_command(config: &Config) -> Result<()> {
    emit(&config.format_options().join("\n"))?;
    Ok(())
}

/// Display loaded configuration files.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_inis_command(config_files: &[String]) -> Result<()> {
    if config_files.is_empty() {
        emit("No configuration files loaded")?;
    } else {
        emit(&config_files.join("\n"))?;
    }
    Ok(())
}

/// Display the effective prefix list, one per line.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_prefixes_command(args: &PrefixArgs, config: &Config) -> Result<()> {
    let prefixes = args.resolve(&config.mesh.prefixes);
    emit(&prefixes.as_slice().join("\n"))?;
    Ok(())
}
