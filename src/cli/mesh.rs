// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mesh command arguments.

use clap::{Args, ValueEnum};

use crate::mesh::PrefixList;

/// Prefix list override shared by every mesh-running command.
#[derive(Debug, Clone, Default, Args)]
pub struct PrefixArgs {
    /// Prefix to mesh. Can be specified multiple times; replaces the
    /// configured list entirely. Order decides which prefix claims a key
    /// matching several.
    #[arg(short = 'p', long = "prefix", value_name = "PREFIX", action = clap::ArgAction::Append)]
    pub prefixes: Vec<String>,
}

impl PrefixArgs {
    /// Returns the prefixes given on the command line, or `configured` when
    /// none were given.
    #[must_use]
    pub fn resolve(&self, configured: &PrefixList) -> PrefixList {
        if self.prefixes.is_empty() {
            configured.clone()
        } else {
            PrefixList::new(&self.prefixes)
        }
    }
}

/// Output format for the mesh command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A JSON object.
    #[default]
    Json,
    /// `KEY=value` lines, dotenv compatible.
    Env,
}

/// Arguments for `envmesh mesh`.
#[derive(Debug, Clone, Default, Args)]
pub struct MeshArgs {
    #[command(flatten)]
    pub prefixes: PrefixArgs,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
