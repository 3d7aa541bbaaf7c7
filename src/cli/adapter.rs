// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Adapter command arguments.

use clap::Args;
use std::path::PathBuf;

use super::mesh::PrefixArgs;

/// Arguments for `envmesh vite`.
#[derive(Debug, Clone, Default, Args)]
pub struct ViteArgs {
    #[command(flatten)]
    pub prefixes: PrefixArgs,
}

/// Arguments for `envmesh next`.
#[derive(Debug, Clone, Default, Args)]
pub struct NextArgs {
    #[command(flatten)]
    pub prefixes: PrefixArgs,

    /// Existing Next.js config as JSON. Use `-` to read stdin.
    /// Starts from an empty config when omitted.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
