// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envmesh using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envmesh [global options] <command>
//! mesh [--format json|env] [-p PREFIX]...
//! vite [-p PREFIX]...
//! next [-p PREFIX]... [--config FILE|-]
//! prefixes
//! options
//! inis
//! version
//! ```

pub mod adapter;
pub mod global;
pub mod mesh;


use crate::cli::adapter::{NextArgs, ViteArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::mesh::{MeshArgs, PrefixArgs};
use clap::{Parser, Subcommand};

/// Public Env Mesh
///
/// Makes a variable defined under one front-end prefix available under all
/// of them.
#[derive(Debug, Parser)]
#[command(
    name = "envmesh",
    author,
    version,
    about = "Mesh public environment variables across build tool prefixes",
    long_about = "envmesh Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the process environment and, for every variable that\n\
                  starts with a recognized prefix (PUBLIC_, VITE_, NEXT_PUBLIC_,\n\
                  NX_, REACT_APP_ by default), emits the same value under every\n\
                  other prefix. `envmesh vite` and `envmesh next` print the\n\
                  slices Vite and Next.js consume.",
    after_help = "CONFIG FILES:\n\n\
                  envmesh reads `envmesh.toml` from the current directory if it\n\
                  exists. Additional files can be given with --ini (before the\n\
                  command) and are loaded after it. Use --no-default-inis to only\n\
                  use --ini. ENVMESH_* variables override file values, e.g.\n\
                  ENVMESH_MESH__DEBUG=true."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used.
    Inis,

    /// Prints the effective prefix list, one per line.
    Prefixes(PrefixArgs),

    /// Prints the full meshed environment.
    Mesh(MeshArgs),

    /// Prints the Vite `define` block.
    Vite(ViteArgs),

    /// Prints a Next.js config with meshed `env` entries merged in.
    Next(NextArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
