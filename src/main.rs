// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Mesh | Vite | Next | Prefixes | Options | Inis | Version
//! ```

use std::process::ExitCode;

use envmesh::cli::global::GlobalOptions;
use envmesh::cli::{self, Command};
use envmesh::cmd::adapter::{run_next_command, run_vite_command};
use envmesh::cmd::config::{run_inis_command, run_options_command, run_prefixes_command};
use envmesh::cmd::mesh::run_mesh_command;
use envmesh::config::loader::ConfigLoader;
use envmesh::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use envmesh::error::EnvMeshError;
use envmesh::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    let mut console_level = config.global.output_log_level;
    if config.mesh.debug {
        console_level = console_level.at_least(LogLevel::DEBUG);
    }

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_file(config.global.json_log)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => run_options_command(config),
        Some(Command::Inis) => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files())
        }
        Some(Command::Prefixes(args)) => run_prefixes_command(args, config),
        Some(Command::Mesh(args)) => run_mesh_command(args, config),
        Some(Command::Vite(args)) => run_vite_command(args, config),
        Some(Command::Next(args)) => run_next_command(args, config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(EnvMeshError::other("No command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envmesh::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for assignment in global.to_config_overrides() {
        loader = loader.set_str(&assignment)?;
    }
    loader.build()
}
