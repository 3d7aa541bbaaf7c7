// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envmesh.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envmesh.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. ENVMESH_* env vars
//! 5. CLI overrides (--set, --debug, --log-level)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVMESH_MESH__DEBUG=true               → mesh.debug = true
//! ENVMESH_MESH__PREFIXES=PUBLIC_,VITE_   → mesh.prefixes = ["PUBLIC_", "VITE_"]
//! ENVMESH_GLOBAL__OUTPUT_LOG_LEVEL=4     → global.output_log_level = 4
//! ```
//!
//! The `ENVMESH_` prefix is not one of the meshed prefixes, so these
//! variables never leak into a mesh run with the default list.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::mesh::MeshOptions;

use loader::ConfigLoader;
use types::GlobalConfig;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envmesh.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "ENVMESH";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Mesh options.
    pub mesh: MeshOptions,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envmesh::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envmesh.toml")
    ///     .with_env_prefix("ENVMESH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_mesh_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
        );
        options.insert("global.json_log".into(), self.global.json_log.to_string());
    }

    fn format_mesh_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("mesh.prefixes".into(), self.mesh.prefixes.to_string());
        options.insert("mesh.debug".into(), self.mesh.debug.to_string());
    }
}
