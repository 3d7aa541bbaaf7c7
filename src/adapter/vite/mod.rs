// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vite adapter.
//!
//! ```text
//! public_env(options) -> VitePlugin { name: "public-env" }
//!
//! config hook:
//!   current_env() -> mesh -> keep VITE_* ->
//!   define["import.meta.env.VITE_X"] = "\"value\""
//! ```
//!
//! Vite substitutes `define` entries literally into source, so every value
//! is emitted as a JSON string literal.


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Plugin;
use crate::core::env::container::EnvSource;
use crate::core::env::current_env;
use crate::mesh::{MeshOptions, create_public_env, with_prefix};

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "public-env";

/// Prefix of the variables Vite exposes to client code.
pub const VITE_PREFIX: &str = "VITE_";

/// Runtime accessor the `define` keys are rooted at.
pub const ENV_ACCESSOR: &str = "import.meta.env";

/// Which host command is resolving its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostCommand {
    #[default]
    Serve,
    Build,
}

/// Second argument of the host's config hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEnv {
    pub command: HostCommand,
    pub mode: String,
}

impl Default for ConfigEnv {
    fn default() -> Self {
        Self {
            command: HostCommand::Serve,
            mode: "development".to_string(),
        }
    }
}

/// Partial configuration returned by the config hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Literal replacements: accessor path -> JSON-encoded value.
    pub define: BTreeMap<String, String>,
}

/// Vite plugin that meshes public variables into `import.meta.env`.
#[derive(Debug, Clone, Default)]
pub struct VitePlugin {
    options: MeshOptions,
}

/// Creates the Vite plugin.
#[must_use]
pub const fn public_env(options: MeshOptions) -> VitePlugin {
    VitePlugin::new(options)
}

impl VitePlugin {
    #[must_use]
    pub const fn new(options: MeshOptions) -> Self {
        Self { options }
    }

    /// Runs the config hook against an explicit source environment.
    #[must_use]
    pub fn config_from(&self, source: &EnvSource) -> UserConfig {
        let meshed = create_public_env(source, &self.options);

        let define = with_prefix(&meshed, VITE_PREFIX)
            .map(|(key, value)| (format!("{ENV_ACCESSOR}.{key}"), encode_literal(value)))
            .collect();

        UserConfig { define }
    }
}

impl Plugin for VitePlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn config(&self, _host_config: &serde_json::Value, _env: &ConfigEnv) -> UserConfig {
        let user_config = self.config_from(&current_env());
        tracing::debug!(defines = user_config.define.len(), "resolved vite defines");
        user_config
    }
}

/// Encodes a value as a JSON string literal.
fn encode_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
