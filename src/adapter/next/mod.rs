// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Next.js adapter.
//!
//! ```text
//! with_public_env(options) -> |next_config| -> NextConfig
//!
//!   { ...next_config,
//!     env: { ...next_config.env, ...mesh(NEXT_PUBLIC_*) } }
//! ```
//!
//! The wrapper never touches the caller's config; it returns a copy.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Read;

use crate::core::env::container::EnvSource;
use crate::core::env::current_env;
use crate::error::{AdapterError, MeshResult};
use crate::mesh::{MeshOptions, create_public_env, with_prefix};

/// Prefix of the variables Next.js inlines into client bundles.
pub const NEXT_PUBLIC_PREFIX: &str = "NEXT_PUBLIC_";

/// A Next.js configuration object.
///
/// Only `env` is typed; every other top-level field is carried through
/// untouched in `rest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NextConfig {
    /// Build-time environment variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    /// All other fields, as given.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl NextConfig {
    /// Parses a config document.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::InvalidHostConfig` if the document is not a JSON
    /// object or its `env` field is not an object of strings.
    pub fn from_json_str(content: &str) -> MeshResult<Self> {
        serde_json::from_str(content).map_err(|e| invalid_host_config(&e).into())
    }

    /// Reads and parses a config document.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::ReadHostConfig` if reading fails, or
    /// `AdapterError::InvalidHostConfig` if the content is malformed.
    pub fn from_reader(mut reader: impl Read, origin: &str) -> MeshResult<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| AdapterError::ReadHostConfig {
                path: origin.to_string(),
                source,
            })?;
        Self::from_json_str(&content)
    }

    /// Returns a field other than `env`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.rest.get(field)
    }
}

fn invalid_host_config(err: &serde_json::Error) -> AdapterError {
    AdapterError::InvalidHostConfig {
        message: err.to_string(),
    }
}

/// Returns a config wrapper that merges meshed `NEXT_PUBLIC_*` variables
/// from the current process environment into `env`.
///
/// The environment is read each time the wrapper is called.
pub fn with_public_env(options: MeshOptions) -> impl Fn(Option<&NextConfig>) -> NextConfig {
    move |next_config| wrap_config(next_config, &current_env(), &options)
}

/// Same as [`with_public_env`], meshing `source` instead of the process
/// environment.
pub fn with_public_env_from(
    options: MeshOptions,
    source: EnvSource,
) -> impl Fn(Option<&NextConfig>) -> NextConfig {
    move |next_config| wrap_config(next_config, &source, &options)
}

fn wrap_config(
    next_config: Option<&NextConfig>,
    source: &EnvSource,
    options: &MeshOptions,
) -> NextConfig {
    let meshed = create_public_env(source, options);
    let mut wrapped = next_config.cloned().unwrap_or_default();

    let env = wrapped.env.get_or_insert_with(BTreeMap::new);
    let before = env.len();
    env.extend(
        with_prefix(&meshed, NEXT_PUBLIC_PREFIX)
            .map(|(key, value)| (key.to_owned(), value.to_owned())),
    );
    tracing::debug!(existing = before, total = env.len(), "merged next env");

    wrapped
}
