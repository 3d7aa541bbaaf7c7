// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The mesh engine.
//!
//! # Algorithm
//!
//! ```text
//! EnvSource ──extract──> MeshTable ──expand──> MeshedEnv
//!
//! extract: for each present entry, in source order
//!            first prefix the key starts with -> base name
//!            table[base name] = value      (later entries win)
//!          keys matching no prefix are dropped
//!
//! expand:  for each base name, for each prefix
//!            out[prefix + base name] = value
//! ```
//!
//! Example with the default prefixes:
//!
//! ```text
//! PUBLIC_API_URL=x  ->  PUBLIC_API_URL, VITE_API_URL, NEXT_PUBLIC_API_URL,
//!                       NX_API_URL, REACT_APP_API_URL  (all = x)
//! ```

pub mod prefix;
mod table;


use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;
use tracing::debug;

use crate::core::env::container::EnvSource;
use crate::core::env::current_env;

pub use prefix::{DEFAULT_PREFIXES, PrefixList};
use table::MeshTable;

/// Meshed output: every recognized prefix joined with every base name.
pub type MeshedEnv = BTreeMap<String, String>;

/// Options for a mesh run.
///
/// Also the `[mesh]` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeshOptions {
    /// Prefixes to mesh. Replaces the defaults entirely when set.
    #[builder(setters(name = with_prefixes), default, into)]
    pub prefixes: PrefixList,
    /// Trace every extraction and expansion step at debug level.
    #[builder(setters(name = with_debug), default)]
    pub debug: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Meshes `source` across `prefixes`.
///
/// Entries with absent values and keys that start with none of the prefixes
/// contribute nothing. When several keys reduce to the same base name, the
/// one that comes last in `source` decides the value.
#[must_use]
pub fn mesh(source: &EnvSource, prefixes: &PrefixList) -> MeshedEnv {
    run(source, prefixes, false)
}

/// Meshes `source` with the prefixes and tracing settings in `options`.
#[must_use]
pub fn create_public_env(source: &EnvSource, options: &MeshOptions) -> MeshedEnv {
    run(source, &options.prefixes, options.debug)
}

/// Meshes the current process environment.
#[must_use]
pub fn get_public_env(options: &MeshOptions) -> MeshedEnv {
    create_public_env(&current_env(), options)
}

/// Returns the meshed entries whose key starts with `prefix`.
pub fn with_prefix<'a>(
    meshed: &'a MeshedEnv,
    prefix: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    // Keys sharing a prefix are contiguous in a BTreeMap, starting at the prefix itself.
    meshed
        .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .take_while(move |(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key.as_str(), value.as_str()))
}

fn run(source: &EnvSource, prefixes: &PrefixList, trace: bool) -> MeshedEnv {
    if trace {
        debug!(prefixes = %prefixes, input_keys = source.len(), "starting mesh");
    }

    let table = extract(source, prefixes, trace);
    if trace {
        debug!(base_names = table.len(), "unique base names found");
    }

    let meshed = expand(&table, prefixes, trace);
    if trace {
        debug!(output_keys = meshed.len(), "mesh complete");
    }
    meshed
}

fn extract(source: &EnvSource, prefixes: &PrefixList, trace: bool) -> MeshTable {
    let mut table = MeshTable::new();

    for (key, value) in source.present() {
        let Some(prefix) = prefixes.first_match(key) else {
            continue;
        };

        let base_name = &key[prefix.len()..];
        let previous = table.record(base_name, value);

        if trace {
            match previous {
                Some(old) => debug!(base_name, from = key, "overwriting {old:?} -> {value:?}"),
                None => debug!(base_name, from = key, value, "found base name"),
            }
        }
    }

    table
}

fn expand(table: &MeshTable, prefixes: &PrefixList, trace: bool) -> MeshedEnv {
    let mut meshed = MeshedEnv::new();

    for (base_name, value) in table.iter() {
        for prefix in prefixes.iter() {
            let key = format!("{prefix}{base_name}");
            if trace {
                debug!(key = %key, value, "meshed");
            }
            meshed.insert(key, value.to_owned());
        }
    }

    meshed
}
