// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source environment handling.
//!
//! # Architecture
//!
//! ```text
//! EnvSource (ordered, absent-aware)
//! Sources: current_env(), EnvSource::from([...]), EnvSource::new()
//! Ops: set/set_absent/insert/get/present
//! ```
//!
//! - **Case-sensitive** keys on every platform
//! - **Absent values** are kept distinct from empty strings
//! - **Read-only** view of the process; nothing here writes the environment

pub mod container;
pub mod types;


/// Captures the current process environment.
///
/// Values that are not valid Unicode are recorded as absent. Keys that are
/// not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> container::EnvSource {
    let mut source = container::EnvSource::new();
    for (key, value) in std::env::vars_os() {
        let Ok(key) = key.into_string() else {
            tracing::trace!("skipping non-unicode environment key");
            continue;
        };
        source.insert(key, value.into_string().ok());
    }
    source
}
