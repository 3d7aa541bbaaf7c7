// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for source environment entries.
//!
//! # Architecture
//!
//! ```text
//! EnvEntry: key + Option<value>
//!   Some("")  -> present, empty string
//!   None      -> absent (treated as if the key were not set)
//! ```

/// A single variable in a source environment.
///
/// Keys are compared literally (case-sensitive), on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    key: String,
    value: Option<String>,
}

impl EnvEntry {
    pub(super) const fn new(key: String, value: Option<String>) -> Self {
        Self { key, value }
    }

    /// The variable name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The variable value, or `None` when the value is absent.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(super) fn replace_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}
