// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered source environment container.
//!
//! # Architecture
//!
//! ```text
//! EnvSource
//!   entries: Vec<EnvEntry>          insertion order = iteration order
//!   index:   HashMap<String, usize> key -> position
//!
//! insert(existing key) replaces the value in place (position kept)
//! ```

use super::types::EnvEntry;
use std::collections::HashMap;

/// A source mapping of variable names to optional values.
///
/// Iteration follows insertion order, which is what decides "last wins"
/// when several keys mesh to the same base name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    entries: Vec<EnvEntry>,
    index: HashMap<String, usize>,
}

impl EnvSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable to a present value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key, Some(value.into()))
    }

    /// Records a variable whose value is absent.
    ///
    /// Absent entries are kept so callers can observe them, but they never
    /// contribute to a mesh.
    pub fn set_absent(&mut self, key: impl Into<String>) -> &mut Self {
        self.insert(key, None)
    }

    /// Inserts a variable with an optional value.
    ///
    /// Re-inserting an existing key replaces its value and keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) -> &mut Self {
        let key = key.into();
        if let Some(&position) = self.index.get(&key) {
            self.entries[position].replace_value(value);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push(EnvEntry::new(key, value));
        }
        self
    }

    /// Gets a present variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .and_then(|&position| self.entries[position].value())
    }

    /// Returns an iterator over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over entries with a present value.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.value().map(|value| (entry.key(), value)))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (key, value) in iter {
            source.set(key, value);
        }
        source
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for EnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a EnvSource {
    type Item = &'a EnvEntry;
    type IntoIter = std::slice::Iter<'a, EnvEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
