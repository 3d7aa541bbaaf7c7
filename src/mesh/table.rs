// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Base name table built by the extraction pass.

use std::collections::HashMap;

/// Base name to resolved value, in first-seen order.
///
/// Holds at most one value per base name; recording a base name again
/// overwrites the value but keeps its original position.
#[derive(Debug, Default)]
pub(super) struct MeshTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MeshTable {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Records a value for a base name, returning the value it replaced.
    pub(super) fn record(&mut self, base_name: &str, value: &str) -> Option<String> {
        if let Some(&position) = self.index.get(base_name) {
            let slot = &mut self.entries[position].1;
            Some(std::mem::replace(slot, value.to_owned()))
        } else {
            self.index.insert(base_name.to_owned(), self.entries.len());
            self.entries.push((base_name.to_owned(), value.to_owned()));
            None
        }
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(super) const fn len(&self) -> usize {
        self.entries.len()
    }
}
