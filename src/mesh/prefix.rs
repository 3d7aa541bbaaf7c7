// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recognized variable prefixes.
//!
//! ```text
//! DEFAULT_PREFIXES
//!   PUBLIC_       generic public variables
//!   VITE_         Vite
//!   NEXT_PUBLIC_  Next.js
//!   NX_           Nx
//!   REACT_APP_    Create React App
//! ```

use serde::{Deserialize, Serialize};

/// The conventional prefixes meshed when no list is configured.
pub const DEFAULT_PREFIXES: [&str; 5] = ["PUBLIC_", "VITE_", "NEXT_PUBLIC_", "NX_", "REACT_APP_"];

/// An ordered list of prefixes.
///
/// Order only decides which prefix claims a key that starts with more than
/// one of them: the first listed wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixList(Vec<String>);

impl Default for PrefixList {
    fn default() -> Self {
        DEFAULT_PREFIXES.into()
    }
}

impl PrefixList {
    /// Creates a prefix list from any sequence of strings.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        prefixes.into_iter().collect()
    }

    /// Returns the first prefix the key starts with.
    #[must_use]
    pub fn first_match(&self, key: &str) -> Option<&str> {
        self.iter().find(|prefix| key.starts_with(*prefix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PrefixList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for PrefixList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for PrefixList {
    fn from(prefixes: [S; N]) -> Self {
        prefixes.into_iter().collect()
    }
}

impl From<Vec<String>> for PrefixList {
    fn from(prefixes: Vec<String>) -> Self {
        Self(prefixes)
    }
}
