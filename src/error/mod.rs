// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           EnvMeshError (~24 bytes)
//!                   |
//!     +--------+----+----+--------+
//!     |        |         |        |
//!     v        v         v        v
//!   Config  Adapter     Io      Other
//!    Box      Box       Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config   ParseError, InvalidValue, NotFound
//!   Adapter  InvalidHostConfig, ReadHostConfig
//! ```
//!
//! The mesh itself never fails. Errors only come from the edges: config
//! files, CLI input and host config documents.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvMeshError`].
pub type MeshResult<T> = std::result::Result<T, EnvMeshError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvMeshError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Host integration error.
    #[error("adapter error: {0}")]
    Adapter(#[from] Box<AdapterError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl EnvMeshError {
    /// Creates an [`EnvMeshError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvMeshError {
                fn from(err: $error) -> Self {
                    EnvMeshError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    AdapterError => Adapter,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or merge configuration sources.
    #[error("failed to parse config from {path}: {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Adapter Errors ---

/// Errors at the host integration boundary.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Host configuration document does not have the expected shape.
    #[error("invalid host config: {message}")]
    InvalidHostConfig { message: String },

    /// Host configuration document could not be read.
    #[error("failed to read host config '{path}': {source}")]
    ReadHostConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
