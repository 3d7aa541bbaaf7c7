// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix("ENVMESH")
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Separator between nested keys in environment overrides
/// (`ENVMESH_MESH__DEBUG` -> `mesh.debug`).
const ENV_KEY_SEPARATOR: &str = "__";

/// Keys whose values are comma-separated lists in env vars and `--set`.
const LIST_KEY: &str = "mesh.prefixes";

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads overrides from `<PREFIX>_<SECTION>__<KEY>` environment variables.
    ///
    /// `mesh.prefixes` is parsed as a comma-separated list.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` override string.
    ///
    /// `mesh.prefixes` takes a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the string has no `=` or no
    /// section, or an error if the override cannot be set.
    pub fn set_str(self, assignment: &str) -> Result<Self> {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(invalid_override(assignment, "expected KEY=VALUE").into());
        };
        let key = key.trim();
        if !key.contains('.') {
            return Err(invalid_override(assignment, "expected SECTION.KEY").into());
        }
        if key == LIST_KEY {
            let items: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            return self.set(key, items);
        }
        self.set(key, value.trim())
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        if let Some((_, missing)) = self
            .files
            .iter()
            .find(|(source, path)| source == "file" && !path.exists())
        {
            return Err(ConfigError::NotFound(missing.display().to_string()).into());
        }

        let origin = self.describe_sources();
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(ENV_KEY_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key(LIST_KEY)
                    .try_parsing(true),
            ),
            None => self.builder,
        };

        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: origin.clone(),
            message: e.to_string(),
        };
        let cfg = builder.build().map_err(parse_error)?;
        let config: Config = cfg.try_deserialize().map_err(parse_error)?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }

    fn describe_sources(&self) -> String {
        if self.files.is_empty() {
            return "<defaults>".to_string();
        }
        self.files
            .iter()
            .map(|(_, path)| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_override(assignment: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "--set".to_string(),
        message: format!("{message}, got '{assignment}'"),
    }
}
