// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering and writing command output.

use std::io::Write;

use serde::Serialize;

use crate::cli::mesh::OutputFormat;
use crate::error::{EnvMeshError, MeshResult};
use crate::mesh::MeshedEnv;

/// Renders a meshed environment in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_mesh(meshed: &MeshedEnv, format: OutputFormat) -> MeshResult<String> {
    match format {
        OutputFormat::Json => render_json(meshed),
        OutputFormat::Env => Ok(meshed
            .iter()
            .map(|(key, value)| format!("{key}={}", dotenv_value(value)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Renders any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> MeshResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| EnvMeshError::other(format!("failed to serialize output: {e}")))
}

/// Writes a block of text to stdout, followed by a newline unless empty.
///
/// # Errors
///
/// Returns an I/O error if stdout is closed.
pub fn emit(text: &str) -> MeshResult<()> {
    let mut stdout = std::io::stdout().lock();
    if !text.is_empty() {
        writeln!(stdout, "{text}")?;
    }
    stdout.flush().map_err(EnvMeshError::from)
}

/// Quotes a value for a dotenv line when it would not survive unquoted.
///
/// Single quotes are literal in dotenv parsers, so `$VAR` is not expanded.
/// Values that cannot be single-quoted fall back to an escaped double-quoted
/// string with `$` escaped.
fn dotenv_value(value: &str) -> String {
    let plain = value.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '@' | '+' | ',')
    });
    if plain {
        return value.to_string();
    }
    if !value.contains(['\'', '\n', '\r']) {
        return format!("'{value}'");
    }
    serde_json::Value::from(value).to_string().replace('$', "\\$")
}
