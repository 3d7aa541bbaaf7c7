// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> output::emit (stdout)
//!   mesh, vite, next, config (options/inis/prefixes)
//! ```

pub mod adapter;
pub mod config;
pub mod mesh;
pub mod output;

#[cfg(test)]
mod tests;
