// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment access.
//!
//! ```text
//!     core
//!      |
//!      v
//!     env
//!      |
//!  EnvSource  current_env()
//! ```

pub mod env;
