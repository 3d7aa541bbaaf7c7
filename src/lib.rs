// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          mesh / vite / next
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                 +----------+----------+
//!                 v                     v
//!              adapter               mesh
//!           vite / next       extract + expand
//!                 |                     |
//!                 +----------+----------+
//!                            v
//!   +-----------------------------------------+
//!   |  core   env (ordered source snapshot)   |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envmesh::core::env::container::EnvSource;
//! use envmesh::mesh::{MeshOptions, create_public_env};
//!
//! let source = EnvSource::from([("PUBLIC_API_URL", "https://api.example.com")]);
//! let meshed = create_public_env(&source, &MeshOptions::default());
//!
//! assert_eq!(meshed["VITE_API_URL"], "https://api.example.com");
//! assert_eq!(meshed["NEXT_PUBLIC_API_URL"], "https://api.example.com");
//! assert_eq!(meshed.len(), 5);
//! ```

pub mod adapter;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod mesh;
