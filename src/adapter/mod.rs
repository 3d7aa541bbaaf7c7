// envmesh: Public Env Mesh for Front-end Build Tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build tool adapters.
//!
//! ```text
//!                 MeshedEnv
//!                     |
//!          +----------+-----------+
//!          v                      v
//!     vite (bundler)        next (meta-framework)
//!   keep VITE_*              keep NEXT_PUBLIC_*
//!   define:                  env:
//!   import.meta.env.K ->     existing env + meshed
//!     JSON literal           (meshed wins)
//! ```
//!
//! Both adapters read the process environment when invoked; the `*_from`
//! variants take an injected [`EnvSource`](crate::core::env::container::EnvSource).

pub mod next;
pub mod vite;

/// A bundler plugin as seen by its host.
///
/// The host resolves its configuration by calling [`Plugin::config`] on
/// every registered plugin and merging the returned partial configs.
pub trait Plugin {
    /// Identifies the plugin in host diagnostics.
    fn name(&self) -> &'static str;

    /// Configuration hook.
    ///
    /// `host_config` and `env` are supplied by the host; implementations may
    /// ignore them.
    fn config(&self, host_config: &serde_json::Value, env: &vite::ConfigEnv) -> vite::UserConfig;
}
