//! Shared application state for `vpnkey` server.
//!
//! Built once at startup and shared across handlers via `Arc`. Immutable:
//! every request renders from the query string plus these fallbacks.

use vpnkey_core::{Defaults, PageAssets};

use crate::config::ServerConfig;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Fallbacks for missing `key` / `expires` parameters.
    pub defaults: Defaults,
    /// External resources referenced by the page.
    pub assets: PageAssets,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            defaults: config.defaults(),
            assets: config.assets(),
        }
    }
}
