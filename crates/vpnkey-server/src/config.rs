//! Server configuration for `vpnkey`.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `VPNKEY_*` environment variables.

use std::net::SocketAddr;

use vpnkey_core::assets::QRIOUS_CDN_URL;
use vpnkey_core::state::{DEFAULT_EXPIRES, DEFAULT_KEY};
use vpnkey_core::{Defaults, PageAssets};

const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Access key shown when the request has no `key` parameter.
    pub default_key: String,
    /// Expiration label shown when the request has no `expires` parameter.
    pub default_expires: String,
    /// Script URL of the QR renderer.
    pub qr_script_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (Railway convention, binds to `0.0.0.0`)
    /// - `VPNKEY_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `VPNKEY_LOG_LEVEL` — log filter (default: `info`)
    /// - `VPNKEY_DEFAULT_KEY` — fallback access key (default: `nit8e67o`)
    /// - `VPNKEY_DEFAULT_EXPIRES` — fallback expiration label (default: `4 дня`)
    /// - `VPNKEY_QR_SCRIPT_URL` — QRious script URL (default: cdnjs)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        // Priority: VPNKEY_BIND_ADDR > PORT (Railway) > default 127.0.0.1:8080
        let bind_addr = if let Some(addr) = var("VPNKEY_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))
        } else if let Some(port_str) = var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_PORT);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        };

        let log_level = var("VPNKEY_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let default_key = var("VPNKEY_DEFAULT_KEY")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY.to_owned());

        let default_expires = var("VPNKEY_DEFAULT_EXPIRES")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPIRES.to_owned());

        let qr_script_url =
            var("VPNKEY_QR_SCRIPT_URL").unwrap_or_else(|| QRIOUS_CDN_URL.to_owned());

        Self {
            bind_addr,
            log_level,
            default_key,
            default_expires,
            qr_script_url,
        }
    }

    /// Fallbacks for missing query parameters.
    #[must_use]
    pub fn defaults(&self) -> Defaults {
        Defaults {
            key: self.default_key.clone(),
            expires: self.default_expires.clone(),
        }
    }

    /// External resources the page links to.
    #[must_use]
    pub fn assets(&self) -> PageAssets {
        PageAssets {
            qr_script_url: self.qr_script_url.clone(),
        }
    }
}
