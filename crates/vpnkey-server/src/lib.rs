//! `vpnkey` HTTP server.
//!
//! Serves the onboarding page at `/`, the step fragment at `/steps`, the
//! translation table at `/i18n/{lang}`, and a health probe at `/health`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
