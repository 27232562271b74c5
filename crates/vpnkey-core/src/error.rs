//! Error types for `vpnkey-core`.
//!
//! Parsing errors carry the rejected input so callers can log or echo it.
//! Clipboard errors never carry the access key, only the reason the write
//! was refused.

/// Errors from parsing language codes, tab ids, device ids, and slot keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The language code is not one of the supported codes.
    #[error("unknown language code '{code}'")]
    UnknownLanguage { code: String },

    /// The tab id does not name an install flow.
    #[error("unknown tab '{id}'")]
    UnknownTab { id: String },

    /// The device id does not name a device kind.
    #[error("unknown device '{id}'")]
    UnknownDevice { id: String },

    /// The slot key is not present in the translation table.
    #[error("unknown translation slot '{key}'")]
    UnknownSlot { key: String },
}

/// Errors from writing to a clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    #[error("clipboard is not available: {reason}")]
    Unavailable { reason: String },

    /// The clipboard exists but refused the write.
    #[error("clipboard write denied: {reason}")]
    Denied { reason: String },
}

/// Errors from rendering the full page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Embedded page data (QR options, translation table) failed to serialize.
    #[error("failed to serialize page data: {0}")]
    Serialize(#[from] serde_json::Error),
}
