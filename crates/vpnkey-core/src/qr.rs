//! QR code descriptor.
//!
//! The page does not encode QR symbols itself. It emits a canvas and a JSON
//! option object that the QRious helper consumes in the browser.

use serde::Serialize;

use crate::html::escape;

/// Pixel size of the rendered code.
pub const QR_SIZE: u32 = 64;
/// Light module colour.
pub const QR_BACKGROUND: &str = "white";
/// Dark module colour.
pub const QR_FOREGROUND: &str = "#23272f";

/// Error-correction level understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

/// Options handed to the external QR renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrCode {
    pub value: String,
    pub size: u32,
    pub background: &'static str,
    pub foreground: &'static str,
    pub level: EcLevel,
}

impl QrCode {
    /// The code shown on the subscription card for `key`.
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        Self {
            value: key.to_owned(),
            size: QR_SIZE,
            background: QR_BACKGROUND,
            foreground: QR_FOREGROUND,
            level: EcLevel::H,
        }
    }

    /// The `<canvas>` element carrying these options in `data-qr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail to serialize.
    pub fn canvas(&self) -> Result<String, serde_json::Error> {
        let options = serde_json::to_string(self)?;
        Ok(format!(
            "<canvas id=\"qr-canvas\" class=\"qr-canvas\" width=\"{size}\" height=\"{size}\" data-qr=\"{options}\"></canvas>",
            size = self.size,
            options = escape(&options),
        ))
    }
}
