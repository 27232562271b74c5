//! System clipboard backed by `arboard`.
//!
//! On X11 and Wayland the selection is served by the process that set it and
//! vanishes when that process exits. There the write blocks until another
//! owner (usually a clipboard manager) takes the selection or the hold
//! window ends.

use std::time::Duration;

use async_trait::async_trait;

use vpnkey_core::{Clipboard, ClipboardError};

/// How long `vpnkey copy` keeps serving the selection by default.
pub const DEFAULT_HOLD: Duration = Duration::from_secs(60);

/// The desktop clipboard of the current session.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    hold: Duration,
}

impl SystemClipboard {
    pub const fn new(hold: Duration) -> Self {
        Self { hold }
    }

    /// Whether writes block while the selection is served.
    pub const fn holds_selection() -> bool {
        cfg!(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        ))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD)
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn write(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: Duration,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait_until(std::time::Instant::now() + hold)
        .text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn write(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _hold: Duration,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

fn set_text(text: String, hold: Duration) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable {
        reason: err.to_string(),
    })?;
    write(&mut clipboard, text, hold).map_err(|err| ClipboardError::Denied {
        reason: err.to_string(),
    })
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let hold = self.hold;
        tokio::task::spawn_blocking(move || set_text(text, hold))
            .await
            .map_err(|err| ClipboardError::Unavailable {
                reason: err.to_string(),
            })?
    }
}
