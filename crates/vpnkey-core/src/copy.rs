//! Copy-to-clipboard feedback.
//!
//! A [`CopyButton`] copies the access key through a [`Clipboard`] and then
//! shows `copied` (or `copyFailed`) for [`COPY_FEEDBACK`] before returning to
//! its resting label. The label is derived from the current time on every
//! read, so a language change during feedback is picked up when the label
//! is restored. All timing uses `tokio::time`, which tests can pause.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::ClipboardError;
use crate::i18n::{Lang, Slot, translate};

/// How long the confirmation (or failure) label stays on a button.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1200);

/// Where copied text ends up.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard, used where there is no system clipboard and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    deny: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write with `reason`.
    #[must_use]
    pub fn denying(reason: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(None),
            deny: Some(reason.into()),
        }
    }

    /// The last text successfully written.
    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.deny {
            return Err(ClipboardError::Denied {
                reason: reason.clone(),
            });
        }
        *self.contents.lock().await = Some(text.to_owned());
        Ok(())
    }
}

/// Which button was pressed. Decides the label it returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The "Get Link" button on the subscription card.
    SubscriptionLink,
    /// A step's action button, labelled by its own slot.
    Step(Slot),
}

impl CopyTarget {
    /// The label shown when no feedback is active.
    #[must_use]
    pub const fn resting_slot(self) -> Slot {
        match self {
            Self::SubscriptionLink => Slot::GetLink,
            Self::Step(slot) => slot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    Idle,
    Copied { until: Instant },
    Failed { until: Instant },
}

/// Label state of one copy button.
#[derive(Debug, Clone)]
pub struct CopyButton {
    target: CopyTarget,
    feedback: Feedback,
}

impl CopyButton {
    #[must_use]
    pub const fn new(target: CopyTarget) -> Self {
        Self {
            target,
            feedback: Feedback::Idle,
        }
    }

    #[must_use]
    pub const fn target(&self) -> CopyTarget {
        self.target
    }

    /// The slot currently displayed at `now`.
    #[must_use]
    pub fn slot_at(&self, now: Instant) -> Slot {
        match self.feedback {
            Feedback::Copied { until } if now < until => Slot::Copied,
            Feedback::Failed { until } if now < until => Slot::CopyFailed,
            _ => self.target.resting_slot(),
        }
    }

    /// The text currently displayed, in `lang`.
    #[must_use]
    pub fn label(&self, lang: Lang) -> &'static str {
        translate(lang, self.slot_at(Instant::now()))
    }

    /// When the current feedback ends, if any is active.
    #[must_use]
    pub fn feedback_deadline(&self) -> Option<Instant> {
        let now = Instant::now();
        match self.feedback {
            Feedback::Copied { until } | Feedback::Failed { until } if now < until => Some(until),
            _ => None,
        }
    }

    /// Copy `key` and start the feedback window.
    ///
    /// A second click during feedback restarts the window.
    ///
    /// # Errors
    ///
    /// Returns the clipboard's error after switching the label to the
    /// failure state.
    pub async fn click(
        &mut self,
        clipboard: &dyn Clipboard,
        key: &str,
    ) -> Result<(), ClipboardError> {
        let result = clipboard.write_text(key).await;
        let until = Instant::now() + COPY_FEEDBACK;
        self.feedback = match &result {
            Ok(()) => Feedback::Copied { until },
            Err(e) => {
                tracing::warn!(button = ?self.target, error = %e, "copy to clipboard failed");
                Feedback::Failed { until }
            }
        };
        result
    }

    /// Wait until the feedback window has elapsed.
    pub async fn settle(&mut self) {
        if let Some(deadline) = self.feedback_deadline() {
            tokio::time::sleep_until(deadline).await;
        }
        self.feedback = Feedback::Idle;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn copied_label_then_restores_after_timeout() {
        let clipboard = MemoryClipboard::new();
        let mut button = CopyButton::new(CopyTarget::Step(Slot::AddSubBtn));
        assert_eq!(button.label(Lang::En), "Add subscription");

        button.click(&clipboard, "abc123").await.unwrap();
        assert_eq!(button.label(Lang::En), "Copied!");
        assert_eq!(clipboard.contents().await.as_deref(), Some("abc123"));

        tokio::time::advance(COPY_FEEDBACK - Duration::from_millis(1)).await;
        assert_eq!(button.label(Lang::En), "Copied!");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(button.label(Lang::En), "Add subscription");
    }

    #[tokio::test(start_paused = true)]
    async fn subscription_link_rests_on_get_link() {
        let clipboard = MemoryClipboard::new();
        let mut button = CopyButton::new(CopyTarget::SubscriptionLink);
        button.click(&clipboard, "k").await.unwrap();
        assert_eq!(button.label(Lang::Ru), "Скопировано!");
        tokio::time::advance(COPY_FEEDBACK).await;
        assert_eq!(button.label(Lang::Ru), "Получить ссылку");
    }

    #[tokio::test(start_paused = true)]
    async fn denied_clipboard_surfaces_failure_label() {
        let clipboard = MemoryClipboard::denying("permission denied");
        let mut button = CopyButton::new(CopyTarget::Step(Slot::CopyLink));

        let err = button.click(&clipboard, "k").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Denied { .. }));
        assert_eq!(button.label(Lang::En), "Copy failed");
        assert_eq!(clipboard.contents().await, None);

        tokio::time::advance(COPY_FEEDBACK).await;
        assert_eq!(button.label(Lang::En), "Copy link");
    }

    #[tokio::test(start_paused = true)]
    async fn restored_label_follows_language_change() {
        let clipboard = MemoryClipboard::new();
        let mut button = CopyButton::new(CopyTarget::Step(Slot::CopyLink));
        button.click(&clipboard, "k").await.unwrap();
        assert_eq!(button.label(Lang::Ru), "Скопировано!");

        tokio::time::advance(COPY_FEEDBACK).await;
        assert_eq!(button.label(Lang::En), "Copy link");
    }

    #[tokio::test(start_paused = true)]
    async fn second_click_restarts_window() {
        let clipboard = MemoryClipboard::new();
        let mut button = CopyButton::new(CopyTarget::SubscriptionLink);
        button.click(&clipboard, "k").await.unwrap();
        tokio::time::advance(Duration::from_millis(1000)).await;
        button.click(&clipboard, "k").await.unwrap();
        tokio::time::advance(Duration::from_millis(1000)).await;
        assert_eq!(button.label(Lang::En), "Copied!");
        tokio::time::advance(Duration::from_millis(200)).await;
        assert_eq!(button.label(Lang::En), "Get Link");
    }

    #[tokio::test(start_paused = true)]
    async fn settle_waits_out_feedback() {
        let clipboard = MemoryClipboard::new();
        let mut button = CopyButton::new(CopyTarget::SubscriptionLink);
        button.click(&clipboard, "k").await.unwrap();
        let started = Instant::now();
        button.settle().await;
        assert!(started.elapsed() >= COPY_FEEDBACK);
        assert_eq!(button.feedback_deadline(), None);
        assert_eq!(button.label(Lang::En), "Get Link");
    }
}
