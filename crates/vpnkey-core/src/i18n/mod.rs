//! Translation table for the landing page.
//!
//! Every piece of visible text is a [`Slot`]. [`translate`] is total over
//! `(Lang, Slot)`: each language module matches exhaustively, so a slot that
//! is missing from one language fails to compile instead of leaving the
//! display stale.
//!
//! Keys arriving as strings (from markup or the browser) go through
//! [`lookup`] / [`lookup_or_key`]. Every language has a row for every slot,
//! so a key is either known everywhere or nowhere: an unknown key is logged
//! and shown as the raw key.

mod en;
mod ru;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Russian, the default.
    #[default]
    Ru,
    /// English.
    En,
}

impl Lang {
    /// All supported languages, default first.
    pub const ALL: [Self; 2] = [Self::Ru, Self::En];

    /// The code used in query strings and the document `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// The label shown on the language button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ru => "Русский",
            Self::En => "English",
        }
    }

    /// The flag glyph shown next to the label.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Ru => "🇷🇺",
            Self::En => "🇬🇧",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ru => Self::En,
            Self::En => Self::Ru,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(ParseError::UnknownLanguage { code: s.to_owned() }),
        }
    }
}

/// One translatable piece of text on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Subscription,
    GetLink,
    Expires,
    Install,
    DevicePc,
    DevicePhone,
    Hiddify,
    Clash,
    DownloadHiddify,
    DownloadHiddifyDesc,
    DownloadClash,
    DownloadClashDesc,
    Windows,
    Macos,
    Linux,
    ServerSwitch,
    ServerSwitchDesc,
    AddSub,
    AddSubDesc,
    AddSubBtn,
    ImportConfig,
    ImportConfigDesc,
    Ready,
    ReadyDesc,
    ReadyClashDesc,
    Copied,
    CopyFailed,
    CopyLink,
}

impl Slot {
    /// Every slot in the table.
    pub const ALL: [Self; 28] = [
        Self::Subscription,
        Self::GetLink,
        Self::Expires,
        Self::Install,
        Self::DevicePc,
        Self::DevicePhone,
        Self::Hiddify,
        Self::Clash,
        Self::DownloadHiddify,
        Self::DownloadHiddifyDesc,
        Self::DownloadClash,
        Self::DownloadClashDesc,
        Self::Windows,
        Self::Macos,
        Self::Linux,
        Self::ServerSwitch,
        Self::ServerSwitchDesc,
        Self::AddSub,
        Self::AddSubDesc,
        Self::AddSubBtn,
        Self::ImportConfig,
        Self::ImportConfigDesc,
        Self::Ready,
        Self::ReadyDesc,
        Self::ReadyClashDesc,
        Self::Copied,
        Self::CopyFailed,
        Self::CopyLink,
    ];

    /// Stable key written to `data-i18n` attributes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Subscription => "subscription",
            Self::GetLink => "getLink",
            Self::Expires => "expires",
            Self::Install => "install",
            Self::DevicePc => "devicePC",
            Self::DevicePhone => "devicePhone",
            Self::Hiddify => "hiddify",
            Self::Clash => "clash",
            Self::DownloadHiddify => "downloadHiddify",
            Self::DownloadHiddifyDesc => "downloadHiddifyDesc",
            Self::DownloadClash => "downloadClash",
            Self::DownloadClashDesc => "downloadClashDesc",
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::ServerSwitch => "serverSwitch",
            Self::ServerSwitchDesc => "serverSwitchDesc",
            Self::AddSub => "addSub",
            Self::AddSubDesc => "addSubDesc",
            Self::AddSubBtn => "addSubBtn",
            Self::ImportConfig => "importConfig",
            Self::ImportConfigDesc => "importConfigDesc",
            Self::Ready => "ready",
            Self::ReadyDesc => "readyDesc",
            Self::ReadyClashDesc => "readyClashDesc",
            Self::Copied => "copied",
            Self::CopyFailed => "copyFailed",
            Self::CopyLink => "copyLink",
        }
    }

    /// Parse a `data-i18n` key back into a slot.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownSlot`] if no slot has this key.
    pub fn from_key(key: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == key)
            .ok_or_else(|| ParseError::UnknownSlot {
                key: key.to_owned(),
            })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Localized text for `slot` in `lang`.
#[must_use]
pub fn translate(lang: Lang, slot: Slot) -> &'static str {
    match lang {
        Lang::Ru => ru::text(slot),
        Lang::En => en::text(slot),
    }
}

/// Localized text for a string slot key, or `None` if the key is unknown.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    match Slot::from_key(key) {
        Ok(slot) => Some(translate(lang, slot)),
        Err(_) => {
            tracing::warn!(lang = %lang, key, "missing translation key");
            None
        }
    }
}

/// Like [`lookup`], but an unknown key resolves to the key itself.
#[must_use]
pub fn lookup_or_key(lang: Lang, key: &str) -> String {
    lookup(lang, key).map_or_else(|| key.to_owned(), str::to_owned)
}

/// The full table row for `lang`, keyed by slot key.
#[must_use]
pub fn table(lang: Lang) -> BTreeMap<&'static str, &'static str> {
    Slot::ALL
        .into_iter()
        .map(|slot| (slot.key(), translate(lang, slot)))
        .collect()
}
