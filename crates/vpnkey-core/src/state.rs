//! Page state and the events that change it.
//!
//! A [`PageState`] is rebuilt from the query string on every load and never
//! persisted. Loading starts from the defaults and applies one [`Event`] per
//! recognised query parameter, so a load and a sequence of clicks go through
//! the same transitions.

use serde::Deserialize;

use crate::i18n::Lang;
use crate::qr::QrCode;
use crate::view::{Device, Tab};

/// Access key shown when the query has none.
pub const DEFAULT_KEY: &str = "nit8e67o";
/// Expiration label shown when the query has none.
pub const DEFAULT_EXPIRES: &str = "4 дня";

/// Raw query parameters of a page load. Missing and empty values are equivalent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub key: Option<String>,
    pub expires: Option<String>,
    pub lang: Option<String>,
    pub tab: Option<String>,
    pub device: Option<String>,
}

/// Values substituted for missing `key` / `expires` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub key: String,
    pub expires: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_owned(),
            expires: DEFAULT_EXPIRES.to_owned(),
        }
    }
}

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The language button: flip to the other language.
    ToggleLang,
    SetLang(Lang),
    SelectTab(Tab),
    SelectDevice(Device),
}

/// Everything the page renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub lang: Lang,
    pub tab: Tab,
    pub device: Device,
    /// Displayed verbatim, never validated.
    pub key: String,
    /// Displayed verbatim, never parsed.
    pub expires: String,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl PageState {
    /// Initial state with the given defaults.
    #[must_use]
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            lang: Lang::default(),
            tab: Tab::default(),
            device: Device::default(),
            key: defaults.key.clone(),
            expires: defaults.expires.clone(),
        }
    }

    /// Derive the state of a page load.
    ///
    /// Unrecognised `lang`, `tab` or `device` values are ignored and the
    /// default is kept.
    #[must_use]
    pub fn load(query: &PageQuery, defaults: &Defaults) -> Self {
        let mut state = Self::new(defaults);

        if let Some(key) = non_empty(query.key.as_ref()) {
            key.clone_into(&mut state.key);
        }
        if let Some(expires) = non_empty(query.expires.as_ref()) {
            expires.clone_into(&mut state.expires);
        }

        let events = [
            non_empty(query.lang.as_ref()).map(|v| v.parse().map(Event::SetLang)),
            non_empty(query.tab.as_ref()).map(|v| v.parse().map(Event::SelectTab)),
            non_empty(query.device.as_ref()).map(|v| v.parse().map(Event::SelectDevice)),
        ];
        for event in events.into_iter().flatten() {
            match event {
                Ok(event) => state.apply(event),
                Err(e) => tracing::debug!(error = %e, "ignoring query parameter"),
            }
        }

        state
    }

    /// Apply one event.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ToggleLang => self.lang = self.lang.toggle(),
            Event::SetLang(lang) => self.lang = lang,
            Event::SelectTab(tab) => self.tab = tab,
            Event::SelectDevice(device) => self.device = device,
        }
    }

    /// A copy of this state with `event` applied.
    #[must_use]
    pub fn after(&self, event: Event) -> Self {
        let mut next = self.clone();
        next.apply(event);
        next
    }

    /// Query string (with leading `?`) that reloads exactly this state.
    #[must_use]
    pub fn query_string(&self) -> String {
        format!(
            "?key={}&expires={}&lang={}&tab={}&device={}",
            urlencoding::encode(&self.key),
            urlencoding::encode(&self.expires),
            self.lang,
            self.tab,
            self.device,
        )
    }

    /// QR code for the access key.
    #[must_use]
    pub fn qr(&self) -> QrCode {
        QrCode::for_key(&self.key)
    }
}
