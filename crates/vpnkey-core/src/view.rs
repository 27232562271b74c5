//! Install flows and the step renderer.
//!
//! A [`Tab`] names one install flow. Its steps are a static list of
//! [`Step`]s; [`render_steps`] stamps them with the strings of one language.
//! Rendering attaches no behaviour. Copy buttons carry `data-copy` and are
//! served by a single listener bound on the document root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::html::escape;
use crate::i18n::{Lang, Slot, translate};

/// The install flow shown under the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Hiddify, the default.
    #[default]
    Hiddify,
    /// Clash Verge.
    Clash,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 2] = [Self::Hiddify, Self::Clash];

    /// Stable id written to `data-tab` and query strings.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hiddify => "hiddify",
            Self::Clash => "clash",
        }
    }

    /// Slot holding the tab's label.
    #[must_use]
    pub const fn label(self) -> Slot {
        match self {
            Self::Hiddify => Slot::Hiddify,
            Self::Clash => Slot::Clash,
        }
    }

    /// Where the client's installers are published.
    #[must_use]
    pub const fn download_url(self) -> &'static str {
        match self {
            Self::Hiddify => "https://github.com/hiddify/hiddify-app/releases/latest",
            Self::Clash => "https://github.com/clash-verge-rev/clash-verge-rev/releases/latest",
        }
    }

    /// The step sequence for this flow.
    #[must_use]
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Self::Hiddify => HIDDIFY_STEPS,
            Self::Clash => CLASH_STEPS,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hiddify" => Ok(Self::Hiddify),
            "clash" => Ok(Self::Clash),
            _ => Err(ParseError::UnknownTab { id: s.to_owned() }),
        }
    }
}

/// Device kind offered in the device select.
///
/// The selection is kept and round-tripped but does not change the steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Desktop or laptop, the default.
    #[default]
    Pc,
    /// Phone or tablet.
    Phone,
}

impl Device {
    /// All devices in display order.
    pub const ALL: [Self; 2] = [Self::Pc, Self::Phone];

    /// Stable id written to `<option value>` and query strings.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Phone => "phone",
        }
    }

    /// Slot holding the option's label.
    #[must_use]
    pub const fn label(self) -> Slot {
        match self {
            Self::Pc => Slot::DevicePc,
            Self::Phone => Slot::DevicePhone,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Device {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pc" => Ok(Self::Pc),
            "phone" => Ok(Self::Phone),
            _ => Err(ParseError::UnknownDevice { id: s.to_owned() }),
        }
    }
}

/// Icon drawn in front of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    /// Down arrow, on download steps.
    Download,
    /// Circled "i", on informational steps.
    Info,
    /// Plus sign, on steps that add the subscription.
    Plus,
    /// Check mark, on the final step.
    Check,
}

impl StepIcon {
    const fn class(self) -> &'static str {
        match self {
            Self::Download => "step-download",
            Self::Info => "step-info",
            Self::Plus => "step-plus",
            Self::Check => "step-check",
        }
    }

    const fn svg(self) -> &'static str {
        match self {
            Self::Download => ICON_DOWNLOAD,
            Self::Info => ICON_INFO,
            Self::Plus => ICON_PLUS,
            Self::Check => ICON_CHECK,
        }
    }
}

/// One instructional step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Icon in the step's left column.
    pub icon: StepIcon,
    /// Tooltip on the icon. `None` means the fixed "Info" tooltip.
    pub tooltip: Option<Slot>,
    /// Heading of the step.
    pub title: Slot,
    /// Body text under the heading.
    pub desc: Slot,
    /// Show the Windows/macOS/Linux download buttons.
    pub os_buttons: bool,
    /// A button that copies the access key, labelled by this slot.
    pub copy_button: Option<Slot>,
}

const HIDDIFY_STEPS: &[Step] = &[
    Step {
        icon: StepIcon::Download,
        tooltip: Some(Slot::DownloadHiddify),
        title: Slot::DownloadHiddify,
        desc: Slot::DownloadHiddifyDesc,
        os_buttons: true,
        copy_button: None,
    },
    Step {
        icon: StepIcon::Info,
        tooltip: None,
        title: Slot::ServerSwitch,
        desc: Slot::ServerSwitchDesc,
        os_buttons: false,
        copy_button: None,
    },
    Step {
        icon: StepIcon::Plus,
        tooltip: Some(Slot::AddSub),
        title: Slot::AddSub,
        desc: Slot::AddSubDesc,
        os_buttons: false,
        copy_button: Some(Slot::AddSubBtn),
    },
    Step {
        icon: StepIcon::Check,
        tooltip: Some(Slot::Ready),
        title: Slot::Ready,
        desc: Slot::ReadyDesc,
        os_buttons: false,
        copy_button: None,
    },
];

const CLASH_STEPS: &[Step] = &[
    Step {
        icon: StepIcon::Download,
        tooltip: Some(Slot::DownloadClash),
        title: Slot::DownloadClash,
        desc: Slot::DownloadClashDesc,
        os_buttons: true,
        copy_button: None,
    },
    Step {
        icon: StepIcon::Plus,
        tooltip: Some(Slot::ImportConfig),
        title: Slot::ImportConfig,
        desc: Slot::ImportConfigDesc,
        os_buttons: false,
        copy_button: Some(Slot::CopyLink),
    },
    Step {
        icon: StepIcon::Check,
        tooltip: Some(Slot::Ready),
        title: Slot::Ready,
        desc: Slot::ReadyClashDesc,
        os_buttons: false,
        copy_button: None,
    },
];

/// Operating systems offered on download steps: (css class, tooltip, label slot).
const OS_BUTTONS: [(&str, &str, Slot); 3] = [
    ("win", "Windows", Slot::Windows),
    ("mac", "macOS", Slot::Macos),
    ("lin", "Linux", Slot::Linux),
];

/// Render the `data-i18n` tagged element `<tag class=..>text</tag>`.
pub(crate) fn slot_element(tag: &str, class: &str, lang: Lang, slot: Slot) -> String {
    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{class}\"")
    };
    format!(
        "<{tag}{class_attr} data-i18n=\"{key}\">{text}</{tag}>",
        key = slot.key(),
        text = escape(translate(lang, slot)),
    )
}

/// Render a copy button resting on `label`.
pub(crate) fn copy_button(class: &str, lang: Lang, label: Slot) -> String {
    format!(
        "<button type=\"button\" class=\"{class}\" data-copy data-i18n=\"{key}\">{text}</button>",
        key = label.key(),
        text = escape(translate(lang, label)),
    )
}

/// Render the step sequence of `tab` in `lang`.
///
/// The output is the inner markup of the `.steps-vertical` container.
#[must_use]
pub fn render_steps(lang: Lang, tab: Tab) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<div class=\"step-vert-line\"></div>\n");

    for step in tab.steps() {
        let tooltip = match step.tooltip {
            Some(slot) => format!(
                "data-tooltip=\"{}\" data-i18n-tooltip=\"{}\"",
                escape(translate(lang, slot)),
                slot.key()
            ),
            None => "data-tooltip=\"Info\"".to_owned(),
        };
        html.push_str("<div class=\"step-row\">\n");
        html.push_str(&format!(
            "  <span class=\"step-icon {class}\" {tooltip}>{svg}</span>\n",
            class = step.icon.class(),
            svg = step.icon.svg(),
        ));
        html.push_str("  <div class=\"step-content\">\n");
        html.push_str(&format!(
            "    {}\n",
            slot_element("div", "step-title", lang, step.title)
        ));
        html.push_str(&format!(
            "    {}\n",
            slot_element("div", "step-desc", lang, step.desc)
        ));

        if step.os_buttons {
            html.push_str("    <div class=\"os-btns\">\n");
            for (os_class, os_tooltip, label) in OS_BUTTONS {
                html.push_str(&format!(
                    "      <a href=\"{url}\" class=\"os-btn\" target=\"_blank\" rel=\"noopener\">\
                     <span class=\"os-ico {os_class}\" data-tooltip=\"{os_tooltip}\"></span>{label}</a>\n",
                    url = tab.download_url(),
                    label = slot_element("span", "", lang, label),
                ));
            }
            html.push_str("    </div>\n");
        }

        if let Some(label) = step.copy_button {
            html.push_str(&format!(
                "    {}\n",
                copy_button("add-sub-btn", lang, label)
            ));
        }

        html.push_str("  </div>\n</div>\n");
    }

    html
}

const ICON_DOWNLOAD: &str = r##"<svg width="24" height="24" fill="none"><circle cx="12" cy="12" r="12" fill="#00c6fb"/><path d="M12 7v7m0 0l-3-3m3 3l3-3" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;
const ICON_INFO: &str = r##"<svg width="24" height="24" fill="none"><circle cx="12" cy="12" r="12" fill="#00c6fb"/><text x="12" y="16" text-anchor="middle" font-size="14" fill="#fff" font-family="Arial" font-weight="bold">i</text></svg>"##;
const ICON_PLUS: &str = r##"<svg width="24" height="24" fill="none"><circle cx="12" cy="12" r="12" fill="#00c6fb"/><path d="M12 8v8M8 12h8" stroke="#fff" stroke-width="2" stroke-linecap="round"/></svg>"##;
const ICON_CHECK: &str = r##"<svg width="24" height="24" fill="none"><circle cx="12" cy="12" r="12" fill="#00c6fb"/><path d="M8 12.5l2.5 2.5 5-5" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;
