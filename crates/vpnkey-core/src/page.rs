//! Full-page renderer.
//!
//! [`render_page`] is a pure function of a [`PageState`]. Tab and language
//! controls are plain links to the follow-up state, so the page still works
//! with scripting disabled. The embedded script upgrades them in place using
//! the `<template>` copies of each flow and the translation table shipped as
//! JSON.

use serde_json::json;

use crate::assets::{PAGE_CSS, PAGE_JS, QRIOUS_CDN_URL};
use crate::error::RenderError;
use crate::html::escape;
use crate::i18n::{self, Lang, Slot, translate};
use crate::state::{Event, PageState};
use crate::view::{Device, Tab, copy_button, render_steps, slot_element};

/// External resources referenced by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssets {
    /// Script URL of the QRious helper.
    pub qr_script_url: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            qr_script_url: QRIOUS_CDN_URL.to_owned(),
        }
    }
}

/// Data the browser script needs, as a `<script type="application/json">` body.
fn client_data() -> Result<String, RenderError> {
    let table: serde_json::Map<String, serde_json::Value> = Lang::ALL
        .into_iter()
        .map(|lang| (lang.code().to_owned(), json!(i18n::table(lang))))
        .collect();
    let indicator: serde_json::Map<String, serde_json::Value> = Lang::ALL
        .into_iter()
        .map(|lang| {
            (
                lang.code().to_owned(),
                json!({ "label": lang.label(), "flag": lang.flag() }),
            )
        })
        .collect();
    let data = json!({
        "fallback": Lang::default().code(),
        "langs": Lang::ALL.map(Lang::code),
        "table": table,
        "indicator": indicator,
    });
    // `</script>` inside a string must not close the element.
    Ok(serde_json::to_string(&data)?.replace("</", "<\\/"))
}

fn lang_button(state: &PageState) -> String {
    format!(
        "<a class=\"lang-btn\" data-nav href=\"{href}\"><span class=\"lang-flag\">{flag}</span>\
         <span class=\"lang-txt\">{label}</span></a>",
        href = escape(&state.after(Event::ToggleLang).query_string()),
        flag = state.lang.flag(),
        label = state.lang.label(),
    )
}

fn subscription_card(state: &PageState) -> Result<String, RenderError> {
    let lang = state.lang;
    Ok(format!(
        r#"<section class="card sub-card">
  <div class="sub-head">{title}</div>
  <div class="sub-body">
    {canvas}
    <div class="sub-info">
      <code id="vpn-key" class="vpn-key">{key}</code>
      <div class="sub-expires">{expires_label} <span id="expires-in">{expires}</span></div>
      {link}
    </div>
  </div>
</section>
"#,
        title = slot_element("span", "", lang, Slot::Subscription),
        canvas = state.qr().canvas()?,
        key = escape(&state.key),
        expires_label = slot_element("span", "", lang, Slot::Expires),
        expires = escape(&state.expires),
        link = copy_button("sub-link-btn", lang, Slot::GetLink),
    ))
}

fn device_select(state: &PageState) -> String {
    let mut html = String::from("<select class=\"device-select\" name=\"device\">");
    for device in Device::ALL {
        let selected = if device == state.device { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{id}\" data-i18n=\"{key}\"{selected}>{text}</option>",
            id = device.id(),
            key = device.label().key(),
            text = escape(translate(state.lang, device.label())),
        ));
    }
    html.push_str("</select>");
    html
}

fn tab_bar(state: &PageState) -> String {
    let mut html = String::from("<nav class=\"install-tabs\" role=\"tablist\">\n");
    for tab in Tab::ALL {
        let active = tab == state.tab;
        html.push_str(&format!(
            "  <a class=\"install-tab{class}\" role=\"tab\" aria-selected=\"{active}\" data-tab=\"{id}\" data-nav href=\"{href}\">{label}</a>\n",
            class = if active { " active" } else { "" },
            id = tab.id(),
            href = escape(&state.after(Event::SelectTab(tab)).query_string()),
            label = slot_element("span", "", state.lang, tab.label()),
        ));
    }
    html.push_str("</nav>\n");
    html
}

fn step_templates(lang: Lang) -> String {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            format!(
                "<template data-steps=\"{id}\">{steps}</template>\n",
                id = tab.id(),
                steps = render_steps(lang, tab),
            )
        })
        .collect()
}

/// Render the complete document for `state`.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if embedded JSON fails to serialize.
pub fn render_page(state: &PageState, assets: &PageAssets) -> Result<String, RenderError> {
    let lang = state.lang;
    let mut html = String::with_capacity(32768);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{code}\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\
         {title}\n<style>{PAGE_CSS}</style></head>\n<body>\n<main class=\"page\">\n",
        code = lang.code(),
        title = slot_element("title", "", lang, Slot::Subscription),
    ));
    html.push_str(&format!(
        "<header class=\"topbar\">{}</header>\n",
        lang_button(state)
    ));
    html.push_str(&subscription_card(state)?);

    html.push_str("<section class=\"card install\">\n");
    html.push_str(&format!(
        "<div class=\"install-head\">{}{}</div>\n",
        slot_element("h2", "", lang, Slot::Install),
        device_select(state),
    ));
    html.push_str(&tab_bar(state));
    html.push_str(&format!(
        "<div class=\"steps-vertical\" data-active-tab=\"{id}\">\n{steps}</div>\n",
        id = state.tab.id(),
        steps = render_steps(lang, state.tab),
    ));
    html.push_str("</section>\n</main>\n");

    html.push_str(&step_templates(lang));
    html.push_str(&format!(
        "<script type=\"application/json\" id=\"i18n-table\">{}</script>\n",
        client_data()?
    ));
    html.push_str(&format!(
        "<script src=\"{}\"></script>\n",
        escape(&assets.qr_script_url)
    ));
    html.push_str(&format!("<script>{PAGE_JS}</script>\n</body></html>\n"));

    Ok(html)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::state::{Defaults, PageQuery};

    fn page(state: &PageState) -> String {
        render_page(state, &PageAssets::default()).unwrap()
    }

    /// The visible document, without the inert `<template>` copies and scripts.
    fn visible(html: &str) -> &str {
        let end = html.find("<template").unwrap();
        &html[..end]
    }

    fn loaded(pairs: PageQuery) -> PageState {
        PageState::load(&pairs, &Defaults::default())
    }

    #[test]
    fn defaults_are_displayed() {
        let html = page(&loaded(PageQuery::default()));
        assert!(html.contains("<code id=\"vpn-key\" class=\"vpn-key\">nit8e67o</code>"));
        assert!(html.contains("<span id=\"expires-in\">4 дня</span>"));
        assert!(html.contains("<html lang=\"ru\">"));
    }

    #[test]
    fn query_key_and_expires_are_displayed() {
        let state = loaded(PageQuery {
            key: Some("abc123".to_owned()),
            expires: Some("7 days".to_owned()),
            ..PageQuery::default()
        });
        let html = page(&state);
        assert!(html.contains(">abc123</code>"));
        assert!(html.contains("<span id=\"expires-in\">7 days</span>"));
        assert!(html.contains("&quot;value&quot;:&quot;abc123&quot;"));
    }

    #[test]
    fn key_is_escaped() {
        let state = loaded(PageQuery {
            key: Some("<script>".to_owned()),
            ..PageQuery::default()
        });
        let html = page(&state);
        assert!(html.contains(">&lt;script&gt;</code>"));
    }

    #[test]
    fn every_visible_slot_matches_the_table() {
        for lang in Lang::ALL {
            for tab in Tab::ALL {
                let mut state = PageState::new(&Defaults::default());
                state.apply(Event::SetLang(lang));
                state.apply(Event::SelectTab(tab));
                let html = page(&state);
                let visible = visible(&html);
                let mut rest = visible;
                let mut seen = 0;
                while let Some(pos) = rest.find("data-i18n=\"") {
                    rest = &rest[pos + "data-i18n=\"".len()..];
                    let key_end = rest.find('"').unwrap();
                    let key = &rest[..key_end];
                    let text_start = rest.find('>').unwrap() + 1;
                    let text_end = text_start + rest[text_start..].find('<').unwrap();
                    let slot = Slot::from_key(key).unwrap();
                    assert_eq!(
                        &rest[text_start..text_end],
                        escape(translate(lang, slot)),
                        "{lang}/{tab}: {key}"
                    );
                    seen += 1;
                }
                assert!(seen > 10, "{lang}/{tab}: only {seen} slots");
            }
        }
    }

    #[test]
    fn exactly_one_tab_is_active() {
        for tab in Tab::ALL {
            let mut state = PageState::new(&Defaults::default());
            state.apply(Event::SelectTab(tab));
            let html = page(&state);
            assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
            assert!(html.contains(&format!(
                "class=\"install-tab active\" role=\"tab\" aria-selected=\"true\" data-tab=\"{}\"",
                tab.id()
            )));
            assert!(html.contains(&format!("data-active-tab=\"{}\"", tab.id())));
        }
    }

    #[test]
    fn visible_steps_belong_to_active_tab_only() {
        let mut state = PageState::new(&Defaults::default());
        state.apply(Event::SelectTab(Tab::Clash));
        let html = page(&state);
        let visible = visible(&html);
        assert_eq!(visible.matches("class=\"step-row\"").count(), 3);
        assert!(!visible.contains("downloadHiddify"));
        assert!(visible.contains("downloadClash"));
    }

    #[test]
    fn tab_then_toggle_keeps_tab_in_new_language() {
        let mut state = PageState::new(&Defaults::default());
        state.apply(Event::SelectTab(Tab::Clash));
        state.apply(Event::ToggleLang);
        let html = page(&state);
        let visible = visible(&html);
        assert!(visible.contains("Download Clash Verge"));
        assert!(!visible.contains("Скачайте"));
        assert!(!visible.contains("Download Hiddify"));
    }

    #[test]
    fn document_title_is_tagged_for_retranslation() {
        let html = page(&PageState::new(&Defaults::default()));
        assert!(html.contains("<title data-i18n=\"subscription\">Подписка</title>"));

        let en = PageState::new(&Defaults::default()).after(Event::SetLang(Lang::En));
        assert!(page(&en).contains("<title data-i18n=\"subscription\">Subscription</title>"));
    }

    #[test]
    fn toggling_twice_renders_identical_page() {
        let state = loaded(PageQuery {
            tab: Some("clash".to_owned()),
            ..PageQuery::default()
        });
        let back = state.after(Event::ToggleLang).after(Event::ToggleLang);
        assert_eq!(page(&state), page(&back));
    }

    #[test]
    fn language_button_links_to_other_language() {
        let html = page(&PageState::new(&Defaults::default()));
        assert!(html.contains("<span class=\"lang-flag\">🇷🇺</span><span class=\"lang-txt\">Русский</span>"));
        assert!(html.contains("class=\"lang-btn\" data-nav href=\"?key=nit8e67o&amp;expires=4%20%D0%B4%D0%BD%D1%8F&amp;lang=en&amp;tab=hiddify&amp;device=pc\""));
    }

    #[test]
    fn templates_cover_both_flows() {
        let html = page(&PageState::new(&Defaults::default()));
        assert!(html.contains("<template data-steps=\"hiddify\">"));
        assert!(html.contains("<template data-steps=\"clash\">"));
    }

    #[test]
    fn client_data_ships_both_languages() {
        let data: serde_json::Value = serde_json::from_str(&client_data().unwrap()).unwrap();
        assert_eq!(data["fallback"], "ru");
        assert_eq!(data["table"]["en"]["copied"], "Copied!");
        assert_eq!(data["table"]["ru"]["copyFailed"], "Не удалось скопировать");
        assert_eq!(data["indicator"]["en"]["flag"], "🇬🇧");
    }

    #[test]
    fn device_selection_is_marked() {
        let state = loaded(PageQuery {
            device: Some("phone".to_owned()),
            ..PageQuery::default()
        });
        let html = page(&state);
        assert!(html.contains("<option value=\"phone\" data-i18n=\"devicePhone\" selected>Телефон</option>"));
        assert!(html.contains("<option value=\"pc\" data-i18n=\"devicePC\">ПК</option>"));
    }

    #[test]
    fn qr_script_url_is_configurable() {
        let assets = PageAssets {
            qr_script_url: "/static/qrious.js".to_owned(),
        };
        let html = render_page(&PageState::new(&Defaults::default()), &assets).unwrap();
        assert!(html.contains("<script src=\"/static/qrious.js\"></script>"));
    }
}
