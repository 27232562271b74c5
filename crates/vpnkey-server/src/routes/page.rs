//! Onboarding page routes.
//!
//! `/` is lenient: unknown `lang`, `tab` or `device` values render the
//! defaults, so a mangled link still shows the user their key. `/steps` is
//! for scripts and answers unknown query values with 400. Under `/i18n` the
//! language is a path segment, so an unknown one is 404.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;

use vpnkey_core::{Lang, PageQuery, PageState, Tab, i18n, render_page, render_steps};

use crate::error::AppError;
use crate::state::AppState;

/// Build the page router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing_page))
        .route("/steps", get(steps_fragment))
        .route("/i18n/{lang}", get(translations))
        .route("/i18n/{lang}/{key}", get(translation))
}

async fn landing_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let page = PageState::load(&query, &state.defaults);
    tracing::debug!(lang = %page.lang, tab = %page.tab, "rendering landing page");
    Ok(Html(render_page(&page, &state.assets)?))
}

#[derive(Deserialize)]
struct StepsParams {
    lang: Option<String>,
    tab: Option<String>,
}

async fn steps_fragment(Query(params): Query<StepsParams>) -> Result<Html<String>, AppError> {
    let lang: Lang = params
        .lang
        .as_deref()
        .map_or(Ok(Lang::default()), str::parse)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let tab: Tab = params
        .tab
        .as_deref()
        .map_or(Ok(Tab::default()), str::parse)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(Html(render_steps(lang, tab)))
}

async fn translations(
    Path(lang): Path<String>,
) -> Result<Json<BTreeMap<&'static str, &'static str>>, AppError> {
    let lang: Lang = lang.parse()?;
    Ok(Json(i18n::table(lang)))
}

async fn translation(Path((lang, key)): Path<(String, String)>) -> Result<String, AppError> {
    let lang: Lang = lang.parse()?;
    Ok(i18n::lookup_or_key(lang, &key))
}
