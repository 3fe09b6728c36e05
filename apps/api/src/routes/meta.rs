//! Static metadata endpoints: service facts, form options, and UI string
//! tables the client renders before any session exists.

use std::collections::BTreeMap;

use axum::{extract::Path, Json};
use serde_json::{json, Value};

use crate::i18n::{self, TranslationKey, MOTIVATIONAL_QUOTES};
use crate::llm_client::MODEL;
use crate::models::language::Language;
use crate::models::profile::EducationLevel;

/// GET /api/v1/meta
pub async fn meta_handler() -> Json<Value> {
    Json(json!({
        "service": "pathweaver-api",
        "version": env!("CARGO_PKG_VERSION"),
        "model": MODEL,
        "languages": Language::ALL,
        "education_levels": EducationLevel::ALL,
        "quotes": MOTIVATIONAL_QUOTES,
    }))
}

/// GET /api/v1/i18n/:language
///
/// Full UI string table for one language, English-backfilled.
pub async fn i18n_handler(
    Path(language): Path<Language>,
) -> Json<BTreeMap<TranslationKey, &'static str>> {
    Json(i18n::string_table(language))
}
