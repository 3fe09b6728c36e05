//! Decodes model output for the guidance pipeline.
//!
//! The schema holds the model to JSON, but the reply is still plain text:
//! fences are stripped, empty text decodes to an empty set, and anything
//! else that fails to decode is an error for the orchestrator to absorb.

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::llm_client::strip_json_fences;
use crate::models::career::{CareerRecommendation, SkillSuggestion};

#[derive(Debug, Error)]
#[error("Malformed model output: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Recommendation as the model emits it. The schema asks for `id`, but a
/// missing one is backfilled locally rather than failing the batch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    #[serde(default)]
    id: Option<String>,
    title: String,
    description: String,
    salary_range: String,
    match_score: f64,
    reason: String,
    market_outlook: String,
    required_skills: Vec<String>,
}

/// Decodes career phase output. Blank text is an empty set, not an error.
pub fn parse_recommendations(text: &str) -> Result<Vec<CareerRecommendation>, ParseError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let raw: Vec<RawRecommendation> = serde_json::from_str(text)?;
    Ok(raw
        .into_iter()
        .map(|r| CareerRecommendation {
            id: r.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: r.title,
            description: r.description,
            salary_range: r.salary_range,
            match_score: r.match_score,
            reason: r.reason,
            market_outlook: r.market_outlook,
            required_skills: r.required_skills,
        })
        .collect())
}

/// Decodes skill phase output. Blank text is an empty set, not an error.
pub fn parse_skill_suggestions(text: &str) -> Result<Vec<SkillSuggestion>, ParseError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(ParseError::from)
}
