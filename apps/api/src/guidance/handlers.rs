//! Axum route handlers for the guidance pipeline.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::guidance::orchestrator::{run_cycle, CycleReport};
use crate::guidance::ranking::{rank, SortKey};
use crate::models::career::{CareerRecommendation, SkillSuggestion};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(default)]
    pub sort: SortKey,
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<CareerRecommendation>,
    pub loading: bool,
    pub cycle: u64,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skill_suggestions: Vec<SkillSuggestion>,
    pub loading: bool,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub share_text: String,
}

/// POST /api/v1/sessions/:id/generate
///
/// Runs one full guidance cycle inline and returns its report. Concurrent
/// calls are safe; the newest cycle wins.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CycleReport>, AppError> {
    let session = state.sessions.require(session_id).await?;
    let report = run_cycle(&session, state.model.as_ref()).await?;
    Ok(Json(report))
}

/// GET /api/v1/sessions/:id/recommendations?sort=match|salary&filter=...
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = state.sessions.require(session_id).await?;
    let guidance = session.guidance_snapshot().await;
    let recommendations = rank(&guidance.recommendations, query.sort, query.filter.as_deref());

    Ok(Json(RecommendationsResponse {
        recommendations,
        loading: guidance.loading_recommendations,
        cycle: guidance.cycle,
    }))
}

/// GET /api/v1/sessions/:id/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SkillsResponse>, AppError> {
    let session = state.sessions.require(session_id).await?;
    let guidance = session.guidance_snapshot().await;

    Ok(Json(SkillsResponse {
        skill_suggestions: guidance.skill_suggestions,
        loading: guidance.loading_skills,
    }))
}

/// GET /api/v1/sessions/:id/recommendations/:career_id/share
///
/// Returns the share blurb for one stored recommendation.
pub async fn handle_share_recommendation(
    State(state): State<AppState>,
    Path((session_id, career_id)): Path<(Uuid, String)>,
) -> Result<Json<ShareResponse>, AppError> {
    let session = state.sessions.require(session_id).await?;
    let guidance = session.guidance_snapshot().await;
    let recommendation = guidance
        .recommendations
        .iter()
        .find(|rec| rec.id == career_id)
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {career_id} not found")))?;

    Ok(Json(ShareResponse {
        share_text: recommendation.share_text(),
    }))
}
