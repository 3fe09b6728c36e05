//! Axum route handlers for session lifecycle and preferences.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::language::Language;
use crate::models::profile::Profile;
use crate::session::{Session, Theme};
use crate::state::AppState;

/// Session overview returned by create and get. Counts stand in for the
/// collections themselves, which have their own endpoints.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub profile: Profile,
    pub language: Language,
    pub theme: Theme,
    pub loading_recommendations: bool,
    pub loading_skills: bool,
    pub chat_pending: bool,
    pub recommendation_count: usize,
    pub skill_suggestion_count: usize,
    pub message_count: usize,
}

async fn snapshot(session: &Session) -> SessionSnapshot {
    let prefs = session.prefs_snapshot().await;
    let guidance = session.guidance_snapshot().await;
    let chat = session.chat_snapshot().await;

    SessionSnapshot {
        id: session.id,
        created_at: session.created_at,
        profile: prefs.profile,
        language: prefs.language,
        theme: prefs.theme,
        loading_recommendations: guidance.loading_recommendations,
        loading_skills: guidance.loading_skills,
        chat_pending: chat.pending,
        recommendation_count: guidance.recommendations.len(),
        skill_suggestion_count: guidance.skill_suggestions.len(),
        message_count: chat.messages.len(),
    }
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: Theme,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(snapshot(&session).await))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state.sessions.require(session_id).await?;
    Ok(Json(snapshot(&session).await))
}

/// PUT /api/v1/sessions/:id/profile
///
/// Replaces the profile and returns the normalized copy that was stored.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    let session = state.sessions.require(session_id).await?;
    Ok(Json(session.update_profile(profile).await))
}

/// PUT /api/v1/sessions/:id/language
pub async fn handle_set_language(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetLanguageRequest>,
) -> Result<StatusCode, AppError> {
    let session = state.sessions.require(session_id).await?;
    session.set_language(request.language).await;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetThemeRequest>,
) -> Result<StatusCode, AppError> {
    let session = state.sessions.require(session_id).await?;
    session.set_theme(request.theme).await;
    Ok(StatusCode::NO_CONTENT)
}
