//! Axum route handlers for the mentor chat.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::mentor::chat::{greeting_text, send_message};
use crate::models::chat::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub appended: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

/// POST /api/v1/sessions/:id/chat
///
/// Runs one mentor turn and returns the messages it appended.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let session = state.sessions.require(session_id).await?;
    let appended = send_message(&session, state.model.as_ref(), &request.text).await?;
    Ok(Json(SendMessageResponse { appended }))
}

/// GET /api/v1/sessions/:id/chat
///
/// Returns the transcript, seeding the greeting on first read.
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let session = state.sessions.require(session_id).await?;
    let prefs = session.prefs_snapshot().await;
    session.ensure_greeting(&greeting_text(&prefs.profile)).await;

    let chat = session.chat_snapshot().await;
    Ok(Json(ChatHistoryResponse {
        messages: chat.messages,
        pending: chat.pending,
    }))
}
