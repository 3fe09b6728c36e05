pub mod health;
pub mod meta;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::guidance::handlers as guidance;
use crate::mentor::handlers as mentor;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/meta", get(meta::meta_handler))
        .route("/api/v1/i18n/:language", get(meta::i18n_handler))
        // Session lifecycle and preferences
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", get(sessions::handle_get_session))
        .route(
            "/api/v1/sessions/:id/profile",
            put(sessions::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/language",
            put(sessions::handle_set_language),
        )
        .route(
            "/api/v1/sessions/:id/theme",
            put(sessions::handle_set_theme),
        )
        // Guidance pipeline
        .route(
            "/api/v1/sessions/:id/generate",
            post(guidance::handle_generate),
        )
        .route(
            "/api/v1/sessions/:id/recommendations",
            get(guidance::handle_get_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/recommendations/:career_id/share",
            get(guidance::handle_share_recommendation),
        )
        .route(
            "/api/v1/sessions/:id/skills",
            get(guidance::handle_get_skills),
        )
        // Mentor chat
        .route(
            "/api/v1/sessions/:id/chat",
            get(mentor::handle_get_chat).post(mentor::handle_send_message),
        )
        .with_state(state)
}
