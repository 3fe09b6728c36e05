//! In-memory session store.
//!
//! A session splits its mutable state into three independently locked
//! slices (preferences, guidance, chat) so a slow generation cycle never
//! blocks profile edits or chat turns. Guidance writes are tag-checked:
//! every cycle gets a monotonically increasing tag and commits carrying a
//! superseded tag are dropped without touching state. No method holds a
//! lock across an await.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::career::{CareerRecommendation, SkillSuggestion};
use crate::models::chat::ChatMessage;
use crate::models::language::Language;
use crate::models::profile::Profile;

/// UI theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Profile and UI preferences. Cloned out as a snapshot so prompt builders
/// never read under the lock.
#[derive(Debug, Clone, Default)]
pub struct Prefs {
    pub profile: Profile,
    pub language: Language,
    pub theme: Theme,
}

/// Recommendation pipeline state. `cycle` tags the generation in flight.
#[derive(Debug, Clone, Default)]
pub struct GuidanceState {
    pub recommendations: Vec<CareerRecommendation>,
    pub skill_suggestions: Vec<SkillSuggestion>,
    pub loading_recommendations: bool,
    pub loading_skills: bool,
    pub cycle: u64,
}

/// Mentor transcript plus the reply-in-flight flag.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl ChatState {
    fn seed_greeting(&mut self, greeting: &str) -> Option<ChatMessage> {
        if !self.messages.is_empty() {
            return None;
        }
        let message = ChatMessage::model(greeting);
        self.messages.push(message.clone());
        Some(message)
    }
}

/// One user's session.
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    prefs: RwLock<Prefs>,
    guidance: RwLock<GuidanceState>,
    chat: RwLock<ChatState>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            prefs: RwLock::new(Prefs::default()),
            guidance: RwLock::new(GuidanceState::default()),
            chat: RwLock::new(ChatState::default()),
        }
    }

    pub async fn prefs_snapshot(&self) -> Prefs {
        self.prefs.read().await.clone()
    }

    /// Stores a normalized copy of the profile and returns it.
    pub async fn update_profile(&self, profile: Profile) -> Profile {
        let profile = profile.normalized();
        self.prefs.write().await.profile = profile.clone();
        profile
    }

    pub async fn set_language(&self, language: Language) {
        self.prefs.write().await.language = language;
    }

    pub async fn set_theme(&self, theme: Theme) {
        self.prefs.write().await.theme = theme;
    }

    pub async fn guidance_snapshot(&self) -> GuidanceState {
        self.guidance.read().await.clone()
    }

    /// Starts a new generation cycle and returns its tag. Any cycle still
    /// in flight is superseded from this point on.
    pub async fn begin_cycle(&self) -> u64 {
        let mut guidance = self.guidance.write().await;
        guidance.cycle += 1;
        guidance.loading_recommendations = true;
        guidance.loading_skills = false;
        guidance.cycle
    }

    /// Commits career results for `cycle`. Returns false without touching
    /// state when a newer cycle has started.
    pub async fn commit_careers(
        &self,
        cycle: u64,
        recommendations: Vec<CareerRecommendation>,
    ) -> bool {
        let mut guidance = self.guidance.write().await;
        if guidance.cycle != cycle {
            return false;
        }
        guidance.recommendations = recommendations;
        // Suggestions from the previous cycle no longer match these careers.
        guidance.skill_suggestions.clear();
        guidance.loading_recommendations = false;
        true
    }

    /// Marks the skill phase of `cycle` as in flight. Returns false when
    /// the cycle is superseded.
    pub async fn begin_skill_phase(&self, cycle: u64) -> bool {
        let mut guidance = self.guidance.write().await;
        if guidance.cycle != cycle {
            return false;
        }
        guidance.loading_skills = true;
        true
    }

    /// Commits skill suggestions for `cycle`, subject to the same tag check
    /// as [`Session::commit_careers`].
    pub async fn commit_skills(&self, cycle: u64, suggestions: Vec<SkillSuggestion>) -> bool {
        let mut guidance = self.guidance.write().await;
        if guidance.cycle != cycle {
            return false;
        }
        guidance.skill_suggestions = suggestions;
        guidance.loading_skills = false;
        true
    }

    pub async fn chat_snapshot(&self) -> ChatState {
        self.chat.read().await.clone()
    }

    /// Seeds the greeting when the transcript is empty. Returns the message
    /// that was added, if any.
    pub async fn ensure_greeting(&self, greeting: &str) -> Option<ChatMessage> {
        let mut chat = self.chat.write().await;
        chat.seed_greeting(greeting)
    }

    /// Opens a chat turn under one write lock: seeds the greeting if the
    /// transcript is empty, snapshots the history preceding the new message,
    /// then appends the message and flags the reply as pending. Returns the
    /// history snapshot and the messages added so far this turn.
    pub async fn begin_chat_turn(
        &self,
        greeting: &str,
        user_text: &str,
    ) -> (Vec<ChatMessage>, Vec<ChatMessage>) {
        let mut chat = self.chat.write().await;
        let mut appended = Vec::new();
        if let Some(greeting) = chat.seed_greeting(greeting) {
            appended.push(greeting);
        }
        let history = chat.messages.clone();
        let message = ChatMessage::user(user_text);
        chat.messages.push(message.clone());
        appended.push(message);
        chat.pending = true;
        (history, appended)
    }

    /// Closes the turn opened by [`Session::begin_chat_turn`] with the
    /// mentor's reply.
    pub async fn finish_chat_turn(&self, reply_text: String) -> ChatMessage {
        let mut chat = self.chat.write().await;
        let message = ChatMessage::model(reply_text);
        chat.messages.push(message.clone());
        chat.pending = false;
        message
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Process-wide registry of live sessions. Entries live until shutdown;
/// there is no expiry.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Looks up a session or fails with the error handlers map to 404.
    pub async fn require(&self, id: Uuid) -> Result<Arc<Session>, AppError> {
        self.get(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}
