//! Mentor chat turns.
//!
//! A turn appends the user message under the transcript lock, calls the
//! model with the history that preceded it, and appends exactly one model
//! reply even when the call fails. The transcript therefore never loses a
//! message and `pending` never sticks.

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{ModelClient, RequestSpec, Turn};
use crate::mentor::prompts::{
    APOLOGY_TEXT, GREETING_TEMPLATE, PERSONA_TEMPLATE, THINKING_PLACEHOLDER,
};
use crate::models::chat::ChatMessage;
use crate::models::language::Language;
use crate::models::profile::Profile;
use crate::session::Session;

/// Greeting for a fresh transcript, personalized when a name is set.
pub fn greeting_text(profile: &Profile) -> String {
    let name = if profile.name.is_empty() {
        "there"
    } else {
        profile.name.as_str()
    };
    GREETING_TEMPLATE.replace("{name}", name)
}

/// Builds the request for one mentor turn: persona as system instruction,
/// transcript roles preserved, and the new message as the final user
/// content.
pub fn chat_request(
    history: &[ChatMessage],
    message: &str,
    profile: &Profile,
    language: Language,
) -> RequestSpec {
    let profile_json = serde_json::to_string(profile).unwrap_or_default();
    let system_instruction = PERSONA_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{language}", language.as_str());

    RequestSpec {
        instruction_text: message.to_string(),
        output_language: language,
        system_instruction: Some(system_instruction),
        response_schema: None,
        prior_turns: history
            .iter()
            .map(|msg| Turn {
                role: msg.role,
                text: msg.text.clone(),
            })
            .collect(),
    }
}

/// Maps raw model text onto the reply stored in the transcript.
pub fn parse_chat_reply(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        THINKING_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

/// Runs one full mentor turn. Returns every message this turn appended to
/// the transcript, greeting included when it seeded one.
pub async fn send_message(
    session: &Session,
    model: &dyn ModelClient,
    text: &str,
) -> Result<Vec<ChatMessage>, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation(
            "Message text cannot be empty.".to_string(),
        ));
    }

    let prefs = session.prefs_snapshot().await;
    let greeting = greeting_text(&prefs.profile);
    let (history, mut appended) = session.begin_chat_turn(&greeting, text).await;

    let spec = chat_request(&history, text, &prefs.profile, prefs.language);
    let reply_text = match model.call(&spec).await {
        Ok(reply) => parse_chat_reply(&reply),
        Err(e) => {
            warn!("Mentor call failed for session {}: {e}", session.id);
            APOLOGY_TEXT.to_string()
        }
    };

    let reply = session.finish_chat_turn(reply_text).await;
    appended.push(reply);
    Ok(appended)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::chat::ChatRole;

    /// Returns one fixed reply (or a failure), recording every request.
    struct OneShotModel {
        reply: Option<String>,
        calls: Mutex<Vec<RequestSpec>>,
    }

    impl OneShotModel {
        fn replying(text: &str) -> Self {
            OneShotModel {
                reply: Some(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            OneShotModel {
                reply: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelClient for OneShotModel {
        async fn call(&self, spec: &RequestSpec) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(spec.clone());
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn named_profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_greeting_uses_profile_name() {
        assert_eq!(
            greeting_text(&named_profile("Asha")),
            "Namaste Asha! How can I help you navigate your career journey today?"
        );
    }

    #[test]
    fn test_greeting_falls_back_when_name_is_blank() {
        assert_eq!(
            greeting_text(&Profile::default()),
            "Namaste there! How can I help you navigate your career journey today?"
        );
    }

    #[test]
    fn test_chat_request_carries_history_and_persona() {
        let history = vec![
            ChatMessage::model("Namaste Asha!"),
            ChatMessage::user("hi"),
            ChatMessage::model("hello"),
        ];
        let spec = chat_request(&history, "what next?", &named_profile("Asha"), Language::Hindi);

        assert_eq!(spec.instruction_text, "what next?");
        assert_eq!(spec.prior_turns.len(), 3);
        assert_eq!(spec.prior_turns[0].role, ChatRole::Model);
        assert_eq!(spec.prior_turns[1].role, ChatRole::User);
        assert_eq!(spec.prior_turns[1].text, "hi");
        assert!(spec.response_schema.is_none());

        let persona = spec.system_instruction.unwrap();
        assert!(persona.contains("'PathWeaver Bot'"));
        assert!(persona.contains(r#""name":"Asha""#));
        assert!(persona.contains("Reply in Hindi."));
    }

    #[test]
    fn test_chat_request_keeps_adjacent_user_turns_separate() {
        let history = vec![ChatMessage::user("hi")];
        let spec = chat_request(&history, "hello", &Profile::default(), Language::English);

        assert_eq!(
            spec.prior_turns,
            vec![Turn {
                role: ChatRole::User,
                text: "hi".to_string(),
            }]
        );
        assert_eq!(spec.instruction_text, "hello");
    }

    #[test]
    fn test_parse_chat_reply_trims_and_fills_empty() {
        assert_eq!(parse_chat_reply("  sound advice  "), "sound advice");
        assert_eq!(parse_chat_reply(""), THINKING_PLACEHOLDER);
        assert_eq!(parse_chat_reply("   \n"), THINKING_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_send_message_rejects_blank_text() {
        let session = Session::new();
        let model = OneShotModel::replying("unused");

        let result = send_message(&session, &model, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(model.calls.lock().unwrap().is_empty());

        let chat = session.chat_snapshot().await;
        assert!(chat.messages.is_empty());
        assert!(!chat.pending);
    }

    #[tokio::test]
    async fn test_first_turn_appends_greeting_user_and_reply() {
        let session = Session::new();
        session.update_profile(named_profile("Asha")).await;
        let model = OneShotModel::replying("Consider data science.");

        let appended = send_message(&session, &model, "what should I learn?")
            .await
            .unwrap();

        assert_eq!(appended.len(), 3);
        assert_eq!(appended[0].role, ChatRole::Model);
        assert!(appended[0].text.starts_with("Namaste Asha!"));
        assert_eq!(appended[1].role, ChatRole::User);
        assert_eq!(appended[2].text, "Consider data science.");

        // The model saw the greeting as history, not the new message.
        let specs = model.calls.lock().unwrap();
        assert_eq!(specs[0].prior_turns.len(), 1);
        assert_eq!(specs[0].prior_turns[0].role, ChatRole::Model);
        assert_eq!(specs[0].instruction_text, "what should I learn?");

        let chat = session.chat_snapshot().await;
        assert_eq!(chat.messages.len(), 3);
        assert!(!chat.pending);
    }

    #[tokio::test]
    async fn test_failed_call_appends_apology_and_clears_pending() {
        let session = Session::new();
        let model = OneShotModel::failing();

        let appended = send_message(&session, &model, "hello?").await.unwrap();
        assert_eq!(appended.last().unwrap().text, APOLOGY_TEXT);
        assert_eq!(appended.last().unwrap().role, ChatRole::Model);

        let chat = session.chat_snapshot().await;
        assert_eq!(chat.messages.len(), 3);
        assert!(!chat.pending);
    }

    #[tokio::test]
    async fn test_failure_after_greeting_appends_exactly_two_messages() {
        let session = Session::new();
        session
            .ensure_greeting(&greeting_text(&Profile::default()))
            .await;
        let model = OneShotModel::failing();

        let appended = send_message(&session, &model, "hello?").await.unwrap();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].role, ChatRole::User);
        assert_eq!(appended[0].text, "hello?");
        assert_eq!(appended[1].role, ChatRole::Model);
        assert_eq!(appended[1].text, APOLOGY_TEXT);
    }

    #[tokio::test]
    async fn test_empty_reply_becomes_thinking_placeholder() {
        let session = Session::new();
        let model = OneShotModel::replying("");

        let appended = send_message(&session, &model, "anyone there?").await.unwrap();
        assert_eq!(appended.last().unwrap().text, THINKING_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_transcript_round_trip_preserves_turn_order() {
        let session = Session::new();

        let first = OneShotModel::replying("Consider data science.");
        send_message(&session, &first, "what should I learn?")
            .await
            .unwrap();
        let second = OneShotModel::replying("Start with Python.");
        send_message(&session, &second, "where do I start?")
            .await
            .unwrap();

        let chat = session.chat_snapshot().await;
        let wire: Vec<serde_json::Value> = chat
            .messages
            .iter()
            .map(|m| serde_json::json!({ "role": m.role, "text": m.text }))
            .collect();
        assert_eq!(
            wire,
            vec![
                serde_json::json!({
                    "role": "model",
                    "text": "Namaste there! How can I help you navigate your career journey today?"
                }),
                serde_json::json!({ "role": "user", "text": "what should I learn?" }),
                serde_json::json!({ "role": "model", "text": "Consider data science." }),
                serde_json::json!({ "role": "user", "text": "where do I start?" }),
                serde_json::json!({ "role": "model", "text": "Start with Python." }),
            ]
        );

        // The second turn replayed the first three messages as history.
        let specs = second.calls.lock().unwrap();
        assert_eq!(specs[0].prior_turns.len(), 3);
        assert_eq!(specs[0].prior_turns[2].text, "Consider data science.");
        assert_eq!(specs[0].instruction_text, "where do I start?");
    }
}
