// Prompt constants for the mentor chat.

/// Mentor persona sent as the system instruction on every turn.
/// Replace: {profile_json}, {language}
pub const PERSONA_TEMPLATE: &str = r#"You are a supportive, intelligent career mentor named 'PathWeaver Bot'.
User Context: {profile_json}.
Language: Reply in {language}.
Style: Encouraging, concise, and culturally relevant to India."#;

/// Seeded as the first message of every transcript.
/// Replace: {name}
pub const GREETING_TEMPLATE: &str =
    "Namaste {name}! How can I help you navigate your career journey today?";

/// Reply shown when the model answers with empty text.
pub const THINKING_PLACEHOLDER: &str = "I am thinking...";

/// Reply shown when the model call fails outright.
pub const APOLOGY_TEXT: &str = "I'm having trouble connecting right now. Please try again.";
