// Mentor chat: a persona-driven multi-turn conversation grounded in the
// session profile. Model calls go through llm_client like everything else.

pub mod chat;
pub mod handlers;
pub mod prompts;
