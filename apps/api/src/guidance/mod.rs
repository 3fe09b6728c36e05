// Guidance pipeline: career recommendations plus the chained skill-gap
// pass. All model calls go through llm_client, never the Gemini API
// directly.

pub mod builder;
pub mod handlers;
pub mod orchestrator;
pub mod parser;
pub mod prompts;
pub mod ranking;
