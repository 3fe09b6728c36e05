//! Assembles model requests for the guidance pipeline.
//!
//! Prompts embed the profile snapshot by placeholder replacement, and both
//! phases carry a response schema holding the model to JSON output.

use crate::guidance::prompts::{CAREER_PROMPT_TEMPLATE, SKILL_GAP_PROMPT_TEMPLATE};
use crate::llm_client::schema::Schema;
use crate::llm_client::RequestSpec;
use crate::models::career::CareerRecommendation;
use crate::models::language::Language;
use crate::models::profile::Profile;

/// Location sent when the profile leaves it blank.
const DEFAULT_LOCATION: &str = "Anywhere in India";

/// Career phase schema: an array of recommendation objects with every
/// field required, id included.
fn recommendation_schema() -> Schema {
    Schema::array(
        Schema::object(vec![
            ("id", Schema::string()),
            ("title", Schema::string()),
            ("description", Schema::string()),
            ("salaryRange", Schema::string()),
            ("matchScore", Schema::number()),
            ("reason", Schema::string()),
            ("marketOutlook", Schema::string()),
            ("requiredSkills", Schema::array(Schema::string())),
        ])
        .with_required(&[
            "id",
            "title",
            "description",
            "salaryRange",
            "matchScore",
            "reason",
            "marketOutlook",
            "requiredSkills",
        ]),
    )
}

/// Skill phase schema. Carries no required list; the parser rejects
/// incomplete objects instead.
fn skill_gap_schema() -> Schema {
    Schema::array(Schema::object(vec![
        ("skill", Schema::string()),
        ("reason", Schema::string()),
        ("resources", Schema::array(Schema::string())),
    ]))
}

/// Builds the career phase request from a profile snapshot.
pub fn recommendation_request(profile: &Profile, language: Language) -> RequestSpec {
    let instruction_text = CAREER_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{education_level}", profile.education_level.as_str())
        .replace("{interests}", &profile.interests.join(", "))
        .replace("{skills}", &profile.skills.join(", "))
        .replace(
            "{preferred_location}",
            profile
                .preferred_location
                .as_deref()
                .unwrap_or(DEFAULT_LOCATION),
        )
        .replace("{language}", language.as_str());

    RequestSpec {
        instruction_text,
        output_language: language,
        system_instruction: None,
        response_schema: Some(recommendation_schema()),
        prior_turns: Vec::new(),
    }
}

/// Builds the skill phase request from the committed careers and the same
/// profile snapshot the career phase used.
pub fn skill_gap_request(
    careers: &[CareerRecommendation],
    profile: &Profile,
    language: Language,
) -> RequestSpec {
    let career_titles = careers
        .iter()
        .map(|c| c.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let instruction_text = SKILL_GAP_PROMPT_TEMPLATE
        .replace("{career_titles}", &career_titles)
        .replace("{skills}", &profile.skills.join(", "))
        .replace("{language}", language.as_str());

    RequestSpec {
        instruction_text,
        output_language: language,
        system_instruction: None,
        response_schema: Some(skill_gap_schema()),
        prior_turns: Vec::new(),
    }
}
