use serde::{Deserialize, Serialize};

/// Education tiers offered in the profile form. The wire strings are fixed
/// display values; an unrecognized value fails deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "School (Class 1-10)")]
    School,
    #[default]
    #[serde(rename = "High School (Class 11-12)")]
    HighSchool,
    Undergraduate,
    Graduate,
    #[serde(rename = "Post Graduation")]
    PostGraduation,
    #[serde(rename = "Post Doc")]
    PostDoc,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::School,
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Graduate,
        EducationLevel::PostGraduation,
        EducationLevel::PostDoc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::School => "School (Class 1-10)",
            EducationLevel::HighSchool => "High School (Class 11-12)",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::PostGraduation => "Post Graduation",
            EducationLevel::PostDoc => "Post Doc",
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-entered profile. Interests and skills are ordered sets: no
/// duplicate (case-sensitive, trimmed) entries once normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub education_level: EducationLevel,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<String>,
}

impl Profile {
    /// True when the profile carries enough signal to seed a guidance cycle.
    pub fn has_guidance_terms(&self) -> bool {
        !self.interests.is_empty() || !self.skills.is_empty()
    }

    /// Normalizes user input: name and location trimmed (blank location
    /// dropped), interests and skills trimmed, emptied of blanks, and
    /// deduplicated case-sensitively with first occurrence winning.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.interests = normalize_terms(self.interests);
        self.skills = normalize_terms(self.skills);
        self.preferred_location = self.preferred_location.and_then(|loc| {
            let loc = loc.trim();
            if loc.is_empty() {
                None
            } else {
                Some(loc.to_string())
            }
        });
        self
    }
}

fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let term = term.trim();
        if term.is_empty() || out.iter().any(|seen| seen == term) {
            continue;
        }
        out.push(term.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(interests: &[&str], skills: &[&str]) -> Profile {
        Profile {
            name: "Asha".to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_education_level_serde_round_trip() {
        for level in EducationLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            let back: EducationLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn test_education_level_uses_display_strings_on_the_wire() {
        let json = serde_json::to_string(&EducationLevel::HighSchool).unwrap();
        assert_eq!(json, "\"High School (Class 11-12)\"");
        let json = serde_json::to_string(&EducationLevel::PostGraduation).unwrap();
        assert_eq!(json, "\"Post Graduation\"");
    }

    #[test]
    fn test_unknown_education_level_fails_deserialization() {
        let result: Result<EducationLevel, _> = serde_json::from_str("\"Kindergarten\"");
        assert!(result.is_err(), "closed enum must not default silently");
    }

    #[test]
    fn test_default_education_level_is_high_school() {
        assert_eq!(EducationLevel::default(), EducationLevel::HighSchool);
    }

    #[test]
    fn test_profile_serde_uses_camel_case() {
        let profile = Profile {
            preferred_location: Some("Bangalore".to_string()),
            ..profile_with(&["coding"], &[])
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("educationLevel").is_some());
        assert!(value.get("preferredLocation").is_some());
        assert!(value.get("education_level").is_none());
    }

    #[test]
    fn test_has_guidance_terms_requires_interest_or_skill() {
        assert!(!profile_with(&[], &[]).has_guidance_terms());
        assert!(profile_with(&["coding"], &[]).has_guidance_terms());
        assert!(profile_with(&[], &["python"]).has_guidance_terms());
    }

    #[test]
    fn test_normalized_trims_and_drops_blanks() {
        let profile = profile_with(&["  coding  ", "   ", ""], &[" python "]).normalized();
        assert_eq!(profile.interests, vec!["coding"]);
        assert_eq!(profile.skills, vec!["python"]);
    }

    #[test]
    fn test_normalized_dedupes_case_sensitively_first_wins() {
        let profile = profile_with(&["coding", "Coding", "coding ", "design"], &[]).normalized();
        assert_eq!(profile.interests, vec!["coding", "Coding", "design"]);
    }

    #[test]
    fn test_normalized_drops_blank_location() {
        let profile = Profile {
            preferred_location: Some("   ".to_string()),
            ..profile_with(&["coding"], &[])
        }
        .normalized();
        assert_eq!(profile.preferred_location, None);

        let profile = Profile {
            preferred_location: Some("  Mumbai ".to_string()),
            ..profile_with(&["coding"], &[])
        }
        .normalized();
        assert_eq!(profile.preferred_location.as_deref(), Some("Mumbai"));
    }
}
