use serde::{Deserialize, Serialize};

/// One career path produced by a guidance cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Annual range in INR, e.g. "₹5,00,000 - ₹12,00,000".
    pub salary_range: String,
    /// Fit against the profile's skills and interests, 0-100.
    pub match_score: f64,
    pub reason: String,
    pub market_outlook: String,
    pub required_skills: Vec<String>,
}

impl CareerRecommendation {
    /// Plain-text blurb for the share endpoint.
    pub fn share_text(&self) -> String {
        format!(
            "Check out this career path: {} - {}. Predicted Salary: {}",
            self.title, self.description, self.salary_range
        )
    }
}

/// One skill-gap entry produced after a successful career phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestion {
    pub skill: String,
    pub reason: String,
    pub resources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recommendation() -> CareerRecommendation {
        CareerRecommendation {
            id: "rec-1".to_string(),
            title: "Data Scientist".to_string(),
            description: "Builds models from data".to_string(),
            salary_range: "₹8,00,000 - ₹20,00,000".to_string(),
            match_score: 87.0,
            reason: "Strong analytical interests".to_string(),
            market_outlook: "High demand across India".to_string(),
            required_skills: vec!["Python".to_string(), "Statistics".to_string()],
        }
    }

    #[test]
    fn test_recommendation_serde_uses_camel_case() {
        let value = serde_json::to_value(sample_recommendation()).unwrap();
        assert!(value.get("salaryRange").is_some());
        assert!(value.get("matchScore").is_some());
        assert!(value.get("marketOutlook").is_some());
        assert!(value.get("requiredSkills").is_some());
        assert!(value.get("salary_range").is_none());
    }

    #[test]
    fn test_share_text_format() {
        let text = sample_recommendation().share_text();
        assert_eq!(
            text,
            "Check out this career path: Data Scientist - Builds models from data. \
             Predicted Salary: ₹8,00,000 - ₹20,00,000"
        );
    }

    #[test]
    fn test_skill_suggestion_round_trip() {
        let json = r#"{"skill":"SQL","reason":"Core data skill","resources":["SQLBolt","Mode tutorials"]}"#;
        let suggestion: SkillSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.skill, "SQL");
        assert_eq!(suggestion.resources.len(), 2);
        let back = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(back["resources"][1], "Mode tutorials");
    }

    #[test]
    fn test_skill_suggestion_missing_field_fails() {
        let json = r#"{"skill":"SQL","resources":[]}"#;
        let result: Result<SkillSuggestion, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
