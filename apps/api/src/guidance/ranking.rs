//! Read-side ranking for stored recommendations. Results are computed per
//! request; the stored order never changes.

use std::cmp::Reverse;

use serde::Deserialize;

use crate::models::career::CareerRecommendation;

/// Sort order for the recommendations listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Match,
    Salary,
}

/// Lower bound of a salary range string. Keeps digits and dashes, splits
/// on the first dash, and parses what remains; anything unparseable is 0.
pub fn parse_salary_floor(range: &str) -> i64 {
    let cleaned: String = range
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    cleaned
        .split('-')
        .next()
        .and_then(|first| first.parse().ok())
        .unwrap_or(0)
}

/// Filters by case-insensitive substring on title or description, then
/// sorts by the requested key, best first.
pub fn rank(
    recommendations: &[CareerRecommendation],
    sort: SortKey,
    filter: Option<&str>,
) -> Vec<CareerRecommendation> {
    let needle = filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let mut ranked: Vec<CareerRecommendation> = recommendations
        .iter()
        .filter(|rec| match &needle {
            Some(needle) => {
                rec.title.to_lowercase().contains(needle)
                    || rec.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Match => ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score)),
        SortKey::Salary => ranked.sort_by_key(|rec| Reverse(parse_salary_floor(&rec.salary_range))),
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, description: &str, salary: &str, score: f64) -> CareerRecommendation {
        CareerRecommendation {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            salary_range: salary.to_string(),
            match_score: score,
            reason: "fits".to_string(),
            market_outlook: "steady".to_string(),
            required_skills: vec![],
        }
    }

    fn fixture() -> Vec<CareerRecommendation> {
        vec![
            rec("Developer", "Writes software", "₹6,00,000 - ₹15,00,000", 72.0),
            rec("Data Scientist", "Builds ML models", "₹10,00,000 - ₹25,00,000", 91.0),
            rec("UX Designer", "Designs product flows", "₹5,00,000 - ₹12,00,000", 84.0),
        ]
    }

    #[test]
    fn test_parse_salary_floor_handles_inr_formatting() {
        assert_eq!(parse_salary_floor("₹5,00,000 - ₹12,00,000"), 500_000);
        assert_eq!(parse_salary_floor("₹10,00,000"), 1_000_000);
        assert_eq!(parse_salary_floor("8 LPA - 12 LPA"), 8);
    }

    #[test]
    fn test_parse_salary_floor_unparseable_is_zero() {
        assert_eq!(parse_salary_floor("Negotiable"), 0);
        assert_eq!(parse_salary_floor(""), 0);
        assert_eq!(parse_salary_floor("- ₹9,00,000"), 0);
    }

    #[test]
    fn test_rank_by_match_score_descending() {
        let ranked = rank(&fixture(), SortKey::Match, None);
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Scientist", "UX Designer", "Developer"]);
    }

    #[test]
    fn test_rank_by_salary_floor_descending() {
        let ranked = rank(&fixture(), SortKey::Salary, None);
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Data Scientist", "Developer", "UX Designer"]);
    }

    #[test]
    fn test_filter_matches_title_or_description_case_insensitively() {
        let ranked = rank(&fixture(), SortKey::Match, Some("DESIGN"));
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["UX Designer"]);

        let ranked = rank(&fixture(), SortKey::Match, Some("models"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "Data Scientist");
    }

    #[test]
    fn test_blank_filter_is_ignored() {
        assert_eq!(rank(&fixture(), SortKey::Match, Some("   ")).len(), 3);
        assert_eq!(rank(&fixture(), SortKey::Match, Some("")).len(), 3);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(rank(&fixture(), SortKey::Match, Some("astronaut")).is_empty());
    }

    #[test]
    fn test_sort_key_deserializes_lowercase() {
        assert_eq!(
            serde_json::from_str::<SortKey>("\"salary\"").unwrap(),
            SortKey::Salary
        );
        assert!(serde_json::from_str::<SortKey>("\"alphabetical\"").is_err());
    }
}
