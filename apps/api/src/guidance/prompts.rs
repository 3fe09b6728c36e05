// All model prompt constants for the guidance pipeline.

/// Career recommendation prompt template.
/// Replace: {name}, {education_level}, {interests}, {skills},
///          {preferred_location}, {language}
pub const CAREER_PROMPT_TEMPLATE: &str = r#"Analyze the following student profile and suggest 5 suitable career paths.

Context:
- Name: {name}
- Education: {education_level}
- Interests: {interests}
- Skills: {skills}
- Preferred Location: {preferred_location}
- Language: Output strictly in {language} language.
- Financials: Salary must be in Indian Rupees (INR) per annum (e.g., ₹5,00,000 - ₹12,00,000).

Requirements:
- Provide a "marketOutlook" describing the demand in India for the next 5 years.
- Provide a "matchScore" (0-100) based on skills/interests.
- Provide "requiredSkills" that they might lack but need.

Output strictly valid JSON."#;

/// Skill-gap prompt template, chained on the careers the previous phase
/// produced.
/// Replace: {career_titles}, {skills}, {language}
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Based on the target careers: [{career_titles}] and the user's current skills: [{skills}],
suggest 4 high-impact skills they should learn immediately to improve employability in India.
Language: {language}.
Provide list of generic resources/topics to study."#;
