// Prompt template for the content-improvement proxy.

/// Improvement prompt. Replace `{section_type}`, `{industry}` and `{current}` before sending.
/// `{current}` is embedded verbatim, without escaping.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer, improve the following {section_type} description for a {industry} professional.
Make it more impactful, quantifiable, and aligned with industry standards.
Current content: "{current}"

Requirements:
1. Use action verbs
2. Include metrics and results where possible
3. Highlight relevant technical skills
4. Keep it concise but detailed
5. Focus on achievements over responsibilities
6. Use industry-specific keywords

Format the response as a single paragraph without any additional text or explanations."#;

/// Stand-in when the user has not picked an industry during onboarding.
pub const UNSPECIFIED_INDUSTRY: &str = "general";

pub fn build_improve_prompt(current: &str, section_type: &str, industry: Option<&str>) -> String {
    let industry = industry
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(UNSPECIFIED_INDUSTRY);

    // `current` goes last so text that happens to contain a placeholder stays as typed.
    IMPROVE_PROMPT_TEMPLATE
        .replace("{section_type}", section_type)
        .replace("{industry}", industry)
        .replace("{current}", current)
}
