// Critique prompt template.
// Both placeholders are filled in one pass; neither value is re-read for markers.

use crate::placeholders::fill_placeholders;

pub const GENERAL_ROLE_CLAUSE: &str = "general job applications";

pub const CRITIQUE_PROMPT_TEMPLATE: &str = r#"You are an expert resume reviewer with years of experience in HR, recruitment, and ATS optimization.

Please analyze the following resume and provide detailed feedback based on:
1. Content clarity and impact
2. Skills presentation
3. Experience relevance and descriptions
4. ATS keyword optimization
5. Suggestions for improvement tailored to {role_clause}

Resume Content:
{resume_text}

Please respond in a clear, structured, and actionable format:
- **Overall Summary**
- **Strengths**
- **Weaknesses**
- **Specific Recommendations**
- **ATS Compatibility Score (0–100)**"#;

/// Fills the critique template. No escaping, truncation or length limiting.
/// `job_role` is expected already normalised: `None` or a non-blank role.
pub fn build_critique_prompt(resume_text: &str, job_role: Option<&str>) -> String {
    let role_clause = match job_role {
        Some(role) => format!("the role of {role}"),
        None => GENERAL_ROLE_CLAUSE.to_string(),
    };
    fill_placeholders(
        CRITIQUE_PROMPT_TEMPLATE,
        &[("{role_clause}", role_clause.as_str()), ("{resume_text}", resume_text)],
    )
}
