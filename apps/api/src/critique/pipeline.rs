//! Critique pipeline: extract → check content → build prompt → one model call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::critique::extract::{ensure_content, extract_text, UploadedResume};
use crate::critique::prompts::build_critique_prompt;
use crate::errors::AppError;
use crate::llm_client::CompletionModel;

/// The result of one analysis. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Critique {
    pub request_id: Uuid,
    pub model: String,
    pub job_role: Option<String>,
    /// Markdown exactly as the model returned it.
    pub analysis: String,
    pub analyzed_at: DateTime<Utc>,
}

/// Trims the role; blank or missing means no role.
pub fn normalize_job_role(job_role: Option<&str>) -> Option<&str> {
    job_role.map(str::trim).filter(|r| !r.is_empty())
}

/// Runs one analysis. The model is not called when the resume has no text.
pub async fn analyze_resume(
    model: &dyn CompletionModel,
    upload: &UploadedResume,
    job_role: Option<&str>,
) -> Result<Critique, AppError> {
    let request_id = Uuid::new_v4();
    let job_role = normalize_job_role(job_role);
    let kind = upload.kind();

    let resume_text = extract_text(upload).await?;
    ensure_content(&resume_text)?;

    info!(
        %request_id,
        kind = kind.as_str(),
        bytes = upload.data.len(),
        text_chars = resume_text.chars().count(),
        has_role = job_role.is_some(),
        "Analyzing resume"
    );

    let prompt = build_critique_prompt(&resume_text, job_role);
    let analysis = model.complete(&prompt).await?;

    info!(%request_id, analysis_chars = analysis.chars().count(), "Analysis complete");

    Ok(Critique {
        request_id,
        model: model.model_name().to_string(),
        job_role: job_role.map(String::from),
        analysis,
        analyzed_at: Utc::now(),
    })
}
