use axum::extract::Multipart;

use crate::critique::extract::{check_extension, UploadedResume};
use crate::errors::AppError;

/// Parsed fields of the analyze form.
pub struct AnalyzeForm {
    pub resume: UploadedResume,
    /// As typed; normalised by the pipeline.
    pub job_role: Option<String>,
}

/// Reads the `resume` file and optional `job_role` text out of a multipart upload.
pub async fn parse_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut resume: Option<UploadedResume> = None;
    let mut job_role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "resume" => {
                let filename = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;

                // A browser submits an empty part when no file was picked.
                if filename.as_deref().unwrap_or("").is_empty() && data.is_empty() {
                    continue;
                }
                check_extension(filename.as_deref())?;

                resume = Some(UploadedResume {
                    filename,
                    content_type,
                    data,
                });
            }
            "job_role" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read job_role: {e}")))?;
                job_role = Some(val);
            }
            other => {
                // Unknown fields are drained and ignored.
                field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read form field '{other}': {e}"))
                })?;
            }
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;

    Ok(AnalyzeForm { resume, job_role })
}
