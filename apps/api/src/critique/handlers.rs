//! Axum route handler for the JSON critique API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::critique::pipeline::{analyze_resume, Critique};
use crate::critique::upload::parse_analyze_form;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart form with a `resume` file (PDF or TXT) and an optional `job_role`.
/// Returns the model's Markdown critique.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Critique>, AppError> {
    let form = parse_analyze_form(multipart).await?;

    let critique =
        analyze_resume(state.model.as_ref(), &form.resume, form.job_role.as_deref()).await?;

    Ok(Json(critique))
}
