//! Page handlers. Each "Analyze" submit is one request/response cycle.

use axum::{
    extract::{Multipart, State},
    response::Html,
};

use crate::critique::pipeline::analyze_resume;
use crate::critique::upload::parse_analyze_form;
use crate::state::AppState;
use crate::ui::template::{render_page, Outcome};

/// GET /
pub async fn index() -> Html<String> {
    render_page("", Outcome::Empty)
}

/// POST /analyze
///
/// Always answers with the page; failures become an error banner.
pub async fn analyze(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let form = match parse_analyze_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            e.log();
            return render_page("", Outcome::Error(&e.banner_message()));
        }
    };
    let job_role = form.job_role.as_deref().unwrap_or("");

    match analyze_resume(state.model.as_ref(), &form.resume, form.job_role.as_deref()).await {
        Ok(critique) => render_page(job_role, Outcome::Analysis(&critique.analysis)),
        Err(e) => {
            e.log();
            render_page(job_role, Outcome::Error(&e.banner_message()))
        }
    }
}
