use axum::response::Html;

use crate::placeholders::fill_placeholders;
use crate::ui::markdown::{escape, render_markdown};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// What the page shows under the form.
pub enum Outcome<'a> {
    /// First visit: nothing below the form.
    Empty,
    /// Model Markdown, rendered as the results section.
    Analysis(&'a str),
    /// Banner text, shown as-is (escaped).
    Error(&'a str),
}

/// Render the page, re-filling the job role the user typed.
pub fn render_page(job_role: &str, outcome: Outcome<'_>) -> Html<String> {
    let result = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Analysis(markdown) => format!(
            "<section class=\"results\">\n<h3>Resume Analysis Results</h3>\n{}</section>",
            render_markdown(markdown)
        ),
        Outcome::Error(message) => format!(
            "<div class=\"error\" role=\"alert\">{}</div>",
            escape(message)
        ),
    };

    let job_role = escape(job_role);
    Html(fill_placeholders(
        INDEX_HTML,
        &[("{{ job_role }}", job_role.as_str()), ("{{ result }}", result.as_str())],
    ))
}
