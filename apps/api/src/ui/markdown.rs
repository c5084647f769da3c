//! Markdown → HTML for model output.

use pulldown_cmark::{html, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Renders the model's Markdown. Raw HTML in the completion is shown as text,
/// and links or images with an unsafe destination keep only their text.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options)
        .filter(|event| match event {
            Event::Start(Tag::Link(_, dest, _))
            | Event::End(Tag::Link(_, dest, _))
            | Event::Start(Tag::Image(_, dest, _))
            | Event::End(Tag::Image(_, dest, _)) => is_safe_url(dest),
            _ => true,
        })
        .map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Relative URLs and http, https or mailto links are allowed; any other scheme is not.
fn is_safe_url(dest: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme.
    let cleaned: String = dest
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    match cleaned.split_once(':') {
        Some((scheme, _)) if !scheme.contains(|c: char| matches!(c, '/' | '?' | '#')) => SAFE_SCHEMES
            .iter()
            .any(|safe| scheme.eq_ignore_ascii_case(safe)),
        _ => true,
    }
}

/// Escapes text for an HTML body or a double-quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = pulldown_cmark::escape::escape_html(&mut out, text);
    out
}
