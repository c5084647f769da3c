//! Single-pass `{placeholder}` substitution for fixed templates.

/// Replaces every `(marker, value)` occurrence in one scan of `template`.
/// Inserted values are never re-scanned, so a value that looks like a marker stays verbatim.
pub fn fill_placeholders(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(marker, _)| tail.starts_with(marker)) {
            Some((marker, value)) => {
                out.push_str(value);
                rest = &tail[marker.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
