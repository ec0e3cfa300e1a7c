//! HTML escaping for attribute-derived text.

/// Escapes text before it is placed into generated markup.
///
/// Implement this to plug in a host escaper; [`HtmlEscaper`] is the default.
pub trait Escaper: Send + Sync {
    /// Escape `s` for use in HTML text and double- or single-quoted attributes.
    fn escape(&self, s: &str) -> String;
}

/// Default escaper backed by [`escape_html`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape(&self, s: &str) -> String {
        escape_html(s)
    }
}

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// # Example
///
/// ```
/// use sc_engine::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
