//! `[alert type="..." dismissible="..."]Message[/alert]`

use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;

/// Alert tag; the body may not contain `[`.
static ALERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[alert(?:\s+([^\]]*))?\]([^\[]*)\[/alert\]").unwrap()
});

/// Close control rendered inside dismissible alerts.
const DISMISS_BUTTON: &str =
    r#"<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>"#;

/// Expands alerts into `<div class="alert ...">` containers.
///
/// The body is trusted rich content and is inserted without escaping.
pub(crate) struct Alert;

impl Shortcode for Alert {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::Alert
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &ALERT_RE, text, |m| render_alert(&m, ctx))
    }
}

fn render_alert(m: &ShortcodeMatch<'_>, ctx: &ExpandContext<'_>) -> String {
    let alert_type = m.attrs.get_or("type", "info");
    // Only the literal string "true" counts.
    let dismissible = m.attrs.get_or("dismissible", "true") == "true";
    let class = m.attrs.get_or("class", "");

    let classes = ClassList::new(&format!("alert alert-{}", ctx.escape(alert_type)))
        .with_if(dismissible, "alert-dismissible fade show")
        .with(&ctx.escape(class))
        .build();
    let dismiss = if dismissible { DISMISS_BUTTON } else { "" };

    format!(
        r#"<div class="{classes}" role="alert">{}{dismiss}</div>"#,
        m.content.trim()
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::shortcodes::testing::TestHost;

    fn expand(text: &str) -> Option<String> {
        let host = TestHost::new();
        Alert.expand(text, &mut host.context())
    }

    #[test]
    fn test_defaults_are_dismissible_info() {
        assert_eq!(
            expand("[alert]Heads up[/alert]").unwrap(),
            format!(
                r#"<div class="alert alert-info alert-dismissible fade show" role="alert">Heads up{DISMISS_BUTTON}</div>"#
            )
        );
    }

    #[test]
    fn test_not_dismissible() {
        assert_eq!(
            expand(r#"[alert type="danger" dismissible="false" class="big"]Stop[/alert]"#).unwrap(),
            r#"<div class="alert alert-danger big" role="alert">Stop</div>"#
        );
    }

    #[test]
    fn test_dismissible_requires_literal_true() {
        for value in ["1", "yes", "TRUE", "True", ""] {
            let out = expand(&format!(r#"[alert dismissible="{value}"]x[/alert]"#)).unwrap();
            assert!(!out.contains("btn-close"), "dismissible=\"{value}\"");
            assert!(!out.contains("alert-dismissible"));
        }
    }

    #[test]
    fn test_body_not_escaped() {
        let out = expand(r#"[alert type="warning"] <strong>Careful</strong> & calm [/alert]"#)
            .unwrap();
        assert!(out.contains(r#"role="alert"><strong>Careful</strong> & calm<button"#));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let out = expand(r#"[alert type="x&quot;onmouseover" class="a<b"]hi[/alert]"#).unwrap();
        assert!(out.contains("alert-x&amp;quot;onmouseover"));
        assert!(out.contains("a&lt;b"));
    }

    #[test]
    fn test_body_spanning_newlines() {
        let out = expand("[alert dismissible=\"false\"]line one\nline two[/alert]").unwrap();
        assert!(out.contains(">line one\nline two</div>"));
    }

    #[test]
    fn test_nested_tag_in_body_not_matched() {
        assert_eq!(expand(r#"[alert][button url="/x"]Go[/button][/alert]"#), None);
    }
}
