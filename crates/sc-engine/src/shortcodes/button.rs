//! `[button url="..." style="..."]Label[/button]`

use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;

/// Button tag; the body may not contain `[`.
static BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[button(?:\s+([^\]]*))?\]([^\[]*)\[/button\]").unwrap()
});

/// Expands buttons into `<a class="btn ...">` links.
pub(crate) struct Button;

impl Shortcode for Button {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::Button
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &BUTTON_RE, text, |m| render_button(&m, ctx))
    }
}

fn render_button(m: &ShortcodeMatch<'_>, ctx: &ExpandContext<'_>) -> String {
    let url = m.attrs.get_or("url", "#");
    let style = m.attrs.get_or("style", "primary");
    let size = m.attrs.get_or("size", "");
    let target = m.attrs.get_or("target", "_self");
    let class = m.attrs.get_or("class", "");

    let classes = ClassList::new(&format!("btn btn-{}", ctx.escape(style)))
        .with_if(!size.is_empty(), &format!("btn-{}", ctx.escape(size)))
        .with(&ctx.escape(class))
        .build();

    format!(
        r#"<a href="{}" class="{classes}" target="{}">{}</a>"#,
        ctx.escape(url),
        ctx.escape(target),
        ctx.escape(m.content.trim())
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::shortcodes::testing::TestHost;

    fn expand(text: &str) -> Option<String> {
        let host = TestHost::new();
        Button.expand(text, &mut host.context())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            expand("[button]Go[/button]").unwrap(),
            r##"<a href="#" class="btn btn-primary" target="_self">Go</a>"##
        );
    }

    #[test]
    fn test_all_attributes() {
        let out = expand(
            r#"[button url="/buy" style="success" size="lg" target="_blank" class="cta wide"] Buy now [/button]"#,
        )
        .unwrap();
        assert_eq!(
            out,
            r#"<a href="/buy" class="btn btn-success btn-lg cta wide" target="_blank">Buy now</a>"#
        );
    }

    #[test]
    fn test_url_and_content_escaped() {
        let out = expand(r#"[button url="/q?a=1&b=2" style="S"]Tom & <Jerry>[/button]"#).unwrap();
        assert!(out.contains(r#"href="/q?a=1&amp;b=2""#));
        assert!(out.contains("btn-S"));
        assert!(out.contains(">Tom &amp; &lt;Jerry&gt;</a>"));
    }

    #[test]
    fn test_case_insensitive_keyword() {
        let out = expand(r#"[BUTTON url="/x"]Up[/Button]"#).unwrap();
        assert!(out.starts_with(r#"<a href="/x""#));
    }

    #[test]
    fn test_body_stops_at_bracket() {
        // The body may not contain '[', so this is not a button.
        let text = r#"[button url="/x"]Click [b]here[/b][/button]"#;
        assert_eq!(expand(text), None);
    }

    #[test]
    fn test_multiple_buttons_and_surrounding_text() {
        let out = expand(r#"Pick [button url="/a"]A[/button] or [button url="/b"]B[/button]."#)
            .unwrap();
        assert_eq!(
            out,
            r#"Pick <a href="/a" class="btn btn-primary" target="_self">A</a> or <a href="/b" class="btn btn-primary" target="_self">B</a>."#
        );
    }

    #[test]
    fn test_similar_tag_names_ignored() {
        assert_eq!(expand("[buttons]x[/buttons]"), None);
        assert_eq!(expand("[button]unterminated"), None);
    }

    #[test]
    fn test_single_quoted_attribute_uses_default() {
        let out = expand("[button url='/x']Go[/button]").unwrap();
        assert!(out.contains(r##"href="#""##));
    }
}
