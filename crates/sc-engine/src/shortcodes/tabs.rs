//! `[tabs][tab title="A"]...[/tab][tab title="B"]...[/tab][/tabs]`

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;

/// Tabs container; the body is matched lazily across newlines.
static TABS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\[tabs(?:\s+([^\]]*))?\](.*?)\[/tabs\]").unwrap()
});

/// A single tab inside a tabs body.
static TAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\[tab\s+title="([^"]+)"\](.*?)\[/tab\]"#).unwrap()
});

const NO_TABS: &str = "Tabs shortcode: No valid tabs found";

/// Expands tab groups into a nav list plus tab panes.
///
/// The first tab is active. Pane IDs are `{tabs_id}-tab-{index}` and the nav
/// buttons target them with `data-bs-target`.
pub(crate) struct Tabs;

impl Shortcode for Tabs {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::Tabs
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &TABS_RE, text, |m| {
            render_tabs(&m.with_children(&TAB_RE), ctx)
        })
    }
}

fn render_tabs(m: &ShortcodeMatch<'_>, ctx: &mut ExpandContext<'_>) -> String {
    if m.children.is_empty() {
        return ctx.warn(ShortcodeKind::Tabs, NO_TABS);
    }

    let tabs_id = ctx.next_id("tabs");
    let classes = ClassList::new("content-shortcodes-tabs")
        .with(&ctx.escape(m.attrs.get_or("class", "")))
        .build();

    let mut nav = String::with_capacity(256);
    let mut panes = String::with_capacity(m.content.len() + 128);

    let _ = write!(
        nav,
        r#"<div class="{classes}"><ul class="nav nav-tabs" id="{tabs_id}-nav" role="tablist">"#
    );
    let _ = write!(panes, r#"<div class="tab-content" id="{tabs_id}-content">"#);

    for (index, tab) in m.children.iter().enumerate() {
        let tab_id = format!("{tabs_id}-tab-{index}");
        let first = index == 0;

        let link_class = ClassList::new("nav-link").with_if(first, "active").build();
        let _ = write!(
            nav,
            r##"<li class="nav-item" role="presentation"><button class="{link_class}" id="{tab_id}-tab" data-bs-toggle="tab" data-bs-target="#{tab_id}" type="button" role="tab">{}</button></li>"##,
            ctx.escape(tab.title)
        );

        let pane_class = ClassList::new("tab-pane fade")
            .with_if(first, "active show")
            .build();
        let _ = write!(
            panes,
            r#"<div class="{pane_class}" id="{tab_id}" role="tabpanel">{}</div>"#,
            tab.body
        );
    }

    nav.push_str("</ul>");
    nav.push_str(&panes);
    nav.push_str("</div></div>");
    nav
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::shortcodes::testing::TestHost;

    fn expand(text: &str) -> (Option<String>, Vec<String>) {
        let host = TestHost::new();
        let mut ctx = host.context();
        let out = Tabs.expand(text, &mut ctx);
        (out, ctx.warnings)
    }

    #[test]
    fn test_two_tabs() {
        let (out, warnings) =
            expand(r#"[tabs][tab title="A"]one[/tab][tab title="B"]two[/tab][/tabs]"#);
        assert_eq!(
            out.unwrap(),
            concat!(
                r#"<div class="content-shortcodes-tabs">"#,
                r#"<ul class="nav nav-tabs" id="tabs-1-nav" role="tablist">"#,
                r##"<li class="nav-item" role="presentation"><button class="nav-link active" id="tabs-1-tab-0-tab" data-bs-toggle="tab" data-bs-target="#tabs-1-tab-0" type="button" role="tab">A</button></li>"##,
                r##"<li class="nav-item" role="presentation"><button class="nav-link" id="tabs-1-tab-1-tab" data-bs-toggle="tab" data-bs-target="#tabs-1-tab-1" type="button" role="tab">B</button></li>"##,
                "</ul>",
                r#"<div class="tab-content" id="tabs-1-content">"#,
                r#"<div class="tab-pane fade active show" id="tabs-1-tab-0" role="tabpanel">one</div>"#,
                r#"<div class="tab-pane fade" id="tabs-1-tab-1" role="tabpanel">two</div>"#,
                "</div></div>"
            )
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_no_tabs_is_warning() {
        let (out, warnings) = expand(r#"[tabs class="x"]just text[/tabs]"#);
        assert_eq!(
            out.unwrap(),
            r#"<div class="alert alert-warning">Tabs shortcode: No valid tabs found</div>"#
        );
        assert_eq!(warnings, vec![NO_TABS.to_owned()]);
    }

    #[test]
    fn test_tab_without_title_is_ignored() {
        let (out, _) = expand(r#"[tabs][tab]untitled[/tab][tab title=""]empty[/tab][/tabs]"#);
        assert!(out.unwrap().contains("alert-warning"));
    }

    #[test]
    fn test_multiline_body_passed_through_raw() {
        let text = "[tabs class=\"docs\"]\n[tab title=\"Install\"]\n<pre>cargo add sc</pre>\n[/tab]\n[/tabs]";
        let (out, _) = expand(text);
        let out = out.unwrap();
        assert!(out.starts_with(r#"<div class="content-shortcodes-tabs docs">"#));
        assert!(out.contains("role=\"tabpanel\">\n<pre>cargo add sc</pre>\n</div>"));
    }

    #[test]
    fn test_title_escaped() {
        let (out, _) = expand(r#"[tabs][tab title="<b>Q&A</b>"]x[/tab][/tabs]"#);
        assert!(out.unwrap().contains(">&lt;b&gt;Q&amp;A&lt;/b&gt;</button>"));
    }

    #[test]
    fn test_text_outside_tab_items_dropped() {
        let (out, _) = expand(r#"[tabs]intro[tab title="A"]one[/tab]outro[/tabs]"#);
        let out = out.unwrap();
        assert!(!out.contains("intro"));
        assert!(!out.contains("outro"));
    }

    #[test]
    fn test_two_groups_get_distinct_ids() {
        let (out, _) = expand(
            r#"[tabs][tab title="A"]1[/tab][/tabs] and [TABS][Tab Title="B"]2[/TAB][/Tabs]"#,
        );
        let out = out.unwrap();
        assert!(out.contains(r#"id="tabs-1-nav""#));
        assert!(out.contains(r#"id="tabs-2-nav""#));
        assert!(out.contains(" and "));
    }

    #[test]
    fn test_unclosed_container_left_alone() {
        let (out, warnings) = expand(r#"[tabs][tab title="A"]one[/tab]"#);
        assert_eq!(out, None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_tab_singular_not_a_container() {
        assert_eq!(expand(r#"[tab title="A"]x[/tab]"#).0, None);
    }
}
