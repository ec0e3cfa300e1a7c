//! `[accordion][item title="Q"]...[/item][/accordion]`

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;

/// Accordion container; the body is matched lazily across newlines.
static ACCORDION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\[accordion(?:\s+([^\]]*))?\](.*?)\[/accordion\]").unwrap()
});

/// A single item inside an accordion body.
static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\[item\s+title="([^"]+)"\](.*?)\[/item\]"#).unwrap()
});

const NO_ITEMS: &str = "Accordion shortcode: No valid items found";

/// Expands accordions into collapsible items, the first one expanded.
///
/// Item IDs are `{accordion_id}-item-{index}`; every item collapses into the
/// accordion through `data-bs-parent`.
pub(crate) struct Accordion;

impl Shortcode for Accordion {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::Accordion
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &ACCORDION_RE, text, |m| {
            render_accordion(&m.with_children(&ITEM_RE), ctx)
        })
    }
}

fn render_accordion(m: &ShortcodeMatch<'_>, ctx: &mut ExpandContext<'_>) -> String {
    if m.children.is_empty() {
        return ctx.warn(ShortcodeKind::Accordion, NO_ITEMS);
    }

    let accordion_id = ctx.next_id("accordion");
    let classes = ClassList::new("content-shortcodes-accordion accordion")
        .with(&ctx.escape(m.attrs.get_or("class", "")))
        .build();

    let mut html = String::with_capacity(m.content.len() + 512);
    let _ = write!(html, r#"<div class="{classes}" id="{accordion_id}">"#);

    for (index, item) in m.children.iter().enumerate() {
        let item_id = format!("{accordion_id}-item-{index}");
        let first = index == 0;
        let button_class = ClassList::new("accordion-button")
            .with_if(!first, "collapsed")
            .build();
        let collapse_class = ClassList::new("accordion-collapse collapse")
            .with_if(first, "show")
            .build();

        html.push_str(r#"<div class="accordion-item">"#);
        let _ = write!(
            html,
            r##"<h2 class="accordion-header" id="heading-{item_id}"><button class="{button_class}" type="button" data-bs-toggle="collapse" data-bs-target="#{item_id}">{}</button></h2>"##,
            ctx.escape(item.title)
        );
        let _ = write!(
            html,
            r##"<div id="{item_id}" class="{collapse_class}" data-bs-parent="#{accordion_id}"><div class="accordion-body">{}</div></div>"##,
            item.body
        );
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}
