//! `[countdown date="2025-01-01" time="12:00:00"]`

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;

/// Self-closing countdown tag.
static COUNTDOWN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[countdown(?:\s+([^\]]*))?\]").unwrap());

const NO_DATE: &str = "Countdown shortcode: No date specified";

/// Display units as `(data-type, label)`.
const UNITS: [(&str, &str); 4] = [
    ("days", "Days"),
    ("hours", "Hours"),
    ("minutes", "Minutes"),
    ("seconds", "Seconds"),
];

/// Expands countdowns into a display skeleton animated client-side.
///
/// The target is emitted verbatim as `data-target="{date} {time}"`; no date
/// parsing or time arithmetic happens here.
pub(crate) struct Countdown;

impl Shortcode for Countdown {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::Countdown
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &COUNTDOWN_RE, text, |m| {
            render_countdown(&m, ctx)
        })
    }
}

fn render_countdown(m: &ShortcodeMatch<'_>, ctx: &mut ExpandContext<'_>) -> String {
    let date = m.attrs.get_or("date", "");
    let time = m.attrs.get_or("time", "00:00:00");
    let format = m.attrs.get_or("format", "days,hours,minutes,seconds");
    let class = m.attrs.get_or("class", "");
    let message = ctx.escape(m.attrs.get_or("message", "Countdown finished!"));

    if date.is_empty() {
        return ctx.warn(ShortcodeKind::Countdown, NO_DATE);
    }

    let countdown_id = ctx.next_id("countdown");
    let classes = ClassList::new("content-shortcodes-countdown")
        .with(&ctx.escape(class))
        .build();

    let mut html = String::with_capacity(768);
    let _ = write!(
        html,
        r#"<div id="{countdown_id}" class="{classes}" data-target="{}" data-format="{}" data-message="{message}">"#,
        ctx.escape(&format!("{date} {time}")),
        ctx.escape(format)
    );

    html.push_str(r#"<div class="countdown-display">"#);
    for (unit, label) in UNITS {
        let _ = write!(
            html,
            r#"<div class="countdown-item"><span class="countdown-number" data-type="{unit}">0</span><span class="countdown-label">{label}</span></div>"#
        );
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div class="countdown-message" style="display: none;">{message}</div>"#
    );
    html.push_str("</div>");
    html
}
