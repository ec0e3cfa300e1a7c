//! `[contact_form email="..." subject="..." redirect="..."]`

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::Shortcode;
use crate::ShortcodeMatch;
use crate::config::ShortcodeKind;
use crate::context::ExpandContext;
use crate::matcher::replace_all;
use crate::output::ClassList;
use crate::services::FormLabel;

/// Self-closing contact form tag.
static CONTACT_FORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[contact_form(?:\s+([^\]]*))?\]").unwrap());

/// Expands contact forms posting to the current request URL.
///
/// The form carries the submission task, its own ID and the CSRF token as
/// hidden fields. Recipient, subject and redirect are only emitted when set.
pub(crate) struct ContactForm;

impl Shortcode for ContactForm {
    fn kind(&self) -> ShortcodeKind {
        ShortcodeKind::ContactForm
    }

    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String> {
        replace_all(self.kind(), &CONTACT_FORM_RE, text, |m| {
            render_contact_form(&m, ctx)
        })
    }
}

fn render_contact_form(m: &ShortcodeMatch<'_>, ctx: &ExpandContext<'_>) -> String {
    let email = m.attrs.get_or("email", "");
    let subject = m.attrs.get_or("subject", "Contact Form Submission");
    let class = m.attrs.get_or("class", "");
    let redirect = m.attrs.get_or("redirect", "");

    let form_id = ctx.next_id("contact-form");
    let classes = ClassList::new("content-shortcodes-contact-form")
        .with(&ctx.escape(class))
        .build();

    let mut html = String::with_capacity(1024);
    let _ = write!(
        html,
        r#"<form id="{form_id}" class="{classes}" method="post" action="{}">"#,
        ctx.escape(&ctx.current_url())
    );

    html.push_str(&hidden("task", "contactform.submit"));
    html.push_str(&hidden("form_id", &form_id));
    html.push_str(&hidden(&ctx.escape(&ctx.form_token()), "1"));
    for (name, value) in [("to_email", email), ("subject", subject), ("redirect", redirect)] {
        if !value.is_empty() {
            html.push_str(&hidden(name, &ctx.escape(value)));
        }
    }

    let _ = write!(
        html,
        r#"<div class="mb-3"><label for="{form_id}-name" class="form-label">{} *</label><input type="text" class="form-control" id="{form_id}-name" name="name" required></div>"#,
        ctx.label(FormLabel::Name)
    );
    let _ = write!(
        html,
        r#"<div class="mb-3"><label for="{form_id}-email" class="form-label">{} *</label><input type="email" class="form-control" id="{form_id}-email" name="email" required></div>"#,
        ctx.label(FormLabel::Email)
    );
    let _ = write!(
        html,
        r#"<div class="mb-3"><label for="{form_id}-message" class="form-label">{} *</label><textarea class="form-control" id="{form_id}-message" name="message" rows="5" required></textarea></div>"#,
        ctx.label(FormLabel::Message)
    );
    let _ = write!(
        html,
        r#"<button type="submit" class="btn btn-primary">{}</button>"#,
        ctx.label(FormLabel::Send)
    );

    html.push_str("</form>");
    html
}

/// Hidden input; `name` and `value` must already be escaped.
fn hidden(name: &str, value: &str) -> String {
    format!(r#"<input type="hidden" name="{name}" value="{value}">"#)
}
