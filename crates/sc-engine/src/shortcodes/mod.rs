//! Built-in shortcode matchers, one per [`ShortcodeKind`].
//!
//! Leaf tags (`button`, `alert`) stop their body at the first `[` so they
//! never span across a following tag. Compound tags (`tabs`, `accordion`)
//! capture their body non-greedily across newlines and then extract their
//! children from it in a single flat scan.

mod accordion;
mod alert;
mod button;
mod contact_form;
mod countdown;
mod gallery;
mod tabs;

pub(crate) use accordion::Accordion;
pub(crate) use alert::Alert;
pub(crate) use button::Button;
pub(crate) use contact_form::ContactForm;
pub(crate) use countdown::Countdown;
pub(crate) use gallery::Gallery;
pub(crate) use tabs::Tabs;

use crate::config::ShortcodeKind;
use crate::context::ExpandContext;

/// A matcher that expands every occurrence of one shortcode kind.
pub(crate) trait Shortcode: Send + Sync {
    /// Kind handled by this matcher.
    fn kind(&self) -> ShortcodeKind;

    /// Expand all occurrences in `text`.
    ///
    /// Returns `None` when the text contains no occurrence.
    fn expand(&self, text: &str, ctx: &mut ExpandContext<'_>) -> Option<String>;
}

/// All matchers in pipeline order.
pub(crate) fn pipeline() -> Vec<Box<dyn Shortcode>> {
    vec![
        Box::new(Button),
        Box::new(Alert),
        Box::new(Gallery),
        Box::new(Tabs),
        Box::new(Accordion),
        Box::new(Countdown),
        Box::new(ContactForm),
    ]
}
