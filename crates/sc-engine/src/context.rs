//! Per-render context handed to shortcode matchers.

use crate::config::ShortcodeKind;
use crate::output::warning_block;
use crate::{
    Escaper, FormLabel, IdGenerator, ImageLookup, ImageRecord, Localizer, RequestUrl, TokenIssuer,
};

/// Collaborators and collected warnings for one call to
/// [`ShortcodeEngine::render`](crate::ShortcodeEngine::render).
pub(crate) struct ExpandContext<'a> {
    pub(crate) images: &'a dyn ImageLookup,
    pub(crate) tokens: &'a dyn TokenIssuer,
    pub(crate) request_url: &'a dyn RequestUrl,
    pub(crate) ids: &'a dyn IdGenerator,
    pub(crate) escaper: &'a dyn Escaper,
    pub(crate) localizer: &'a dyn Localizer,
    pub(crate) warnings: Vec<String>,
}

impl ExpandContext<'_> {
    /// Escape attribute-derived text.
    pub(crate) fn escape(&self, s: &str) -> String {
        self.escaper.escape(s)
    }

    /// Generate a widget ID with the given prefix.
    pub(crate) fn next_id(&self, prefix: &str) -> String {
        self.ids.generate(prefix)
    }

    /// Resolve an image, treating backend failures as "not found".
    pub(crate) fn lookup_image(&self, id: &str) -> Option<ImageRecord> {
        match self.images.lookup_image(id) {
            Ok(Some(image)) => Some(image),
            Ok(None) => {
                tracing::debug!(id, "Gallery image not found, skipping");
                None
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Image lookup failed, skipping");
                None
            }
        }
    }

    /// Current CSRF token for forms.
    pub(crate) fn form_token(&self) -> String {
        self.tokens.form_token()
    }

    /// Form submission target.
    pub(crate) fn current_url(&self) -> String {
        self.request_url.current_url()
    }

    /// Localized form label, escaped.
    pub(crate) fn label(&self, label: FormLabel) -> String {
        self.escape(&self.localizer.label(label))
    }

    /// Record a warning and return the warning block that replaces the tag.
    pub(crate) fn warn(&mut self, kind: ShortcodeKind, message: &str) -> String {
        tracing::debug!(kind = %kind, warning = message, "Shortcode replaced with warning");
        self.warnings.push(message.to_owned());
        warning_block(message)
    }
}
