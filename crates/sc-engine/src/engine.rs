//! Pipeline orchestrator.

use crate::config::{EngineConfig, ShortcodeKind};
use crate::context::ExpandContext;
use crate::shortcodes::{Shortcode, pipeline};
use crate::{
    DefaultLocalizer, Escaper, HtmlEscaper, IdGenerator, ImageLookup, Localizer, NoImages,
    RandomIds, RequestUrl, SessionToken, StaticUrl, TokenIssuer,
};

/// Result of expanding shortcodes in a text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Text with every enabled shortcode expanded.
    pub text: String,
    /// Messages of the warning blocks emitted while expanding, in order.
    pub warnings: Vec<String>,
}

/// Expands shortcodes by running one matcher per kind in a fixed order.
///
/// Each stage rescans the full text produced by the previous one:
/// button, alert, gallery, tabs, accordion, countdown, contact form.
/// Host services are injected through the `with_*` builder methods; the
/// defaults know no images, post forms to the current page and generate
/// random widget IDs.
pub struct ShortcodeEngine {
    config: EngineConfig,
    stages: Vec<Box<dyn Shortcode>>,
    images: Box<dyn ImageLookup>,
    tokens: Box<dyn TokenIssuer>,
    request_url: Box<dyn RequestUrl>,
    ids: Box<dyn IdGenerator>,
    escaper: Box<dyn Escaper>,
    localizer: Box<dyn Localizer>,
}

impl ShortcodeEngine {
    /// Create an engine with default collaborators.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            stages: pipeline(),
            images: Box::new(NoImages),
            tokens: Box::new(SessionToken::new()),
            request_url: Box::new(StaticUrl::default()),
            ids: Box::new(RandomIds),
            escaper: Box::new(HtmlEscaper),
            localizer: Box::new(DefaultLocalizer),
        }
    }

    /// Resolve gallery images through `images`.
    #[must_use]
    pub fn with_image_lookup(mut self, images: impl ImageLookup + 'static) -> Self {
        self.images = Box::new(images);
        self
    }

    /// Embed tokens from `tokens` in contact forms.
    #[must_use]
    pub fn with_token_issuer(mut self, tokens: impl TokenIssuer + 'static) -> Self {
        self.tokens = Box::new(tokens);
        self
    }

    /// Post contact forms to the URL reported by `request_url`.
    #[must_use]
    pub fn with_request_url(mut self, request_url: impl RequestUrl + 'static) -> Self {
        self.request_url = Box::new(request_url);
        self
    }

    /// Generate widget IDs with `ids`.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Escape attribute-derived text with `escaper`.
    #[must_use]
    pub fn with_escaper(mut self, escaper: impl Escaper + 'static) -> Self {
        self.escaper = Box::new(escaper);
        self
    }

    /// Take contact form labels from `localizer`.
    #[must_use]
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Stage switches this engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Kinds that will run, in pipeline order.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = ShortcodeKind> + '_ {
        self.stages
            .iter()
            .map(|stage| stage.kind())
            .filter(|kind| self.config.is_enabled(*kind))
    }

    /// Expand all enabled shortcodes in `text`.
    ///
    /// Never fails: unusable shortcodes are replaced by a warning block and
    /// reported in [`RenderOutput::warnings`]. Text outside shortcodes is
    /// returned unchanged.
    #[must_use]
    pub fn render(&self, text: &str) -> RenderOutput {
        let mut ctx = ExpandContext {
            images: self.images.as_ref(),
            tokens: self.tokens.as_ref(),
            request_url: self.request_url.as_ref(),
            ids: self.ids.as_ref(),
            escaper: self.escaper.as_ref(),
            localizer: self.localizer.as_ref(),
            warnings: Vec::new(),
        };

        let mut output = text.to_owned();
        for stage in &self.stages {
            if !self.config.is_enabled(stage.kind()) {
                continue;
            }
            if let Some(expanded) = stage.expand(&output, &mut ctx) {
                output = expanded;
            }
        }

        if !ctx.warnings.is_empty() {
            tracing::debug!(count = ctx.warnings.len(), "Rendered with shortcode warnings");
        }

        RenderOutput {
            text: output,
            warnings: ctx.warnings,
        }
    }

    /// Expand all enabled shortcodes, discarding warnings.
    #[must_use]
    pub fn render_text(&self, text: &str) -> String {
        self.render(text).text
    }
}
