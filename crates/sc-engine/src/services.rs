//! Host services used by the contact form shortcode.

use uuid::Uuid;

/// Issues the CSRF token embedded in contact forms.
///
/// The token becomes the *name* of a hidden field whose value is `1`; the
/// submission handler checks for its presence.
pub trait TokenIssuer: Send + Sync {
    /// Current form token.
    fn form_token(&self) -> String;
}

/// Token generated once when created and returned on every call.
#[derive(Debug, Clone)]
pub struct SessionToken {
    token: String,
}

impl SessionToken {
    /// Create a new random 32-hex-digit token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: Uuid::new_v4().simple().to_string(),
        }
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuer for SessionToken {
    fn form_token(&self) -> String {
        self.token.clone()
    }
}

/// Fixed token supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticToken(pub String);

impl TokenIssuer for StaticToken {
    fn form_token(&self) -> String {
        self.0.clone()
    }
}

/// URL of the page being rendered, used as the form `action`.
pub trait RequestUrl: Send + Sync {
    /// Absolute or relative URL the form posts to.
    fn current_url(&self) -> String;
}

/// Fixed request URL. An empty URL makes browsers post to the current page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticUrl(pub String);

impl RequestUrl for StaticUrl {
    fn current_url(&self) -> String {
        self.0.clone()
    }
}

/// Translatable labels of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormLabel {
    /// Label of the name field.
    Name,
    /// Label of the sender email field.
    Email,
    /// Label of the message field.
    Message,
    /// Text of the submit button.
    Send,
}

/// Provides localized text for contact form labels.
pub trait Localizer: Send + Sync {
    /// Text for `label`, unescaped.
    fn label(&self, label: FormLabel) -> String;
}

/// English labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLocalizer;

impl DefaultLocalizer {
    /// English text for `label`.
    #[must_use]
    pub fn text(label: FormLabel) -> &'static str {
        match label {
            FormLabel::Name => "Name",
            FormLabel::Email => "Email",
            FormLabel::Message => "Message",
            FormLabel::Send => "Send Message",
        }
    }
}

impl Localizer for DefaultLocalizer {
    fn label(&self, label: FormLabel) -> String {
        Self::text(label).to_owned()
    }
}
