//! Shortcode parsing and expansion engine.
//!
//! This crate scans free-form content for bracketed shortcode tags and
//! rewrites each occurrence into HTML fragments:
//!
//! ```text
//! [button url="/signup" style="success"]Join[/button]
//! [alert type="warning"]Read <em>carefully</em>[/alert]
//! [gallery images="4,8,15" columns="3"]
//! [tabs][tab title="One"]first[/tab][tab title="Two"]second[/tab][/tabs]
//! [accordion][item title="Q"]A[/item][/accordion]
//! [countdown date="2025-01-01" time="12:00:00"]
//! [contact_form email="team@example.com"]
//! ```
//!
//! # Architecture
//!
//! The [`ShortcodeEngine`] applies one matcher per [`ShortcodeKind`] in a fixed
//! order (button, alert, gallery, tabs, accordion, countdown, contact form).
//! Each matcher rescans the whole text produced by the previous stage, so
//! stages interact only through that order. Stages can be switched off through
//! [`EngineConfig`].
//!
//! Everything the engine needs from its host is injected as a trait object:
//!
//! - [`ImageLookup`]: resolves gallery image IDs
//! - [`TokenIssuer`]: CSRF token for contact forms
//! - [`RequestUrl`]: contact form submission target
//! - [`IdGenerator`]: widget identifiers
//! - [`Escaper`]: HTML escaping of attribute-derived text
//! - [`Localizer`]: contact form labels
//!
//! Malformed or incomplete shortcodes never fail the render. They degrade to
//! an inline warning block and a message in [`RenderOutput::warnings`].
//!
//! # Example
//!
//! ```
//! use sc_engine::{EngineConfig, SequentialIds, ShortcodeEngine};
//!
//! let engine = ShortcodeEngine::new(EngineConfig::default())
//!     .with_id_generator(SequentialIds::new());
//!
//! let output = engine.render(r#"[button url="/docs"]Read the docs[/button]"#);
//! assert_eq!(
//!     output.text,
//!     r#"<a href="/docs" class="btn btn-primary" target="_self">Read the docs</a>"#
//! );
//! assert!(output.warnings.is_empty());
//! ```

mod attrs;
mod config;
mod context;
mod engine;
mod escape;
mod ids;
mod lookup;
mod matcher;
mod output;
mod services;
mod shortcodes;

pub use attrs::AttributeMap;
pub use config::{EngineConfig, ShortcodeKind, UnknownKind};
pub use engine::{RenderOutput, ShortcodeEngine};
pub use escape::{Escaper, HtmlEscaper, escape_html};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use lookup::{ImageLookup, ImageRecord, LookupError, NoImages};
pub use matcher::{NestedItem, ShortcodeMatch};
pub use services::{
    DefaultLocalizer, FormLabel, Localizer, RequestUrl, SessionToken, StaticToken, StaticUrl,
    TokenIssuer,
};
