//! Shortcode attribute parsing.
//!
//! Parses the `key="value"` pairs between a tag keyword and its closing bracket.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Regex to match a double-quoted attribute pair.
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z0-9_]+)="([^"]*)""#).unwrap());

/// Attributes parsed from a single shortcode occurrence.
///
/// Only double-quoted values are recognized. Single-quoted or bare values are
/// skipped silently, so a missing attribute and a malformed one look the same
/// to callers: use [`get_or`](Self::get_or) to fall back to a default.
///
/// # Example
///
/// ```
/// use sc_engine::AttributeMap;
///
/// let attrs = AttributeMap::parse(r#"url="/pricing" style="success" size='lg'"#);
/// assert_eq!(attrs.get("url"), Some("/pricing"));
/// assert_eq!(attrs.get_or("style", "primary"), "success");
/// assert_eq!(attrs.get("size"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeMap {
    values: HashMap<String, String>,
}

impl AttributeMap {
    /// Parse every `identifier="value"` pair found in `raw`.
    ///
    /// Pairs are scanned left to right, so a repeated key keeps its last value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut attrs = Self::default();

        if raw.trim().is_empty() {
            return attrs;
        }

        for caps in ATTRIBUTE_RE.captures_iter(raw) {
            attrs.values.insert(caps[1].to_owned(), caps[2].to_owned());
        }

        attrs
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get an attribute value, or `default` when the key is absent.
    ///
    /// A key that is present with an empty value returns the empty string.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Number of parsed attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no attributes were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
