//! Tag matching: scan the text, map each occurrence, concatenate.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::AttributeMap;
use crate::config::ShortcodeKind;

/// One occurrence of a shortcode in the text being expanded.
///
/// Borrowed from the text for the duration of a single replacement. The
/// attribute substring is parsed eagerly into [`attrs`](Self::attrs).
#[derive(Debug, PartialEq, Eq)]
pub struct ShortcodeMatch<'t> {
    /// Raw text between the tag keyword and `]`.
    pub raw_attrs: &'t str,
    /// Parsed attributes.
    pub attrs: AttributeMap,
    /// Raw body between opening and closing tags (empty for self-closing tags).
    pub content: &'t str,
    /// Child tags extracted from the body of compound shortcodes.
    pub children: Vec<NestedItem<'t>>,
}

/// A `[tab title="..."]` or `[item title="..."]` child of a compound shortcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedItem<'t> {
    /// Title attribute, unescaped.
    pub title: &'t str,
    /// Raw body, passed through to the output unchanged.
    pub body: &'t str,
}

impl<'t> ShortcodeMatch<'t> {
    /// Build a match from an outer pattern with attributes in group 1 and an
    /// optional body in group 2.
    fn from_captures(caps: &Captures<'t>) -> Self {
        let raw_attrs = caps.get(1).map_or("", |m| m.as_str());
        let content = caps.get(2).map_or("", |m| m.as_str());
        Self {
            raw_attrs,
            attrs: AttributeMap::parse(raw_attrs),
            content,
            children: Vec::new(),
        }
    }

    /// Extract all children matching `child_re` from the body.
    ///
    /// `child_re` captures the title in group 1 and the body in group 2.
    /// Extraction is a single flat scan: children are not searched for
    /// further nesting.
    #[must_use]
    pub(crate) fn with_children(mut self, child_re: &Regex) -> Self {
        self.children = child_re
            .captures_iter(self.content)
            .map(|caps| NestedItem {
                title: caps.get(1).map_or("", |m| m.as_str()),
                body: caps.get(2).map_or("", |m| m.as_str()),
            })
            .collect();
        self
    }
}

/// Replace every non-overlapping occurrence of `re` in `text`, left to right.
///
/// Returns `None` when nothing matched so callers can keep the text as is.
pub(crate) fn replace_all<F>(
    kind: ShortcodeKind,
    re: &Regex,
    text: &str,
    mut expand: F,
) -> Option<String>
where
    F: FnMut(ShortcodeMatch<'_>) -> String,
{
    let mut replaced = 0usize;
    let result = re.replace_all(text, |caps: &Captures<'_>| {
        replaced += 1;
        expand(ShortcodeMatch::from_captures(caps))
    });

    match result {
        Cow::Borrowed(_) => None,
        Cow::Owned(expanded) => {
            tracing::debug!(kind = %kind, replaced, "Expanded shortcodes");
            Some(expanded)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?is)\[box(?:\s+([^\]]*))?\](.*?)\[/box\]").unwrap()
    });
    static CHILD_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"(?is)\[c\s+title="([^"]+)"\](.*?)\[/c\]"#).unwrap());

    #[test]
    fn test_no_match_returns_none() {
        let result = replace_all(ShortcodeKind::Tabs, &PAIR_RE, "plain text", |_| {
            String::from("x")
        });
        assert_eq!(result, None);
    }

    #[test]
    fn test_replaces_all_occurrences_in_order() {
        let mut seen = Vec::new();
        let result = replace_all(
            ShortcodeKind::Tabs,
            &PAIR_RE,
            r#"a [box n="1"]one[/box] b [box n="2"]two[/box] c"#,
            |m| {
                seen.push(m.attrs.get_or("n", "?").to_owned());
                format!("<{}>", m.content)
            },
        );
        assert_eq!(result.as_deref(), Some("a <one> b <two> c"));
        assert_eq!(seen, vec!["1", "2"]);
    }

    #[test]
    fn test_match_fields() {
        let caps = PAIR_RE.captures(r#"[box id="7"]body[/box]"#).unwrap();
        let m = ShortcodeMatch::from_captures(&caps);
        assert_eq!(m.raw_attrs, r#"id="7""#);
        assert_eq!(m.attrs.get("id"), Some("7"));
        assert_eq!(m.content, "body");
        assert!(m.children.is_empty());
    }

    #[test]
    fn test_missing_attribute_group() {
        let caps = PAIR_RE.captures("[box]body[/box]").unwrap();
        let m = ShortcodeMatch::from_captures(&caps);
        assert_eq!(m.raw_attrs, "");
        assert!(m.attrs.is_empty());
    }

    #[test]
    fn test_children_extraction() {
        let caps = PAIR_RE
            .captures("[box]\n[c title=\"A\"]one[/c]\nnoise\n[c title=\"B\"]two\nlines[/c][/box]")
            .unwrap();
        let m = ShortcodeMatch::from_captures(&caps).with_children(&CHILD_RE);
        assert_eq!(
            m.children,
            vec![
                NestedItem {
                    title: "A",
                    body: "one"
                },
                NestedItem {
                    title: "B",
                    body: "two\nlines"
                },
            ]
        );
    }
}
