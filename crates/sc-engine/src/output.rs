//! Markup helpers shared by the shortcode matchers.

/// Render the inline fallback shown in place of an unusable shortcode.
///
/// `message` is static text, not user input, and is inserted as is.
pub(crate) fn warning_block(message: &str) -> String {
    format!(r#"<div class="alert alert-warning">{message}</div>"#)
}

/// Space-separated class list built from a fixed base and optional extras.
///
/// Empty extras are skipped, so `class=""` adds nothing.
pub(crate) struct ClassList {
    classes: String,
}

impl ClassList {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            classes: base.to_owned(),
        }
    }

    /// Append `class` (already escaped) when it is not empty.
    #[must_use]
    pub(crate) fn with(mut self, class: &str) -> Self {
        if !class.is_empty() {
            if !self.classes.is_empty() {
                self.classes.push(' ');
            }
            self.classes.push_str(class);
        }
        self
    }

    /// Append `class` when `condition` holds.
    #[must_use]
    pub(crate) fn with_if(self, condition: bool, class: &str) -> Self {
        if condition { self.with(class) } else { self }
    }

    pub(crate) fn build(self) -> String {
        self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_block() {
        assert_eq!(
            warning_block("Tabs shortcode: No valid tabs found"),
            r#"<div class="alert alert-warning">Tabs shortcode: No valid tabs found</div>"#
        );
    }

    #[test]
    fn test_class_list_skips_empty() {
        let classes = ClassList::new("btn btn-primary").with("").with("wide").build();
        assert_eq!(classes, "btn btn-primary wide");
    }

    #[test]
    fn test_class_list_conditional() {
        let classes = ClassList::new("alert")
            .with_if(true, "fade show")
            .with_if(false, "hidden")
            .build();
        assert_eq!(classes, "alert fade show");
    }

    #[test]
    fn test_class_list_empty_base() {
        assert_eq!(ClassList::new("").with("x").build(), "x");
    }
}
