//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// An unset variable without a default is an error naming `field`. Bare
/// `$VAR` is left as is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SC_EXPAND_SIMPLE", "hello");
        }
        assert_eq!(expand_env("${SC_EXPAND_SIMPLE}", "f").unwrap(), "hello");
        unsafe {
            std::env::remove_var("SC_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SC_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${SC_EXPAND_UNSET:-/fallback}", "f").unwrap(),
            "/fallback"
        );
        assert_eq!(expand_env("${SC_EXPAND_UNSET:-}", "f").unwrap(), "");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SC_EXPAND_HOST", "example.com");
        }
        assert_eq!(
            expand_env("https://${SC_EXPAND_HOST}/media/", "f").unwrap(),
            "https://example.com/media/"
        );
        unsafe {
            std::env::remove_var("SC_EXPAND_HOST");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SC_EXPAND_MISSING");
        }
        let err = expand_env("${SC_EXPAND_MISSING}", "media.base_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SC_EXPAND_MISSING"));
        assert!(err.to_string().contains("media.base_url"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("/static/", "f").unwrap(), "/static/");
        assert_eq!(expand_env("$HOME/x", "f").unwrap(), "$HOME/x");
    }
}
