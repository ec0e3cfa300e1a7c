//! Configuration management for the shortcode engine.
//!
//! Parses `sc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `media.base_url`
//! - `contact_form.action_url`
//! - `contact_form.token`

mod expand;

use std::path::{Path, PathBuf};

use sc_engine::{DefaultLocalizer, EngineConfig, FormLabel, Localizer, ShortcodeKind};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Shortcode kinds to disable on top of the config file.
    pub disable: Vec<ShortcodeKind>,
    /// Override media manifest path.
    pub media_manifest: Option<PathBuf>,
    /// Override media base URL.
    pub base_url: Option<String>,
    /// Override contact form action URL.
    pub action_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shortcode switches as parsed from TOML.
    #[serde(rename = "shortcodes")]
    shortcodes_raw: ShortcodesConfigRaw,
    /// Media configuration (manifest path is a relative string from TOML).
    #[serde(rename = "media")]
    media_raw: MediaConfigRaw,
    /// Contact form configuration.
    pub contact_form: ContactFormConfig,

    /// Resolved engine configuration (set after loading).
    #[serde(skip)]
    pub shortcodes: EngineConfig,
    /// Resolved media configuration (set after loading).
    #[serde(skip)]
    pub media: MediaConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw `[shortcodes]` section: per-kind `enable_*` switches plus an optional
/// `disable` list of kind names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShortcodesConfigRaw {
    #[serde(flatten)]
    toggles: EngineConfig,
    disable: Vec<String>,
}

/// Raw `[media]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MediaConfigRaw {
    manifest: Option<String>,
    base_url: String,
}

/// Resolved media configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    /// Absolute path of the media manifest, if any.
    pub manifest: Option<PathBuf>,
    /// URL prefix joined with media paths.
    pub base_url: String,
}

/// Contact form configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactFormConfig {
    /// URL forms post to. Empty posts to the current page.
    pub action_url: String,
    /// Fixed CSRF token. Empty means a random token per run.
    pub token: String,
    /// Label overrides.
    pub labels: LabelOverrides,
}

impl ContactFormConfig {
    /// Fixed token, if one is configured.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }
}

/// Contact form labels from `[contact_form.labels]`.
///
/// Labels not set fall back to [`DefaultLocalizer`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    /// Label of the name field.
    pub name: Option<String>,
    /// Label of the email field.
    pub email: Option<String>,
    /// Label of the message field.
    pub message: Option<String>,
    /// Text of the submit button.
    pub send: Option<String>,
}

impl LabelOverrides {
    fn get(&self, label: FormLabel) -> Option<&String> {
        match label {
            FormLabel::Name => self.name.as_ref(),
            FormLabel::Email => self.email.as_ref(),
            FormLabel::Message => self.message.as_ref(),
            FormLabel::Send => self.send.as_ref(),
        }
    }

    /// Validate that overrides which are set are not empty.
    fn validate(&self) -> Result<(), ConfigError> {
        for (label, field) in [
            (FormLabel::Name, "contact_form.labels.name"),
            (FormLabel::Email, "contact_form.labels.email"),
            (FormLabel::Message, "contact_form.labels.message"),
            (FormLabel::Send, "contact_form.labels.send"),
        ] {
            if let Some(value) = self.get(label) {
                require_non_empty(value, field)?;
            }
        }
        Ok(())
    }
}

impl Localizer for LabelOverrides {
    fn label(&self, label: FormLabel) -> String {
        self.get(label)
            .cloned()
            .unwrap_or_else(|| DefaultLocalizer::text(label).to_owned())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`media.base_url`").
        field: String,
        /// Error message (e.g., "${`MEDIA_URL`} not set").
        message: String,
    },
    /// Unknown shortcode kind in `shortcodes.disable`.
    #[error("Unknown shortcode in shortcodes.disable: {0}")]
    UnknownShortcode(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL prefix to be empty, absolute (http/https) or root-relative.
fn require_url_prefix(url: &str, field: &str) -> Result<(), ConfigError> {
    if url.is_empty()
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with('/')
    {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "{field} must start with http://, https:// or /"
    )))
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        for kind in &settings.disable {
            self.shortcodes.set_enabled(*kind, false);
        }
        if let Some(manifest) = &settings.media_manifest {
            self.media.manifest = Some(manifest.clone());
        }
        if let Some(base_url) = &settings.base_url {
            self.media.base_url.clone_from(base_url);
        }
        if let Some(action_url) = &settings.action_url {
            self.contact_form.action_url.clone_from(action_url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_url_prefix(&self.media.base_url, "media.base_url")?;
        self.contact_form.labels.validate()?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.media_raw.base_url = expand::expand_env(&self.media_raw.base_url, "media.base_url")?;
        self.contact_form.action_url =
            expand::expand_env(&self.contact_form.action_url, "contact_form.action_url")?;
        self.contact_form.token =
            expand::expand_env(&self.contact_form.token, "contact_form.token")?;
        Ok(())
    }

    /// Resolve the engine switches and media paths.
    ///
    /// The manifest path is relative to the config directory.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let mut shortcodes = self.shortcodes_raw.toggles;
        for name in &self.shortcodes_raw.disable {
            let kind: ShortcodeKind = name
                .parse()
                .map_err(|_| ConfigError::UnknownShortcode(name.clone()))?;
            shortcodes.set_enabled(kind, false);
        }
        self.shortcodes = shortcodes;

        self.media = MediaConfig {
            manifest: self
                .media_raw
                .manifest
                .as_deref()
                .map(|manifest| config_dir.join(manifest)),
            base_url: self.media_raw.base_url.clone(),
        };

        Ok(())
    }
}
