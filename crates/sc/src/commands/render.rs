//! `sc render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use sc_config::{CliSettings, Config};
use sc_engine::{ShortcodeEngine, ShortcodeKind, StaticToken, StaticUrl};
use sc_media::MediaLibrary;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// File to expand (default: stdin).
    input: Option<PathBuf>,

    /// Write the result to this file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover sc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leave tags of this kind unexpanded (repeatable).
    #[arg(long, value_name = "KIND")]
    disable: Vec<ShortcodeKind>,

    /// Media manifest for galleries (overrides config).
    #[arg(long, env = "SC_MEDIA")]
    media: Option<PathBuf>,

    /// Base URL prepended to media paths (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// URL contact forms post to (overrides config).
    #[arg(long)]
    action_url: Option<String>,

    /// Enable verbose output (show per-stage expansion logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the media manifest fails to load,
    /// or if reading the input or writing the output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            disable: self.disable,
            media_manifest: self.media,
            base_url: self.base_url,
            action_url: self.action_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let engine = build_engine(&config)?;

        let input = read_input(self.input.as_deref())?;
        let rendered = engine.render(&input);
        tracing::info!(
            bytes_in = input.len(),
            bytes_out = rendered.text.len(),
            warnings = rendered.warnings.len(),
            "Rendered shortcodes"
        );

        for warning in &rendered.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        write_output(self.output.as_deref(), &rendered.text)?;
        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }

        Ok(())
    }
}

/// Build an engine wired to the configured collaborators.
pub(crate) fn build_engine(config: &Config) -> Result<ShortcodeEngine, CliError> {
    let mut engine = ShortcodeEngine::new(config.shortcodes)
        .with_request_url(StaticUrl(config.contact_form.action_url.clone()))
        .with_localizer(config.contact_form.labels.clone());

    if let Some(token) = config.contact_form.token() {
        engine = engine.with_token_issuer(StaticToken(token.to_owned()));
    }

    if let Some(manifest) = &config.media.manifest {
        let library = MediaLibrary::load(manifest, &config.media.base_url)?;
        engine = engine.with_image_lookup(library);
    }

    Ok(engine)
}

/// Read the whole input file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `text` to the output file, or stdout when no path is given.
fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_engine_with_media_and_form_settings() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("media.yaml");
        fs::write(&manifest, "- id: 1\n  name: one.png\n  path: one.png\n").unwrap();

        let mut config = Config::default();
        config.media.manifest = Some(manifest);
        config.media.base_url = "/media/".to_owned();
        config.contact_form.action_url = "/send".to_owned();
        config.contact_form.token = "fixed".to_owned();
        config.contact_form.labels.send = Some("Go".to_owned());

        let engine = build_engine(&config).unwrap();

        let gallery = engine.render_text(r#"[gallery images="1,2"]"#);
        assert!(gallery.contains(r#"<img src="/media/one.png" alt="one.png" class="img-fluid">"#));
        assert_eq!(gallery.matches("gallery-item").count(), 1);

        let form = engine.render_text("[contact_form]");
        assert!(form.contains(r#"action="/send""#));
        assert!(form.contains(r#"<input type="hidden" name="fixed" value="1">"#));
        assert!(form.contains(">Go</button>"));
    }

    #[test]
    fn test_build_engine_respects_disabled_kinds() {
        let mut config = Config::default();
        config.shortcodes.set_enabled(ShortcodeKind::Alert, false);

        let engine = build_engine(&config).unwrap();
        assert_eq!(engine.render_text("[alert]x[/alert]"), "[alert]x[/alert]");
    }

    #[test]
    fn test_build_engine_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.media.manifest = Some(dir.path().join("missing.yaml"));

        let err = build_engine(&config).err().unwrap();
        assert!(matches!(err, CliError::Media(_)));
    }

    #[test]
    fn test_read_and_write_files() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.html");
        let out = dir.path().join("page.out.html");
        fs::write(&input, "<p>[button]Go[/button]</p>").unwrap();

        let text = read_input(Some(&input)).unwrap();
        let engine = build_engine(&Config::default()).unwrap();
        write_output(Some(&out), &engine.render_text(&text)).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            r##"<p><a href="#" class="btn btn-primary" target="_self">Go</a></p>"##
        );
    }

    #[test]
    fn test_read_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = read_input(Some(&dir.path().join("nope.txt"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
