//! Media library backing the `[gallery]` shortcode.
//!
//! Images are described in a manifest file, either YAML or JSON, holding a
//! list of records:
//!
//! ```yaml
//! - id: 5
//!   name: sunset.jpg
//!   path: images/sunset.jpg
//!   alt_text: Sunset over the pier
//!   caption: Evening, July
//! - id: 6
//!   name: dunes.jpg
//!   path: images/dunes.jpg
//! ```
//!
//! [`MediaLibrary`] implements [`sc_engine::ImageLookup`]. Resolved images get
//! their public URL by joining the library's base URL with the record path,
//! and fall back to the file name when no alt text is set.

mod library;

pub use library::{MediaLibrary, MediaRecord};

use std::path::PathBuf;

/// Error loading a media manifest.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// I/O error reading the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML manifest is malformed.
    #[error("Invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON manifest is malformed.
    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// Manifest extension is neither YAML nor JSON.
    #[error("Unsupported manifest format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Two records share an ID.
    #[error("Duplicate media ID {0} in manifest")]
    DuplicateId(u64),
}
