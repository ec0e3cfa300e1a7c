//! In-memory media library loaded from a manifest.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use sc_engine::{ImageLookup, ImageRecord, LookupError};
use serde::{Deserialize, Serialize};

use crate::MediaError;

/// A media item as stored in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaRecord {
    /// Numeric ID referenced from `images="..."`.
    pub id: u64,
    /// File name, used as alt text fallback.
    pub name: String,
    /// Path relative to the base URL.
    pub path: String,
    /// Alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Caption shown below the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Media items indexed by ID.
#[derive(Debug, Default)]
pub struct MediaLibrary {
    base_url: String,
    records: HashMap<u64, MediaRecord>,
}

impl MediaLibrary {
    /// Load a manifest, choosing the format by file extension
    /// (`.yaml`/`.yml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, has an
    /// unknown extension or contains duplicate IDs.
    pub fn load(path: &Path, base_url: &str) -> Result<Self, MediaError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let records = match format.as_deref() {
            Some("yaml" | "yml") => parse_yaml(&std::fs::read_to_string(path)?)?,
            Some("json") => parse_json(&std::fs::read_to_string(path)?)?,
            _ => return Err(MediaError::UnsupportedFormat(path.to_path_buf())),
        };

        let library = Self::from_records(records, base_url)?;
        tracing::info!(
            path = %path.display(),
            count = library.len(),
            "Loaded media library"
        );
        Ok(library)
    }

    /// Build a library from records.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::DuplicateId`] if two records share an ID.
    pub fn from_records(
        records: impl IntoIterator<Item = MediaRecord>,
        base_url: &str,
    ) -> Result<Self, MediaError> {
        let mut by_id = HashMap::new();
        for record in records {
            match by_id.entry(record.id) {
                Entry::Occupied(_) => return Err(MediaError::DuplicateId(record.id)),
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        Ok(Self {
            base_url: base_url.to_owned(),
            records: by_id,
        })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the library holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record with the given ID.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&MediaRecord> {
        self.records.get(&id)
    }

    /// Public URL of a record.
    #[must_use]
    pub fn url_for(&self, record: &MediaRecord) -> String {
        join_url(&self.base_url, &record.path)
    }

    fn resolve(&self, record: &MediaRecord) -> ImageRecord {
        let alt_text = match record.alt_text.as_deref() {
            Some(alt) if !alt.is_empty() => alt.to_owned(),
            _ => record.name.clone(),
        };
        ImageRecord {
            id: record.id.to_string(),
            url: self.url_for(record),
            alt_text,
            caption: record.caption.clone().unwrap_or_default(),
        }
    }
}

impl ImageLookup for MediaLibrary {
    fn lookup_image(&self, id: &str) -> Result<Option<ImageRecord>, LookupError> {
        // Non-numeric IDs can never match a record.
        let Ok(id) = id.trim().parse::<u64>() else {
            return Ok(None);
        };
        Ok(self.get(id).map(|record| self.resolve(record)))
    }
}

fn parse_yaml(content: &str) -> Result<Vec<MediaRecord>, MediaError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(trimmed)?)
}

fn parse_json(content: &str) -> Result<Vec<MediaRecord>, MediaError> {
    Ok(serde_json::from_str(content)?)
}

/// Join base URL and path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_owned();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
