//! Image lookup collaborator used by the gallery shortcode.

/// An image resolved for a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Identifier as referenced from `images="..."`.
    pub id: String,
    /// Public URL of the image.
    pub url: String,
    /// Alternative text.
    pub alt_text: String,
    /// Caption shown below the image (empty for none).
    pub caption: String,
}

/// Error reported by an image lookup backend.
///
/// The engine never propagates this: a failed lookup is logged and the image
/// is left out of the gallery.
#[derive(Debug, thiserror::Error)]
#[error("image lookup failed for {id}: {message}")]
pub struct LookupError {
    /// ID that was being resolved.
    pub id: String,
    /// Backend-specific description.
    pub message: String,
}

impl LookupError {
    /// Create a lookup error for `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Source of gallery images, looked up one ID at a time.
///
/// Implemented by media backends. Lookups are read-only; the engine does not
/// cache or modify returned records.
pub trait ImageLookup: Send + Sync {
    /// Resolve an image by ID.
    ///
    /// Returns `Ok(None)` when the ID is unknown.
    fn lookup_image(&self, id: &str) -> Result<Option<ImageRecord>, LookupError>;
}

/// Lookup that knows no images. Galleries render empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImages;

impl ImageLookup for NoImages {
    fn lookup_image(&self, _id: &str) -> Result<Option<ImageRecord>, LookupError> {
        Ok(None)
    }
}
