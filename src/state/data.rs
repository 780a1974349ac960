/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog and the UI layer.
use serde::{Deserialize, Serialize};

/// Stable ordinal identifying an image within the catalog
pub type ImageId = u32;

/// Represents a single image in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique within the catalog, never reassigned
    pub id: ImageId,
    /// Source path as published (e.g., "/assets/asset.png")
    pub src: String,
    /// Display title, also used for the suggested download filename
    pub title: String,
    /// Display description
    pub description: String,
}

impl ImageRecord {
    pub fn new(
        id: ImageId,
        src: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            src: src.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
