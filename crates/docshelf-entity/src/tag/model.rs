//! Tag entity model.

use serde::{Deserialize, Serialize};

use docshelf_core::types::TagId;

/// A tag shared across documents.
///
/// Tags are reference data owned by the tag registry; documents hold
/// `TagId`s and resolve display data at read time, so renaming a tag
/// propagates everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// Palette color label.
    pub color: TagColor,
}

impl Tag {
    /// Create a new tag with a fresh identifier.
    pub fn new(name: impl Into<String>, color: TagColor) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
            color,
        }
    }
}

/// The fixed tag color palette. A label, not a validated color value;
/// rendering is the consumer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Red.
    Red,
}
