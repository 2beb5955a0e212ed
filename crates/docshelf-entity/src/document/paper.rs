//! Research-paper catalog metadata.

use serde::{Deserialize, Serialize};

/// Catalog metadata for documents published in the public research-paper
/// browser. Ordinary uploads carry no `PaperMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperMetadata {
    /// Author names, in citation order.
    pub authors: Vec<String>,
    /// Abstract text.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Year of publication.
    pub publication_year: i32,
}
