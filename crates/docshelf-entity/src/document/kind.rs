//! Document kind classification.

use serde::{Deserialize, Serialize};

/// The fixed classification a document carries.
///
/// The store never sniffs content; upload callers supply the kind.
/// [`DocumentKind::from_file_name`] is the mapping the stock upload flow
/// uses for that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// PDF document.
    Pdf,
    /// Word-processor document.
    WordDoc,
    /// Presentation slide deck.
    SlideDeck,
    /// Spreadsheet.
    Spreadsheet,
    /// Plain text.
    PlainText,
    /// Raster or vector image.
    Image,
    /// Anything else.
    #[default]
    Other,
}

impl DocumentKind {
    /// Classify a file by its name's extension.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != name)
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("doc" | "docx" | "odt" | "rtf") => Self::WordDoc,
            Some("ppt" | "pptx" | "odp" | "key") => Self::SlideDeck,
            Some("xls" | "xlsx" | "ods" | "csv") => Self::Spreadsheet,
            Some("txt" | "md") => Self::PlainText,
            Some("png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "bmp") => Self::Image,
            _ => Self::Other,
        }
    }
}
