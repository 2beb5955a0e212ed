//! Inline content helpers.
//!
//! Document content is stored inline as either plain text or a data-URL
//! string; the data-URL form stands in for a real blob store. Upload
//! callers encode binary payloads before handing them to the store.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode binary content as a `data:` URL.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Check whether a content payload is a data-URL.
pub fn is_data_url(content: &str) -> bool {
    content.starts_with("data:")
}

/// Split a data-URL into its MIME type and decoded bytes.
///
/// Returns `None` for payloads that are not base64 data-URLs, including
/// plain-text content.
pub fn parse_data_url(content: &str) -> Option<(String, Vec<u8>)> {
    let rest = content.strip_prefix("data:")?;
    let (mime_type, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime_type.to_string(), bytes))
}
