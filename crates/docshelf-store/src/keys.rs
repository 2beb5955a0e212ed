//! Storage key names for all persisted DocShelf records.
//!
//! Every key the store writes is built here, so the full persisted
//! footprint of the library is visible in one place.

/// Prefix applied to all DocShelf storage keys.
const PREFIX: &str = "docshelf";

/// Version of the persisted record layout, stored under
/// [`schema_version`].
pub const SCHEMA_VERSION: u32 = 1;

/// Key holding the live document collection (a JSON array of documents).
pub fn live_documents() -> String {
    format!("{PREFIX}:documents:live")
}

/// Key holding the trashed document collection (a JSON array of
/// documents, each with `deleted_at` set).
pub fn trashed_documents() -> String {
    format!("{PREFIX}:documents:trash")
}

/// Key holding the tag registry (a JSON array of tags).
pub fn tag_registry() -> String {
    format!("{PREFIX}:tags")
}

/// Key holding the schema version marker.
pub fn schema_version() -> String {
    format!("{PREFIX}:schema")
}
