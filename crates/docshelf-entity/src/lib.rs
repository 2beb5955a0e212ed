//! # docshelf-entity
//!
//! Domain entity models for DocShelf. Every struct in this crate
//! represents a persisted record or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; persisted
//! records use the JSON layout the store writes to its key-value backend.

pub mod document;
pub mod folder;
pub mod tag;
