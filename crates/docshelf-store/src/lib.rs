//! # docshelf-store
//!
//! The Document Store: sole authority over document and trash state.
//!
//! The source of truth is two flat collections (live and trashed)
//! persisted under distinct keys in an injected [`KeyValueStore`]
//! backend. Everything else is derived per read: the folder tree is
//! recomputed from the live collection on every call and never persisted,
//! and tag display data resolves through the [`TagRegistry`] at read
//! time.
//!
//! [`KeyValueStore`]: docshelf_core::traits::KeyValueStore

pub mod keys;
pub mod search;
pub mod seed;
pub mod store;
pub mod tags;
pub mod tree;

pub use seed::seed_if_empty;
pub use store::DocumentStore;
pub use tags::TagRegistry;
