//! Core traits defined in `docshelf-core` and implemented by other crates.

pub mod kv;

pub use kv::KeyValueStore;
