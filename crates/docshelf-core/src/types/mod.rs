//! Core type definitions used across the DocShelf workspace.

pub mod id;
pub mod path;

pub use id::*;
pub use path::FolderPath;
