//! Folder domain entities.

pub mod node;

pub use node::{FolderNode, PathListing, folder_id};
