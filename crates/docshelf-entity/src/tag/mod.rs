//! Tag domain entities.

pub mod model;

pub use model::{Tag, TagColor};
