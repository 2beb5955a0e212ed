//! Document domain entities.

pub mod content;
pub mod kind;
pub mod model;
pub mod paper;

pub use kind::DocumentKind;
pub use model::{CreateDocument, Document};
pub use paper::PaperMetadata;
