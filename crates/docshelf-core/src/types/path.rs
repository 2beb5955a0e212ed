//! Folder paths locating documents in the virtual folder tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of folder-name segments.
///
/// The empty sequence means "root". Segments are plain display names, not
/// identifiers: two documents sharing the same segment sequence are in the
/// same folder by definition. Persisted as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderPath(Vec<String>);

impl FolderPath {
    /// The root path (no segments).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from a list of segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Create a path from anything yielding string-like segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments (0 for root).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The final segment, i.e. the name of the folder this path denotes.
    /// `None` at the root.
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The parent path, or `None` at the root.
    pub fn parent(&self) -> Option<FolderPath> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// A child path one segment deeper.
    pub fn child(&self, name: impl Into<String>) -> FolderPath {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Check whether this path starts with `prefix`.
    /// Every path starts with the root path.
    pub fn starts_with(&self, prefix: &FolderPath) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

impl From<Vec<String>> for FolderPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}
