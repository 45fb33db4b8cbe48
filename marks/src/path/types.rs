//! Core types for tree paths.
//!
//! This module defines [`TreePath`], the parsed form of a slash-delimited
//! path such as `/bookmarks/Tech/AI`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Name of the first segment of every rooted path.
pub const ROOT_MARKER: &str = "bookmarks";

/// A parsed slash-delimited tree path.
///
/// Parsing splits on `/` and discards empty segments, so `"/a//b/"` and
/// `"/a/b"` are the same path. Segment 0 is expected to be the root marker
/// ([`ROOT_MARKER`]); the remaining segments name folders, each looked up in
/// the contents of the previous one.
///
/// # Examples
///
/// ```
/// use marks::path::TreePath;
///
/// let path = TreePath::parse("/bookmarks//Tech/");
/// assert_eq!(path.to_string(), "/bookmarks/Tech");
/// assert_eq!(path.folders(), ["Tech"]);
/// assert!(path.is_rooted());
/// assert_eq!(path.parent().unwrap(), TreePath::root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    /// The root folder path, `/bookmarks`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_MARKER.to_string()],
        }
    }

    /// Parses a path string. Never fails; unrooted paths are reported by
    /// [`TreePath::is_rooted`] and rejected at resolution time.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            segments: input
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub(crate) fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// All segments, including the root marker.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if segment 0 is the root marker.
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        self.segments.first().is_some_and(|s| s == ROOT_MARKER)
    }

    /// Returns true for `/bookmarks` itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_rooted() && self.segments.len() == 1
    }

    /// Folder names below the root marker.
    #[must_use]
    pub fn folders(&self) -> &[String] {
        self.segments.get(1..).unwrap_or_default()
    }

    /// The path of the child `name` of this folder.
    #[must_use]
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// The enclosing folder, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// The last folder name, or `None` at the root.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.folders().last().map(String::as_str)
    }

    /// Returns true if `self` equals `ancestor` or lies below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use marks::path::TreePath;
    ///
    /// let tech = TreePath::parse("/bookmarks/Tech");
    /// assert!(TreePath::parse("/bookmarks/Tech/AI").is_within(&tech));
    /// assert!(tech.is_within(&tech));
    /// assert!(!TreePath::parse("/bookmarks/Technology").is_within(&tech));
    /// ```
    #[must_use]
    pub fn is_within(&self, ancestor: &Self) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// Replaces the `from` prefix of this path with `to`.
    ///
    /// Returns `None` if `self` does not lie within `from`.
    #[must_use]
    pub fn rebase(&self, from: &Self, to: &Self) -> Option<Self> {
        if !self.is_within(from) {
            return None;
        }
        let mut segments = to.segments.clone();
        segments.extend_from_slice(&self.segments[from.segments.len()..]);
        Some(Self { segments })
    }
}

impl Default for TreePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for TreePath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for TreePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
