//! Path handling for the bookmark tree.
//!
//! This module provides parsing, normalization and resolution of
//! slash-delimited tree paths.
//!
//! # Key Concepts
//!
//! ## Paths
//!
//! A [`TreePath`] such as `/bookmarks/Tech/AI` names a folder. Segment 0 is
//! always the root marker `bookmarks`; each later segment names a folder in
//! the contents of the previous one. Empty segments are discarded, so
//! `/bookmarks//Tech/` and `/bookmarks/Tech` are the same path.
//!
//! ## Resolution
//!
//! [`PathResolver::resolve`] walks the tree segment by segment. When a
//! segment does not match, resolution stops and the deepest listing reached
//! is returned with `ok = false` rather than failing outright.
//!
//! ## Normalization
//!
//! [`normalize::normalize`] turns relative user input (`Tech`, `..`) into an
//! absolute path against a base location.
//!
//! # Examples
//!
//! ```
//! use marks::path::{PathResolver, TreePath};
//! use marks::TreeStore;
//!
//! let tree = TreeStore::with_sample_data();
//! let resolution = PathResolver::new().resolve(tree.root_contents(), &TreePath::root());
//! assert!(resolution.ok);
//! assert_eq!(resolution.listing.len(), 2);
//! ```

pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::{find_in_listing, PathResolver, Resolution};
pub use types::{TreePath, ROOT_MARKER};
