//! Path resolution against a folder tree.
//!
//! This module provides the `PathResolver` type, which turns a [`TreePath`]
//! into the listing of the folder it names. Two flavors exist:
//!
//! - **Best-effort** ([`PathResolver::resolve`]): an unmatched segment stops
//!   resolution and returns the deepest listing reached, flagged `ok = false`.
//! - **Strict** (crate-private): any unmatched segment is a `NotFound` error.
//!   Every mutation goes through strict resolution.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::path::TreePath;

/// Outcome of a best-effort resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Listing of the deepest folder reached.
    pub listing: &'a [Node],
    /// True only if every segment matched a folder.
    pub ok: bool,
    /// Number of folder segments that matched.
    pub depth: usize,
}

/// Resolves tree paths to folder listings.
///
/// # Examples
///
/// ```
/// use marks::path::{PathResolver, TreePath};
/// use marks::TreeStore;
///
/// let tree = TreeStore::with_sample_data();
/// let resolver = PathResolver::new();
///
/// let tech = resolver.resolve(tree.root_contents(), &TreePath::parse("/bookmarks/Tech"));
/// assert!(tech.ok);
/// assert_eq!(tech.listing.len(), 2);
///
/// // An unknown segment truncates to the deepest listing reached
/// let missing = resolver.resolve(tree.root_contents(), &TreePath::parse("/bookmarks/Nope"));
/// assert!(!missing.ok);
/// assert_eq!(missing.listing.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Create a new path resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Best-effort resolution of `path` starting at the root listing.
    ///
    /// A path whose first segment is not the root marker (including the
    /// empty path) yields the root listing with `ok = false`.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a [Node], path: &TreePath) -> Resolution<'a> {
        if !path.is_rooted() {
            return Resolution {
                listing: root,
                ok: false,
                depth: 0,
            };
        }

        let mut listing = root;
        for (depth, segment) in path.folders().iter().enumerate() {
            match find_folder(listing, segment).and_then(Node::contents) {
                Some(contents) => listing = contents,
                None => {
                    log::debug!("resolution of {path} stopped at segment '{segment}'");
                    return Resolution {
                        listing,
                        ok: false,
                        depth,
                    };
                }
            }
        }

        Resolution {
            listing,
            ok: true,
            depth: path.folders().len(),
        }
    }

    /// Strict resolution: every segment must name a folder.
    pub(crate) fn resolve_strict<'a>(&self, root: &'a [Node], path: &TreePath) -> Result<&'a [Node]> {
        let resolution = self.resolve(root, path);
        if resolution.ok {
            Ok(resolution.listing)
        } else {
            Err(unresolved(path, resolution.depth))
        }
    }

    /// Strict resolution returning the listing for modification.
    pub(crate) fn resolve_strict_mut<'a>(
        &self,
        root: &'a mut Vec<Node>,
        path: &TreePath,
    ) -> Result<&'a mut Vec<Node>> {
        if !path.is_rooted() {
            return Err(unresolved(path, 0));
        }

        let mut listing = root;
        for (depth, segment) in path.folders().iter().enumerate() {
            listing = listing
                .iter_mut()
                .find(|n| n.is_folder() && n.name() == segment.as_str())
                .and_then(Node::contents_mut)
                .ok_or_else(|| unresolved(path, depth))?;
        }
        Ok(listing)
    }
}

/// Looks up a node by exact name in a listing.
///
/// # Examples
///
/// ```
/// use marks::path::find_in_listing;
/// use marks::TreeStore;
///
/// let tree = TreeStore::with_sample_data();
/// assert!(find_in_listing(tree.root_contents(), "Google").is_some());
/// assert!(find_in_listing(tree.root_contents(), "google").is_none());
/// ```
#[must_use]
pub fn find_in_listing<'a>(listing: &'a [Node], name: &str) -> Option<&'a Node> {
    listing.iter().find(|n| n.name() == name)
}

fn find_folder<'a>(listing: &'a [Node], name: &str) -> Option<&'a Node> {
    listing.iter().find(|n| n.is_folder() && n.name() == name)
}

fn unresolved(path: &TreePath, depth: usize) -> Error {
    if !path.is_rooted() {
        return Error::not_found(format!("path '{path}' (must start with /bookmarks)"));
    }
    let segment = path.folders().get(depth).map_or("", String::as_str);
    Error::not_found(format!("folder '{segment}' in path '{path}'"))
}
