//! The tree store.
//!
//! [`TreeStore`] is the sole owner of the root folder and, transitively, of
//! every node below it. It exposes read access only; changes go through the
//! mutation engine and the clipboard, which use crate-private strict lookups
//! so that invariants are enforced in one place.

use crate::error::{Error, Result};
use crate::node::{DateStamp, ItemSpec, Node, NodeId};
use crate::path::{find_in_listing, PathResolver, Resolution, TreePath};

/// Owner of the bookmark tree.
///
/// # Examples
///
/// ```
/// use marks::path::TreePath;
/// use marks::TreeStore;
///
/// let tree = TreeStore::new();
/// assert!(tree.root_contents().is_empty());
/// assert!(tree.resolve(&TreePath::root()).ok);
/// ```
#[derive(Debug, Clone)]
pub struct TreeStore {
    root: Vec<Node>,
    next_id: u64,
    resolver: PathResolver,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Vec::new(),
            next_id: 1,
            resolver: PathResolver::new(),
        }
    }

    /// Creates a tree holding the starter bookmarks: folder `Tech` with
    /// `xAI` and `GitHub`, and the root bookmark `Google`.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut tree = Self::new();
        let d = |day, month| DateStamp::from_dmy(day, month, 2025).unwrap_or_else(|_| DateStamp::today());

        let tech_id = tree.allocate_id();
        let mut tech = Node::from_spec(tech_id, ItemSpec::folder("Tech"), d(1, 1));
        let xai = Node::from_spec(
            tree.allocate_id(),
            ItemSpec::bookmark("xAI", "https://xai.ai")
                .with_tags(vec!["AI".to_string(), "Tech".to_string()])
                .with_favorite(true),
            d(28, 2),
        );
        let github = Node::from_spec(
            tree.allocate_id(),
            ItemSpec::bookmark("GitHub", "https://github.com").with_tags(vec!["Coding".to_string()]),
            d(28, 2),
        );
        if let Some(contents) = tech.contents_mut() {
            contents.push(xai);
            contents.push(github);
        }
        let google = Node::from_spec(
            tree.allocate_id(),
            ItemSpec::bookmark("Google", "https://google.com").with_tags(vec!["Search".to_string()]),
            d(27, 2),
        );

        tree.root.push(tech);
        tree.root.push(google);
        tree
    }

    /// Direct children of the root folder.
    #[must_use]
    pub fn root_contents(&self) -> &[Node] {
        &self.root
    }

    /// Best-effort resolution of `path`; see [`PathResolver::resolve`].
    #[must_use]
    pub fn resolve(&self, path: &TreePath) -> Resolution<'_> {
        self.resolver.resolve(&self.root, path)
    }

    /// Strict resolution of a folder listing.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` naming the first segment that does not resolve.
    pub fn listing(&self, path: &TreePath) -> Result<&[Node]> {
        self.resolver.resolve_strict(&self.root, path)
    }

    /// Looks up the node `name` inside the folder at `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the folder or the item does not exist.
    pub fn get(&self, path: &TreePath, name: &str) -> Result<&Node> {
        let listing = self.listing(path)?;
        find_in_listing(listing, name).ok_or_else(|| missing_item(path, name))
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.iter().map(|n| 1 + n.descendant_count()).sum()
    }

    /// Returns true if the root folder is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Every node with the path of the folder containing it, depth-first in
    /// listing order.
    #[must_use]
    pub fn walk(&self) -> Vec<(TreePath, &Node)> {
        let mut out = Vec::new();
        walk_into(&self.root, &TreePath::root(), &mut out);
        out
    }

    /// Finds nodes whose name, tags or URL contain `query`, ignoring case.
    #[must_use]
    pub fn find(&self, query: &str) -> Vec<(TreePath, &Node)> {
        let needle = query.to_lowercase();
        self.walk()
            .into_iter()
            .filter(|(_, node)| {
                node.name().to_lowercase().contains(&needle)
                    || node.tags().iter().any(|t| t.to_lowercase().contains(&needle))
                    || node.url().is_some_and(|u| u.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub(crate) fn listing_mut(&mut self, path: &TreePath) -> Result<&mut Vec<Node>> {
        self.resolver.resolve_strict_mut(&mut self.root, path)
    }

    pub(crate) fn get_mut(&mut self, path: &TreePath, name: &str) -> Result<&mut Node> {
        self.listing_mut(path)?
            .iter_mut()
            .find(|n| n.name() == name)
            .ok_or_else(|| missing_item(path, name))
    }

    pub(crate) fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

pub(crate) fn missing_item(path: &TreePath, name: &str) -> Error {
    Error::not_found(format!("item '{name}' in {path}"))
}

fn walk_into<'a>(listing: &'a [Node], at: &TreePath, out: &mut Vec<(TreePath, &'a Node)>) {
    for node in listing {
        out.push((at.clone(), node));
        if let Some(children) = node.contents() {
            walk_into(children, &at.join(node.name()), out);
        }
    }
}
