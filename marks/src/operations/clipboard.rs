//! Cut, copy and paste.
//!
//! The clipboard holds at most one pending entry. A copy stores a deep
//! snapshot of the node, so later edits to the source do not affect what is
//! pasted. A cut remembers which live node to move (by id) and where it was;
//! paste moves that node and empties the clipboard.
//!
//! ## Invalidation
//!
//! Deleting a subtree that contains the entry's origin, or deleting the
//! clipboard node itself, clears the entry. A later paste then reports
//! `NotFound` instead of reviving a node that no longer exists.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::operations::mutate::duplicate;
use crate::path::{find_in_listing, TreePath};
use crate::tree::{missing_item, TreeStore};

/// What paste does with the clipboard node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    /// Move the node; the entry is consumed by paste.
    Cut,
    /// Insert a fresh duplicate; the entry stays for further pastes.
    Copy,
}

/// The pending clipboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    node: Node,
    origin: TreePath,
    mode: ClipboardMode,
}

impl ClipboardEntry {
    /// Snapshot of the node taken at cut/copy time.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Folder the node was taken from.
    #[must_use]
    pub fn origin(&self) -> &TreePath {
        &self.origin
    }

    /// Cut or copy.
    #[must_use]
    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }
}

/// Holder of the single pending cut/copy entry.
///
/// # Examples
///
/// ```
/// use marks::operations::ClipboardManager;
/// use marks::path::TreePath;
/// use marks::TreeStore;
///
/// let mut tree = TreeStore::with_sample_data();
/// let mut clipboard = ClipboardManager::new();
///
/// clipboard.cut(&tree, &TreePath::root(), "Google").unwrap();
/// clipboard.paste(&mut tree, &TreePath::parse("/bookmarks/Tech")).unwrap();
///
/// assert!(tree.get(&TreePath::parse("/bookmarks/Tech"), "Google").is_ok());
/// assert!(tree.get(&TreePath::root(), "Google").is_err());
/// assert!(clipboard.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClipboardManager {
    entry: Option<ClipboardEntry>,
}

impl ClipboardManager {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `name` in the folder at `path` to be moved by the next paste.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the folder or the item does not exist. The
    /// previous entry is kept in that case.
    pub fn cut(&mut self, tree: &TreeStore, path: &TreePath, name: &str) -> Result<()> {
        self.store(tree, path, name, ClipboardMode::Cut)
    }

    /// Takes a snapshot of `name` in the folder at `path` for pasting.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the folder or the item does not exist.
    pub fn copy(&mut self, tree: &TreeStore, path: &TreePath, name: &str) -> Result<()> {
        self.store(tree, path, name, ClipboardMode::Copy)
    }

    /// Inserts the clipboard node into the folder at `dest`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the clipboard is empty, `dest` does not resolve, or a
    ///   cut node is no longer in its origin folder
    /// - `Validation` if `dest` already has an item with the same name, or a
    ///   cut folder would be moved into itself or one of its descendants
    pub fn paste(&mut self, tree: &mut TreeStore, dest: &TreePath) -> Result<Node> {
        let entry = self
            .entry
            .as_ref()
            .ok_or_else(|| Error::not_found("clipboard entry (nothing to paste)"))?;

        match entry.mode {
            ClipboardMode::Copy => {
                let name = entry.node.name();
                if find_in_listing(tree.listing(dest)?, name).is_some() {
                    return Err(duplicate(dest, name));
                }

                let mut node = entry.node.clone();
                node.reassign_ids(&mut || tree.allocate_id());
                tree.listing_mut(dest)?.push(node.clone());
                log::info!("pasted copy of '{}' into {dest}", node.name());
                Ok(node)
            }
            ClipboardMode::Cut => {
                let origin = entry.origin.clone();
                let id = entry.node.id();

                let live = tree
                    .listing(&origin)?
                    .iter()
                    .find(|n| n.id() == id)
                    .ok_or_else(|| missing_item(&origin, entry.node.name()))?;
                let name = live.name().to_string();

                let dest_listing = tree.listing(dest)?;
                if live.is_folder() && dest.is_within(&origin.join(&name)) {
                    return Err(Error::validation(
                        "destination",
                        format!("cannot move '{name}' into itself ({dest})"),
                    ));
                }
                if find_in_listing(dest_listing, &name).is_some() {
                    return Err(duplicate(dest, &name));
                }

                let origin_listing = tree.listing_mut(&origin)?;
                let index = origin_listing
                    .iter()
                    .position(|n| n.id() == id)
                    .ok_or_else(|| missing_item(&origin, &name))?;
                let node = origin_listing.remove(index);
                tree.listing_mut(dest)?.push(node.clone());
                self.entry = None;
                log::info!("moved '{name}' from {origin} to {dest}");
                Ok(node)
            }
        }
    }

    /// The pending entry, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    /// Returns true if there is nothing to paste.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Drops the pending entry.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Clears the entry if it depends on `removed`, just deleted from the
    /// folder at `parent`.
    pub(crate) fn invalidate_deleted(&mut self, parent: &TreePath, removed: &Node) {
        let Some(entry) = &self.entry else {
            return;
        };
        let inside = entry.origin.is_within(&parent.join(removed.name()));
        let is_node = entry.origin == *parent && entry.node.id() == removed.id();
        if inside || is_node {
            log::debug!("clipboard entry for '{}' invalidated by delete", entry.node.name());
            self.entry = None;
        }
    }

    /// Follows a folder rename so the entry's origin keeps pointing at the
    /// same folder.
    pub(crate) fn rebase(&mut self, from: &TreePath, to: &TreePath) {
        if let Some(entry) = &mut self.entry {
            if let Some(rebased) = entry.origin.rebase(from, to) {
                entry.origin = rebased;
            }
        }
    }

    fn store(
        &mut self,
        tree: &TreeStore,
        path: &TreePath,
        name: &str,
        mode: ClipboardMode,
    ) -> Result<()> {
        let node = tree.get(path, name)?.clone();
        log::debug!("clipboard: {mode:?} '{name}' from {path}");
        self.entry = Some(ClipboardEntry {
            node,
            origin: path.clone(),
            mode,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DateStamp, ItemSpec};
    use crate::operations::MutationEngine;

    fn tech() -> TreePath {
        TreePath::parse("/bookmarks/Tech")
    }

    fn today() -> DateStamp {
        DateStamp::from_dmy(2, 3, 2025).unwrap()
    }

    #[test]
    fn test_paste_empty_is_not_found() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        let err = clipboard.paste(&mut tree, &TreePath::root()).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nothing to paste"));
    }

    #[test]
    fn test_cut_missing_keeps_previous_entry() {
        let tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(&tree, &TreePath::root(), "Google").unwrap();
        assert!(clipboard.cut(&tree, &TreePath::root(), "Nope").is_err());
        assert_eq!(clipboard.peek().unwrap().node().name(), "Google");
        assert_eq!(clipboard.peek().unwrap().mode(), ClipboardMode::Copy);
    }

    #[test]
    fn test_copy_is_a_snapshot() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(&tree, &tech(), "xAI").unwrap();
        MutationEngine::toggle_favorite(&mut tree, &tech(), "xAI").unwrap();

        let pasted = clipboard.paste(&mut tree, &TreePath::root()).unwrap();
        assert!(pasted.is_favorite());
        assert!(!tree.get(&tech(), "xAI").unwrap().is_favorite());
    }

    #[test]
    fn test_copy_paste_assigns_new_ids_and_keeps_entry() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(&tree, &TreePath::root(), "Tech").unwrap();
        MutationEngine::create(&mut tree, &TreePath::root(), ItemSpec::folder("Archive"), today())
            .unwrap();

        let pasted = clipboard
            .paste(&mut tree, &TreePath::parse("/bookmarks/Archive"))
            .unwrap();
        let original = tree.get(&TreePath::root(), "Tech").unwrap();
        assert_ne!(pasted.id(), original.id());
        assert_ne!(pasted.contents().unwrap()[0].id(), original.contents().unwrap()[0].id());
        assert!(!clipboard.is_empty());
        assert_eq!(tree.len(), 4 + 1 + 3);
    }

    #[test]
    fn test_copy_folder_into_itself_is_allowed() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(&tree, &TreePath::root(), "Tech").unwrap();
        clipboard.paste(&mut tree, &tech()).unwrap();
        assert!(tree.resolve(&TreePath::parse("/bookmarks/Tech/Tech")).ok);
    }

    #[test]
    fn test_paste_collision_is_validation() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.copy(&tree, &TreePath::root(), "Google").unwrap();
        let err = clipboard.paste(&mut tree, &TreePath::root()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tree.root_contents().len(), 2);
    }

    #[test]
    fn test_cut_into_own_descendant_is_rejected() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        MutationEngine::create(&mut tree, &tech(), ItemSpec::folder("AI"), today()).unwrap();
        clipboard.cut(&tree, &TreePath::root(), "Tech").unwrap();

        for dest in ["/bookmarks/Tech", "/bookmarks/Tech/AI"] {
            let err = clipboard.paste(&mut tree, &TreePath::parse(dest)).unwrap_err();
            assert!(err.is_validation(), "{dest}: {err}");
        }
        assert!(tree.resolve(&TreePath::parse("/bookmarks/Tech/AI")).ok);
        assert!(!clipboard.is_empty());
    }

    #[test]
    fn test_cut_follows_renamed_node() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.cut(&tree, &TreePath::root(), "Google").unwrap();
        MutationEngine::rename(&mut tree, &TreePath::root(), "Google", "Search").unwrap();

        let moved = clipboard.paste(&mut tree, &tech()).unwrap();
        assert_eq!(moved.name(), "Search");
        assert!(tree.get(&tech(), "Search").is_ok());
    }

    #[test]
    fn test_cut_paste_to_missing_destination() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.cut(&tree, &TreePath::root(), "Google").unwrap();
        let err = clipboard
            .paste(&mut tree, &TreePath::parse("/bookmarks/Gone"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(tree.get(&TreePath::root(), "Google").is_ok());
    }

    #[test]
    fn test_invalidate_deleted_node_and_subtree() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();

        clipboard.cut(&tree, &tech(), "xAI").unwrap();
        let removed = MutationEngine::delete(&mut tree, &TreePath::root(), "Tech").unwrap();
        clipboard.invalidate_deleted(&TreePath::root(), &removed);
        assert!(clipboard.is_empty());

        clipboard.copy(&tree, &TreePath::root(), "Google").unwrap();
        let removed = MutationEngine::delete(&mut tree, &TreePath::root(), "Google").unwrap();
        clipboard.invalidate_deleted(&TreePath::root(), &removed);
        assert!(clipboard.paste(&mut tree, &TreePath::root()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_unrelated_delete_keeps_entry() {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.cut(&tree, &tech(), "xAI").unwrap();
        let removed = MutationEngine::delete(&mut tree, &TreePath::root(), "Google").unwrap();
        clipboard.invalidate_deleted(&TreePath::root(), &removed);
        assert!(!clipboard.is_empty());
    }

    #[test]
    fn test_rebase_origin() {
        let tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        clipboard.cut(&tree, &tech(), "xAI").unwrap();
        clipboard.rebase(&tech(), &TreePath::parse("/bookmarks/Technology"));
        assert_eq!(
            clipboard.peek().unwrap().origin(),
            &TreePath::parse("/bookmarks/Technology")
        );
    }
}
