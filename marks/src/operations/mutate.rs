//! Mutation operations on the bookmark tree.
//!
//! [`MutationEngine`] is the single place where nodes are created, renamed,
//! deleted and favorited. Every operation:
//! 1. Resolves its folder path strictly (an unknown segment is `NotFound`)
//! 2. Validates the request against the folder's current listing
//! 3. Applies the change in place
//!
//! Nothing is modified unless every check passes, so an error never leaves
//! the tree partially changed.

use crate::error::{Error, Result};
use crate::node::{validate_name, DateStamp, ItemSpec, Node, NodeKind};
use crate::path::{find_in_listing, TreePath};
use crate::tree::{missing_item, TreeStore};

/// Tree mutation operations.
///
/// All operations are associated functions working on a [`TreeStore`].
/// Most callers go through `Session`, which also keeps the clipboard and the
/// navigation history consistent with the change.
pub struct MutationEngine;

impl MutationEngine {
    /// Appends a new node to the folder at `parent`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `parent` does not resolve
    /// - `Validation` if the name is empty, a bookmark URL does not start
    ///   with `http`, or a sibling already has the name
    ///
    /// # Examples
    ///
    /// ```
    /// use marks::operations::MutationEngine;
    /// use marks::path::TreePath;
    /// use marks::{DateStamp, ItemSpec, TreeStore};
    ///
    /// let mut tree = TreeStore::with_sample_data();
    /// let today = DateStamp::from_dmy(1, 3, 2025).unwrap();
    /// let spec = ItemSpec::bookmark("Bing", "https://bing.com");
    ///
    /// let node = MutationEngine::create(&mut tree, &TreePath::root(), spec.clone(), today).unwrap();
    /// assert_eq!(node.date().to_string(), "01/03/2025");
    ///
    /// let again = MutationEngine::create(&mut tree, &TreePath::root(), spec, today);
    /// assert!(again.unwrap_err().is_validation());
    /// ```
    pub fn create(
        tree: &mut TreeStore,
        parent: &TreePath,
        spec: ItemSpec,
        date: DateStamp,
    ) -> Result<Node> {
        spec.validate()?;
        if find_in_listing(tree.listing(parent)?, &spec.name).is_some() {
            return Err(duplicate(parent, &spec.name));
        }

        let id = tree.allocate_id();
        let node = Node::from_spec(id, spec, date);
        tree.listing_mut(parent)?.push(node.clone());
        log::info!("created {} '{}' in {parent}", node.kind(), node.name());
        Ok(node)
    }

    /// Renames `old` in the folder at `path` to `new`.
    ///
    /// Renaming a node to its own name succeeds without change.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the folder or `old` does not exist
    /// - `Validation` if `new` is not a valid name or another sibling
    ///   already uses it
    pub fn rename(tree: &mut TreeStore, path: &TreePath, old: &str, new: &str) -> Result<()> {
        let listing = tree.listing(path)?;
        let target = find_in_listing(listing, old).ok_or_else(|| missing_item(path, old))?;
        validate_name(new)?;
        if listing
            .iter()
            .any(|n| n.name() == new && n.id() != target.id())
        {
            return Err(duplicate(path, new));
        }

        tree.get_mut(path, old)?.meta_mut().name = new.to_string();
        log::info!("renamed '{old}' to '{new}' in {path}");
        Ok(())
    }

    /// Removes `name` from the folder at `path` and returns it. A folder is
    /// removed together with everything below it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the folder or the item does not exist.
    pub fn delete(tree: &mut TreeStore, path: &TreePath, name: &str) -> Result<Node> {
        let listing = tree.listing_mut(path)?;
        let index = listing
            .iter()
            .position(|n| n.name() == name)
            .ok_or_else(|| missing_item(path, name))?;
        let removed = listing.remove(index);
        log::info!(
            "deleted {} '{name}' from {path} ({} descendants)",
            removed.kind(),
            removed.descendant_count()
        );
        Ok(removed)
    }

    /// Flips the favorite flag of a bookmark and returns the new value.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the folder or the item does not exist
    /// - `TypeKind` if the item is a folder
    pub fn toggle_favorite(tree: &mut TreeStore, path: &TreePath, name: &str) -> Result<bool> {
        let node = tree.get_mut(path, name)?;
        if node.is_folder() {
            return Err(Error::TypeKind {
                operation: "favorite".to_string(),
                kind: NodeKind::Folder,
            });
        }
        let meta = node.meta_mut();
        meta.favorite = !meta.favorite;
        log::debug!("favorite of '{name}' in {path} is now {}", meta.favorite);
        Ok(meta.favorite)
    }

    /// Returns the URL a caller should navigate to for a bookmark.
    ///
    /// Folders are entered through the navigation history instead.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the folder or the item does not exist
    /// - `TypeKind` if the item is a folder
    pub fn open(tree: &TreeStore, path: &TreePath, name: &str) -> Result<String> {
        let node = tree.get(path, name)?;
        node.url().map(str::to_string).ok_or_else(|| Error::TypeKind {
            operation: "open".to_string(),
            kind: node.kind(),
        })
    }

    /// Replaces the tags of `name` in the folder at `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the folder or the item does not exist.
    pub fn set_tags(
        tree: &mut TreeStore,
        path: &TreePath,
        name: &str,
        tags: Vec<String>,
    ) -> Result<()> {
        let node = tree.get_mut(path, name)?;
        node.meta_mut().tags = tags;
        log::debug!("retagged '{name}' in {path}");
        Ok(())
    }
}

pub(crate) fn duplicate(path: &TreePath, name: &str) -> Error {
    Error::validation("name", format!("'{name}' already exists in {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> DateStamp {
        DateStamp::from_dmy(1, 3, 2025).unwrap()
    }

    fn tech() -> TreePath {
        TreePath::parse("/bookmarks/Tech")
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut tree = TreeStore::with_sample_data();
        MutationEngine::create(&mut tree, &TreePath::root(), ItemSpec::folder("Work"), today())
            .unwrap();
        let names: Vec<_> = tree.root_contents().iter().map(Node::name).collect();
        assert_eq!(names, ["Tech", "Google", "Work"]);
    }

    #[test]
    fn test_create_rejects_invalid_input_without_change() {
        let mut tree = TreeStore::with_sample_data();
        let before = tree.len();
        for spec in [
            ItemSpec::folder(""),
            ItemSpec::bookmark("Bad", "example.com"),
            ItemSpec::bookmark("Tech", "https://tech.example"),
        ] {
            let err = MutationEngine::create(&mut tree, &TreePath::root(), spec, today()).unwrap_err();
            assert!(err.is_validation(), "{err}");
        }
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn test_create_unresolved_parent_is_not_found() {
        let mut tree = TreeStore::with_sample_data();
        let err = MutationEngine::create(
            &mut tree,
            &TreePath::parse("/bookmarks/Missing"),
            ItemSpec::folder("x"),
            today(),
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(tree.root_contents().len(), 2);
    }

    #[test]
    fn test_create_name_is_case_sensitive() {
        let mut tree = TreeStore::with_sample_data();
        assert!(
            MutationEngine::create(&mut tree, &TreePath::root(), ItemSpec::folder("tech"), today())
                .is_ok()
        );
    }

    #[test]
    fn test_rename() {
        let mut tree = TreeStore::with_sample_data();
        MutationEngine::rename(&mut tree, &tech(), "GitHub", "GitLab").unwrap();
        assert!(tree.get(&tech(), "GitLab").is_ok());
        assert!(tree.get(&tech(), "GitHub").is_err());
    }

    #[test]
    fn test_rename_to_same_name_is_allowed() {
        let mut tree = TreeStore::with_sample_data();
        MutationEngine::rename(&mut tree, &tech(), "xAI", "xAI").unwrap();
        assert_eq!(tree.get(&tech(), "xAI").unwrap().name(), "xAI");
    }

    #[test]
    fn test_rename_errors() {
        let mut tree = TreeStore::with_sample_data();
        assert!(MutationEngine::rename(&mut tree, &tech(), "Nope", "x")
            .unwrap_err()
            .is_not_found());
        assert!(MutationEngine::rename(&mut tree, &tech(), "xAI", "GitHub")
            .unwrap_err()
            .is_validation());
        assert!(MutationEngine::rename(&mut tree, &tech(), "xAI", "")
            .unwrap_err()
            .is_validation());
        assert!(tree.get(&tech(), "xAI").is_ok());
    }

    #[test]
    fn test_delete_folder_removes_subtree() {
        let mut tree = TreeStore::with_sample_data();
        let removed = MutationEngine::delete(&mut tree, &TreePath::root(), "Tech").unwrap();
        assert_eq!(removed.descendant_count(), 2);
        assert_eq!(tree.len(), 1);
        assert!(!tree.resolve(&tech()).ok);
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = TreeStore::with_sample_data();
        assert!(MutationEngine::delete(&mut tree, &TreePath::root(), "Bing")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_toggle_favorite_involution() {
        let mut tree = TreeStore::with_sample_data();
        assert!(!MutationEngine::toggle_favorite(&mut tree, &tech(), "xAI").unwrap());
        assert!(MutationEngine::toggle_favorite(&mut tree, &tech(), "xAI").unwrap());
        assert!(tree.get(&tech(), "xAI").unwrap().is_favorite());
    }

    #[test]
    fn test_toggle_favorite_on_folder_is_type_error() {
        let mut tree = TreeStore::with_sample_data();
        let err = MutationEngine::toggle_favorite(&mut tree, &TreePath::root(), "Tech").unwrap_err();
        assert!(err.is_type_kind());
        assert!(!tree.get(&TreePath::root(), "Tech").unwrap().is_favorite());
    }

    #[test]
    fn test_open() {
        let tree = TreeStore::with_sample_data();
        assert_eq!(
            MutationEngine::open(&tree, &TreePath::root(), "Google").unwrap(),
            "https://google.com"
        );
        assert!(MutationEngine::open(&tree, &TreePath::root(), "Tech")
            .unwrap_err()
            .is_type_kind());
    }

    #[test]
    fn test_set_tags() {
        let mut tree = TreeStore::with_sample_data();
        MutationEngine::set_tags(&mut tree, &TreePath::root(), "Tech", vec!["a".into(), "a".into()])
            .unwrap();
        assert_eq!(tree.get(&TreePath::root(), "Tech").unwrap().tags(), ["a", "a"]);
    }
}
