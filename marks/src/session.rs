//! The session context.
//!
//! A [`Session`] bundles everything one caller works with: the tree, the
//! navigation history, the clipboard and a clock for stamping new nodes.
//! There are no globals; callers own a session and pass it by reference.
//!
//! Every method runs to completion before returning, and all mutating
//! methods take `&mut self`, so a session is never observed half-changed.
//! Embeddings with several threads should wrap the whole session in a single
//! `Mutex` rather than locking parts of it.

use std::fmt;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::history::NavigationStack;
use crate::node::{DateStamp, ItemSpec, Node, NodeKind};
use crate::operations::{ClipboardManager, MutationEngine};
use crate::path::{Resolution, TreePath};
use crate::tree::TreeStore;

/// Source of creation dates.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The date to stamp on nodes created now.
    fn today(&self) -> DateStamp;
}

/// Clock reading the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DateStamp {
        DateStamp::today()
    }
}

/// Clock that always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateStamp);

impl Clock for FixedClock {
    fn today(&self) -> DateStamp {
        self.0
    }
}

/// One caller's working context.
///
/// # Examples
///
/// ```
/// use marks::path::TreePath;
/// use marks::{ItemSpec, Session};
///
/// let mut session = Session::with_sample_data();
/// session.enter(&TreePath::parse("/bookmarks/Tech")).unwrap();
/// assert_eq!(session.current_listing().listing.len(), 2);
///
/// session
///     .create(&TreePath::root(), ItemSpec::bookmark("Bing", "https://bing.com"))
///     .unwrap();
/// assert_eq!(session.back().to_string(), "/bookmarks");
/// assert_eq!(session.current_listing().listing.len(), 3);
/// ```
pub struct Session {
    tree: TreeStore,
    history: NavigationStack,
    clipboard: ClipboardManager,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("tree", &self.tree)
            .field("history", &self.history)
            .field("clipboard", &self.clipboard)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TreeStore::new())
    }
}

impl Session {
    /// Starts a session over `tree`, positioned at the root.
    #[must_use]
    pub fn new(tree: TreeStore) -> Self {
        Self {
            tree,
            history: NavigationStack::new(),
            clipboard: ClipboardManager::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Starts a session over the starter bookmarks.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::new(TreeStore::with_sample_data())
    }

    /// Starts a session as described by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let tree = if config.sample_data.unwrap_or(true) {
            TreeStore::with_sample_data()
        } else {
            TreeStore::new()
        };
        let mut session = Self::new(tree);
        session.history = NavigationStack::new().with_limit(config.history_limit);
        session
    }

    /// Replaces the clock used to date new nodes.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The tree.
    #[must_use]
    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    /// The navigation history.
    #[must_use]
    pub fn history(&self) -> &NavigationStack {
        &self.history
    }

    /// The clipboard.
    #[must_use]
    pub fn clipboard(&self) -> &ClipboardManager {
        &self.clipboard
    }

    /// The current location.
    #[must_use]
    pub fn current(&self) -> &TreePath {
        self.history.current()
    }

    /// Best-effort resolution of `path`.
    #[must_use]
    pub fn resolve(&self, path: &TreePath) -> Resolution<'_> {
        self.tree.resolve(path)
    }

    /// Resolution of the current location.
    #[must_use]
    pub fn current_listing(&self) -> Resolution<'_> {
        self.tree.resolve(self.history.current())
    }

    /// Enters the folder at `path`, pushing it onto the history.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` unless every segment of `path` names a folder; the
    /// history is unchanged in that case.
    pub fn enter(&mut self, path: &TreePath) -> Result<&TreePath> {
        self.tree.listing(path)?;
        self.history.push(path.clone());
        Ok(self.history.current())
    }

    /// Enters the child folder `name` of the current location.
    ///
    /// # Errors
    ///
    /// - `NotFound` if there is no such item
    /// - `TypeKind` if the item is a bookmark
    pub fn enter_child(&mut self, name: &str) -> Result<&TreePath> {
        let here = self.history.current().clone();
        let node = self.tree.get(&here, name)?;
        if !node.is_folder() {
            return Err(Error::TypeKind {
                operation: "enter".to_string(),
                kind: NodeKind::Bookmark,
            });
        }
        self.history.push(here.join(name));
        Ok(self.history.current())
    }

    /// Goes back one step; a no-op at the first entry.
    pub fn back(&mut self) -> &TreePath {
        self.history.back()
    }

    /// See [`MutationEngine::create`].
    ///
    /// # Errors
    ///
    /// As for [`MutationEngine::create`].
    pub fn create(&mut self, parent: &TreePath, spec: ItemSpec) -> Result<Node> {
        let today = self.clock.today();
        MutationEngine::create(&mut self.tree, parent, spec, today)
    }

    /// See [`MutationEngine::rename`]. Renaming a folder also updates history
    /// entries and the clipboard origin that point into it.
    ///
    /// # Errors
    ///
    /// As for [`MutationEngine::rename`].
    pub fn rename(&mut self, path: &TreePath, old: &str, new: &str) -> Result<()> {
        let is_folder = self.tree.get(path, old)?.is_folder();
        MutationEngine::rename(&mut self.tree, path, old, new)?;
        if is_folder && old != new {
            let from = path.join(old);
            let to = path.join(new);
            self.history.rebase(&from, &to);
            self.clipboard.rebase(&from, &to);
        }
        Ok(())
    }

    /// See [`MutationEngine::delete`]. A clipboard entry that depended on the
    /// deleted node is dropped.
    ///
    /// # Errors
    ///
    /// As for [`MutationEngine::delete`].
    pub fn delete(&mut self, path: &TreePath, name: &str) -> Result<Node> {
        let removed = MutationEngine::delete(&mut self.tree, path, name)?;
        self.clipboard.invalidate_deleted(path, &removed);
        Ok(removed)
    }

    /// See [`MutationEngine::toggle_favorite`].
    ///
    /// # Errors
    ///
    /// As for [`MutationEngine::toggle_favorite`].
    pub fn toggle_favorite(&mut self, path: &TreePath, name: &str) -> Result<bool> {
        MutationEngine::toggle_favorite(&mut self.tree, path, name)
    }

    /// See [`MutationEngine::open`].
    ///
    /// # Errors
    ///
    /// As for [`MutationEngine::open`].
    pub fn open(&self, path: &TreePath, name: &str) -> Result<String> {
        MutationEngine::open(&self.tree, path, name)
    }

    /// See [`MutationEngine::set_tags`].
    ///
    /// # Errors
    ///
    /// As for [`MutationEngine::set_tags`].
    pub fn set_tags(&mut self, path: &TreePath, name: &str, tags: Vec<String>) -> Result<()> {
        MutationEngine::set_tags(&mut self.tree, path, name, tags)
    }

    /// See [`ClipboardManager::cut`].
    ///
    /// # Errors
    ///
    /// As for [`ClipboardManager::cut`].
    pub fn cut(&mut self, path: &TreePath, name: &str) -> Result<()> {
        self.clipboard.cut(&self.tree, path, name)
    }

    /// See [`ClipboardManager::copy`].
    ///
    /// # Errors
    ///
    /// As for [`ClipboardManager::copy`].
    pub fn copy(&mut self, path: &TreePath, name: &str) -> Result<()> {
        self.clipboard.copy(&self.tree, path, name)
    }

    /// See [`ClipboardManager::paste`].
    ///
    /// # Errors
    ///
    /// As for [`ClipboardManager::paste`].
    pub fn paste(&mut self, dest: &TreePath) -> Result<Node> {
        self.clipboard.paste(&mut self.tree, dest)
    }
}
