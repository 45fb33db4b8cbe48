//! Navigation history.
//!
//! [`NavigationStack`] records the folders a caller has entered. It always
//! holds at least one entry; the last entry is the current location. There is
//! no forward stack: going back pops, entering pushes.

use crate::path::TreePath;

/// Stack of visited folder paths.
///
/// The stack does not look at the tree; callers check that a path resolves
/// before pushing it (see `Session::enter`).
///
/// # Examples
///
/// ```
/// use marks::path::TreePath;
/// use marks::NavigationStack;
///
/// let mut history = NavigationStack::new();
/// assert!(!history.can_go_back());
///
/// history.push(TreePath::parse("/bookmarks/Tech"));
/// assert_eq!(history.current().to_string(), "/bookmarks/Tech");
///
/// assert_eq!(history.back(), &TreePath::root());
/// // Going back from the root is a no-op
/// assert_eq!(history.back(), &TreePath::root());
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<TreePath>,
    limit: Option<usize>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    /// Creates a history positioned at the root folder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![TreePath::root()],
            limit: None,
        }
    }

    /// Caps the number of retained entries. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|l| l.max(1));
        self.enforce_limit();
        self
    }

    /// The current location.
    #[must_use]
    pub fn current(&self) -> &TreePath {
        // entries is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// Pushes `path`, making it the current location.
    pub fn push(&mut self, path: TreePath) {
        log::debug!("history: enter {path}");
        self.entries.push(path);
        self.enforce_limit();
    }

    /// Pops the current location if there is somewhere to go back to, and
    /// returns the (possibly unchanged) current location.
    pub fn back(&mut self) -> &TreePath {
        if self.can_go_back() {
            let left = self.entries.pop();
            log::debug!(
                "history: back from {}",
                left.as_ref().map(ToString::to_string).unwrap_or_default()
            );
        }
        self.current()
    }

    /// Returns true when `back` would change the current location.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Number of entries, always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TreePath] {
        &self.entries
    }

    /// Follows a folder rename so recorded paths keep naming the same
    /// folders.
    pub(crate) fn rebase(&mut self, from: &TreePath, to: &TreePath) {
        for entry in &mut self.entries {
            if let Some(rebased) = entry.rebase(from, to) {
                *entry = rebased;
            }
        }
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
    }
}
