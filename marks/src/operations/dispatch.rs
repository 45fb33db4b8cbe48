//! Command interface over a session.
//!
//! Front ends describe what the user asked for as a [`Command`] and hand it
//! to [`dispatch`]. The result is an [`Outcome`] describing what changed, so
//! presentation code never reaches into the tree itself.

use crate::error::Result;
use crate::node::{ItemSpec, ListingItem, Node};
use crate::path::TreePath;
use crate::session::Session;

/// A user intent addressed at a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List a folder (best-effort).
    List {
        /// Folder to list.
        path: TreePath,
    },
    /// Enter a folder by absolute path.
    Enter {
        /// Folder to enter.
        path: TreePath,
    },
    /// Enter a child folder of the current location.
    EnterChild {
        /// Child folder name.
        name: String,
    },
    /// Go back one step in the history.
    Back,
    /// Create a node.
    Create {
        /// Destination folder.
        parent: TreePath,
        /// What to create.
        spec: ItemSpec,
    },
    /// Rename a node.
    Rename {
        /// Folder holding the node.
        path: TreePath,
        /// Current name.
        old: String,
        /// New name.
        new: String,
    },
    /// Delete a node and everything below it.
    Delete {
        /// Folder holding the node.
        path: TreePath,
        /// Node name.
        name: String,
    },
    /// Flip a bookmark's favorite flag.
    ToggleFavorite {
        /// Folder holding the bookmark.
        path: TreePath,
        /// Bookmark name.
        name: String,
    },
    /// Get a bookmark's URL.
    Open {
        /// Folder holding the bookmark.
        path: TreePath,
        /// Bookmark name.
        name: String,
    },
    /// Replace a node's tags.
    SetTags {
        /// Folder holding the node.
        path: TreePath,
        /// Node name.
        name: String,
        /// New tags.
        tags: Vec<String>,
    },
    /// Put a node on the clipboard for moving.
    Cut {
        /// Folder holding the node.
        path: TreePath,
        /// Node name.
        name: String,
    },
    /// Put a snapshot of a node on the clipboard.
    Copy {
        /// Folder holding the node.
        path: TreePath,
        /// Node name.
        name: String,
    },
    /// Insert the clipboard node.
    Paste {
        /// Destination folder.
        dest: TreePath,
    },
}

/// What a dispatched command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A folder listing.
    Listing {
        /// Items in listing order.
        items: Vec<ListingItem>,
        /// False if resolution stopped early.
        ok: bool,
    },
    /// The current location after a navigation command.
    Location(TreePath),
    /// A node was created or pasted.
    Inserted(Node),
    /// A node was removed.
    Removed(Node),
    /// The new favorite value.
    Favorite(bool),
    /// The URL to navigate to.
    Url(String),
    /// The command succeeded with nothing to report.
    Done,
}

/// Runs `command` against `session`.
///
/// # Errors
///
/// Returns whatever error the underlying operation reports; the session is
/// unchanged in that case.
///
/// # Examples
///
/// ```
/// use marks::operations::{dispatch, Command, Outcome};
/// use marks::path::TreePath;
/// use marks::Session;
///
/// let mut session = Session::with_sample_data();
/// let outcome = dispatch(
///     &mut session,
///     Command::EnterChild { name: "Tech".to_string() },
/// )
/// .unwrap();
/// assert_eq!(outcome, Outcome::Location(TreePath::parse("/bookmarks/Tech")));
/// ```
pub fn dispatch(session: &mut Session, command: Command) -> Result<Outcome> {
    log::trace!("dispatch {command:?}");
    match command {
        Command::List { path } => {
            let resolution = session.resolve(&path);
            Ok(Outcome::Listing {
                items: resolution.listing.iter().map(Node::to_listing_item).collect(),
                ok: resolution.ok,
            })
        }
        Command::Enter { path } => session.enter(&path).cloned().map(Outcome::Location),
        Command::EnterChild { name } => session.enter_child(&name).cloned().map(Outcome::Location),
        Command::Back => Ok(Outcome::Location(session.back().clone())),
        Command::Create { parent, spec } => session.create(&parent, spec).map(Outcome::Inserted),
        Command::Rename { path, old, new } => {
            session.rename(&path, &old, &new).map(|()| Outcome::Done)
        }
        Command::Delete { path, name } => session.delete(&path, &name).map(Outcome::Removed),
        Command::ToggleFavorite { path, name } => {
            session.toggle_favorite(&path, &name).map(Outcome::Favorite)
        }
        Command::Open { path, name } => session.open(&path, &name).map(Outcome::Url),
        Command::SetTags { path, name, tags } => {
            session.set_tags(&path, &name, tags).map(|()| Outcome::Done)
        }
        Command::Cut { path, name } => session.cut(&path, &name).map(|()| Outcome::Done),
        Command::Copy { path, name } => session.copy(&path, &name).map(|()| Outcome::Done),
        Command::Paste { dest } => session.paste(&dest).map(Outcome::Inserted),
    }
}
