#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # marks
//!
//! A library for organizing bookmarks in an in-memory folder tree.
//!
//! The tree is rooted at a single folder addressed as `/bookmarks`. Callers
//! navigate it, create, rename and delete folders and bookmarks, and move or
//! duplicate subtrees through a clipboard.
//!
//! ## Core Types
//!
//! - [`TreeStore`]: owner of the tree
//! - [`path::PathResolver`] and [`path::TreePath`]: addressing folders
//! - [`NavigationStack`]: visited folders with back navigation
//! - [`MutationEngine`] and [`ClipboardManager`]: changing the tree
//! - [`Session`] and [`dispatch`]: one caller's context and command entry point
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use marks::path::TreePath;
//! use marks::{ItemSpec, Session};
//!
//! let mut session = Session::with_sample_data();
//! session.enter_child("Tech").unwrap();
//!
//! let here = session.current().clone();
//! session.create(&here, ItemSpec::folder("AI")).unwrap();
//! session.cut(&here, "xAI").unwrap();
//! session.paste(&here.join("AI")).unwrap();
//!
//! let ai = session.resolve(&TreePath::parse("/bookmarks/Tech/AI"));
//! assert!(ai.ok);
//! assert_eq!(ai.listing[0].name(), "xAI");
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod node;
pub mod operations;
pub mod output;
pub mod path;
pub mod session;
pub mod tree;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use history::NavigationStack;
pub use logging::{init_logger, LogLevel, Logger};
pub use node::{
    parse_tags, validate_name, DateStamp, ItemSpec, ListingItem, Node, NodeId, NodeKind,
};
pub use operations::{
    dispatch, ClipboardEntry, ClipboardManager, ClipboardMode, Command, MutationEngine, Outcome,
};
pub use session::{Clock, FixedClock, Session, SystemClock};
pub use tree::TreeStore;
