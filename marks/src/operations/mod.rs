//! Tree operations.
//!
//! This module holds everything that changes the tree:
//!
//! - [`MutationEngine`]: create, rename, delete, favorite, open, retag
//! - [`ClipboardManager`]: cut, copy and paste
//! - [`dispatch`]: a single command entry point over a `Session`
//!
//! # Examples
//!
//! ```
//! use marks::operations::{dispatch, Command, Outcome};
//! use marks::path::TreePath;
//! use marks::{ItemSpec, Session};
//!
//! let mut session = Session::with_sample_data();
//!
//! let created = dispatch(
//!     &mut session,
//!     Command::Create {
//!         parent: TreePath::root(),
//!         spec: ItemSpec::bookmark("Bing", "https://bing.com"),
//!     },
//! );
//! assert!(matches!(created, Ok(Outcome::Inserted(_))));
//!
//! let duplicate = dispatch(
//!     &mut session,
//!     Command::Create {
//!         parent: TreePath::root(),
//!         spec: ItemSpec::bookmark("Bing", "https://bing.com"),
//!     },
//! );
//! assert!(duplicate.unwrap_err().is_validation());
//! ```

pub mod clipboard;
pub mod dispatch;
pub mod mutate;

#[cfg(test)]
mod proptests;

pub use clipboard::{ClipboardEntry, ClipboardManager, ClipboardMode};
pub use dispatch::{dispatch, Command, Outcome};
pub use mutate::MutationEngine;
