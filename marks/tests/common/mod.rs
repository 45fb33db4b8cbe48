//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for sessions and trees used by the
//! marks integration tests.

use marks::path::TreePath;
use marks::{DateStamp, FixedClock, ItemSpec, Session, TreeStore};

/// The date every fixture node is created on.
pub fn fixture_date() -> DateStamp {
    DateStamp::from_dmy(15, 3, 2025).unwrap()
}

/// Shorthand for parsing a path.
pub fn path(s: &str) -> TreePath {
    TreePath::parse(s)
}

/// Builder for sessions with a predictable clock and extra nodes.
///
/// # Examples
///
/// ```no_run
/// # use common::SessionFixture;
/// let session = SessionFixture::sample()
///     .with_folder("/bookmarks", "Work")
///     .with_bookmark("/bookmarks/Work", "Docs", "https://docs.rs")
///     .build();
/// ```
pub struct SessionFixture {
    sample_data: bool,
    items: Vec<(TreePath, ItemSpec)>,
}

#[allow(dead_code)]
impl SessionFixture {
    /// Starts from the starter bookmarks.
    pub fn sample() -> Self {
        Self {
            sample_data: true,
            items: Vec::new(),
        }
    }

    /// Starts from an empty root folder.
    pub fn empty() -> Self {
        Self {
            sample_data: false,
            items: Vec::new(),
        }
    }

    /// Adds a folder under `parent`.
    pub fn with_folder(mut self, parent: &str, name: &str) -> Self {
        self.items.push((path(parent), ItemSpec::folder(name)));
        self
    }

    /// Adds a bookmark under `parent`.
    pub fn with_bookmark(mut self, parent: &str, name: &str, url: &str) -> Self {
        self.items.push((path(parent), ItemSpec::bookmark(name, url)));
        self
    }

    /// Builds the session.
    ///
    /// # Panics
    ///
    /// Panics if any fixture item cannot be created. This is acceptable in
    /// test code where we want to fail fast on invalid fixtures.
    pub fn build(self) -> Session {
        let tree = if self.sample_data {
            TreeStore::with_sample_data()
        } else {
            TreeStore::new()
        };
        let mut session = Session::new(tree).with_clock(Box::new(FixedClock(fixture_date())));
        for (parent, spec) in self.items {
            session
                .create(&parent, spec)
                .expect("fixture item should be creatable");
        }
        session
    }
}

/// Names in the listing at `p`, in order, or `None` if it does not resolve.
#[allow(dead_code)]
pub fn names_at(session: &Session, p: &str) -> Option<Vec<String>> {
    let resolution = session.resolve(&path(p));
    resolution.ok.then(|| {
        resolution
            .listing
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    })
}
