//! Property-based tests for path handling.
//!
//! These cover parsing, normalization and best-effort resolution against a
//! generated chain of nested folders.

use super::normalize::normalize;
use super::{PathResolver, TreePath};
use crate::node::{DateStamp, ItemSpec};
use crate::operations::MutationEngine;
use crate::tree::TreeStore;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}"
}

fn rooted_path_strategy() -> impl Strategy<Value = TreePath> {
    prop::collection::vec(segment_strategy(), 0..8).prop_map(|parts| {
        parts
            .iter()
            .fold(TreePath::root(), |path, part| path.join(part))
    })
}

/// A tree holding one chain of folders, `/bookmarks/f0/f1/...`.
fn chain(depth: usize) -> TreeStore {
    let mut tree = TreeStore::new();
    let date = DateStamp::from_dmy(1, 1, 2025).unwrap();
    let mut at = TreePath::root();
    for i in 0..depth {
        let name = format!("f{i}");
        MutationEngine::create(&mut tree, &at, ItemSpec::folder(name.clone()), date).unwrap();
        at = at.join(&name);
    }
    tree
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Display then parse gives back the same path
    #[test]
    fn display_parse_roundtrip(path in rooted_path_strategy()) {
        prop_assert_eq!(TreePath::parse(&path.to_string()), path);
    }

    // Normalization is idempotent
    #[test]
    fn normalization_idempotent(path in rooted_path_strategy()) {
        let once = normalize(&TreePath::root(), &path.to_string()).unwrap();
        let twice = normalize(&TreePath::root(), &once.to_string()).unwrap();
        prop_assert_eq!(once, twice);
    }

    // A child path always lies within its parent and rebases onto any other root
    #[test]
    fn join_is_within(path in rooted_path_strategy(), name in segment_strategy()) {
        let child = path.join(&name);
        prop_assert!(child.is_within(&path));
        prop_assert_eq!(child.parent(), Some(path.clone()));

        let other = TreePath::root().join("elsewhere");
        let moved = child.rebase(&path, &other).unwrap();
        prop_assert_eq!(moved, other.join(&name));
    }

    // Resolution depth never exceeds the number of existing folders, and ok
    // holds exactly when every requested segment exists
    #[test]
    fn resolution_truncates_at_first_missing(depth in 0usize..10, requested in 0usize..14) {
        let tree = chain(depth);
        let path = (0..requested).fold(TreePath::root(), |p, i| p.join(&format!("f{i}")));

        let resolution = PathResolver::new().resolve(tree.root_contents(), &path);
        prop_assert_eq!(resolution.depth, requested.min(depth));
        prop_assert_eq!(resolution.ok, requested <= depth);
        prop_assert_eq!(resolution.listing.len(), usize::from(requested < depth));
    }
}
