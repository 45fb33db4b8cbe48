//! Property-based tests for tree operations.
//!
//! These tests drive random command sequences and check that node counts and
//! name uniqueness hold after every step.

use crate::node::{DateStamp, ItemSpec, Node};
use crate::operations::{ClipboardManager, MutationEngine};
use crate::path::TreePath;
use crate::tree::TreeStore;
use proptest::prelude::*;
use std::collections::HashSet;

fn date() -> DateStamp {
    DateStamp::from_dmy(1, 1, 2025).unwrap()
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][a-z0-9 ]{0,8}"
}

fn spec_strategy() -> impl Strategy<Value = ItemSpec> {
    (name_strategy(), any::<bool>()).prop_map(|(name, folder)| {
        if folder {
            ItemSpec::folder(name)
        } else {
            ItemSpec::bookmark(name, "https://example.com")
        }
    })
}

fn names_unique(listing: &[Node]) -> bool {
    let mut seen = HashSet::new();
    listing.iter().all(|n| {
        seen.insert(n.name().to_string()) && n.contents().map_or(true, names_unique)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Successful creates grow the tree by one; rejected ones leave it alone
    #[test]
    fn create_changes_count_by_at_most_one(specs in prop::collection::vec(spec_strategy(), 1..20)) {
        let mut tree = TreeStore::with_sample_data();
        for spec in specs {
            let before = tree.len();
            match MutationEngine::create(&mut tree, &TreePath::root(), spec, date()) {
                Ok(_) => prop_assert_eq!(tree.len(), before + 1),
                Err(e) => {
                    prop_assert!(e.is_validation());
                    prop_assert_eq!(tree.len(), before);
                }
            }
            prop_assert!(names_unique(tree.root_contents()));
        }
    }

    // Create followed by delete restores the original tree
    #[test]
    fn create_then_delete_restores(spec in spec_strategy()) {
        let mut tree = TreeStore::with_sample_data();
        let before = tree.clone();
        let name = spec.name.clone();
        if MutationEngine::create(&mut tree, &TreePath::root(), spec, date()).is_ok() {
            MutationEngine::delete(&mut tree, &TreePath::root(), &name).unwrap();
        }
        prop_assert_eq!(tree.root_contents(), before.root_contents());
    }

    // Cut and paste moves a node without changing the total count
    #[test]
    fn cut_paste_conserves_count(move_google in any::<bool>()) {
        let mut tree = TreeStore::with_sample_data();
        let mut clipboard = ClipboardManager::new();
        let (from, name, dest) = if move_google {
            (TreePath::root(), "Google", TreePath::parse("/bookmarks/Tech"))
        } else {
            (TreePath::parse("/bookmarks/Tech"), "xAI", TreePath::root())
        };
        let before = tree.len();
        clipboard.cut(&tree, &from, name).unwrap();
        clipboard.paste(&mut tree, &dest).unwrap();
        prop_assert_eq!(tree.len(), before);
        prop_assert!(tree.get(&from, name).is_err());
        prop_assert!(tree.get(&dest, name).is_ok());
        prop_assert!(clipboard.is_empty());
    }

    // Each copy paste adds the whole subtree, and the ids stay unique
    #[test]
    fn copy_paste_adds_subtree(folder_name in name_strategy()) {
        let mut tree = TreeStore::with_sample_data();
        prop_assume!(folder_name != "Tech" && folder_name != "Google");
        MutationEngine::create(&mut tree, &TreePath::root(), ItemSpec::folder(folder_name.clone()), date()).unwrap();

        let mut clipboard = ClipboardManager::new();
        clipboard.copy(&tree, &TreePath::root(), "Tech").unwrap();
        let before = tree.len();
        let pasted = clipboard.paste(&mut tree, &TreePath::root().join(&folder_name)).unwrap();
        prop_assert_eq!(tree.len(), before + 1 + pasted.descendant_count());
        prop_assert!(!clipboard.is_empty());

        let ids: HashSet<_> = tree.walk().iter().map(|(_, n)| n.id()).collect();
        prop_assert_eq!(ids.len(), tree.len());
    }
}
