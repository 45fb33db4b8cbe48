//! Whole-tree rendering.

use crate::path::ROOT_MARKER;
use crate::tree::TreeStore;

use super::formatters::{icon, FAVORITE_MARK};

/// Draws every node of `tree`, indented two spaces per level below the root.
///
/// # Examples
///
/// ```
/// use marks::output::render_tree;
/// use marks::TreeStore;
///
/// let text = render_tree(&TreeStore::with_sample_data());
/// assert_eq!(text.lines().next(), Some("bookmarks"));
/// assert!(text.contains("    🔖 xAI ⭐"));
/// ```
#[must_use]
pub fn render_tree(tree: &TreeStore) -> String {
    let mut lines = vec![ROOT_MARKER.to_string()];
    for (parent, node) in tree.walk() {
        let depth = parent.folders().len() + 1;
        let mut line = format!("{}{} {}", "  ".repeat(depth), icon(node.kind()), node.name());
        if node.is_favorite() {
            line.push(' ');
            line.push_str(FAVORITE_MARK);
        }
        lines.push(line);
    }
    lines.join("\n")
}
