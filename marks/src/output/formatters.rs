//! Output formatter implementations.

use crate::node::{ListingItem, NodeKind};
use crate::{Error, Result};

use super::OutputFormatter;

pub(crate) const FOLDER_ICON: &str = "📁";
pub(crate) const BOOKMARK_ICON: &str = "🔖";
pub(crate) const FAVORITE_MARK: &str = "⭐";

pub(crate) fn icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Folder => FOLDER_ICON,
        NodeKind::Bookmark => BOOKMARK_ICON,
    }
}

/// Formatter for human-readable output.
///
/// One line per item: icon, name, child count or URL, favorite star, tags,
/// date.
///
/// # Examples
///
/// ```
/// use marks::output::{HumanFormatter, OutputFormatter};
/// use marks::TreeStore;
///
/// let tree = TreeStore::with_sample_data();
/// let items: Vec<_> = tree.root_contents().iter().map(|n| n.to_listing_item()).collect();
/// let text = HumanFormatter.format(&items).unwrap();
/// assert!(text.contains("Tech (2 items)"));
/// ```
pub struct HumanFormatter;

impl HumanFormatter {
    fn line(item: &ListingItem) -> String {
        let mut line = format!("{} ", icon(item.kind));
        match (item.child_count, &item.url) {
            (Some(count), _) => {
                let noun = if count == 1 { "item" } else { "items" };
                line.push_str(&format!("{} ({count} {noun})", item.name));
            }
            (None, Some(url)) => line.push_str(&format!("{} <{url}>", item.name)),
            (None, None) => line.push_str(&item.name),
        }
        if item.favorite {
            line.push(' ');
            line.push_str(FAVORITE_MARK);
        }
        if !item.tags.is_empty() {
            line.push_str(&format!("  [{}]", item.tags.join(", ")));
        }
        line.push_str(&format!("  {}", item.date));
        line
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, items: &[ListingItem]) -> Result<String> {
        if items.is_empty() {
            return Ok("(empty folder)".to_string());
        }
        Ok(items.iter().map(Self::line).collect::<Vec<_>>().join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, items: &[ListingItem]) -> Result<String> {
        Ok(serde_json::to_string_pretty(items)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, items: &[ListingItem]) -> Result<String> {
        serde_yaml::to_string(items).map_err(|e| Error::Validation {
            field: "yaml_output".to_string(),
            message: format!("failed to serialize to YAML: {e}"),
        })
    }
}
