//! Path normalization for user-typed locations.
//!
//! Interactive callers type locations relative to where they are (`Tech`,
//! `../Work`, `.`) as well as absolute ones (`/bookmarks/Tech`). This module
//! turns such input into a [`TreePath`]:
//! - Inputs starting with `/` are parsed as absolute paths
//! - Other inputs are appended to the base path
//! - `.` components are dropped and `..` components pop one folder

use crate::error::{Error, Result};
use crate::path::TreePath;

/// Resolve `.` and `..` components of a rooted path.
///
/// # Errors
///
/// Returns a validation error if a `..` component would climb above the root
/// folder.
///
/// # Examples
///
/// ```
/// use marks::path::normalize::resolve_components;
/// use marks::path::TreePath;
///
/// let resolved = resolve_components(&TreePath::parse("/bookmarks/a/./b/../c")).unwrap();
/// assert_eq!(resolved.to_string(), "/bookmarks/a/c");
///
/// assert!(resolve_components(&TreePath::parse("/bookmarks/..")).is_err());
/// ```
pub fn resolve_components(path: &TreePath) -> Result<TreePath> {
    let mut segments: Vec<String> = Vec::with_capacity(path.segments().len());

    for segment in path.segments() {
        match segment.as_str() {
            "." => {}
            ".." => {
                // The root marker can never be popped.
                if segments.len() <= 1 {
                    return Err(Error::validation(
                        "path",
                        format!("'{path}' climbs above the root folder"),
                    ));
                }
                segments.pop();
            }
            _ => segments.push(segment.clone()),
        }
    }

    Ok(TreePath::from_segments(segments))
}

/// Normalize user input against the current location.
///
/// # Errors
///
/// Returns an error if `..` components climb above the root folder.
///
/// # Examples
///
/// ```
/// use marks::path::normalize::normalize;
/// use marks::path::TreePath;
///
/// let here = TreePath::parse("/bookmarks/Tech");
/// assert_eq!(normalize(&here, "AI").unwrap().to_string(), "/bookmarks/Tech/AI");
/// assert_eq!(normalize(&here, "..").unwrap(), TreePath::root());
/// assert_eq!(normalize(&here, "/bookmarks").unwrap(), TreePath::root());
/// ```
pub fn normalize(base: &TreePath, input: &str) -> Result<TreePath> {
    let input = input.trim();
    let combined = if input.starts_with('/') {
        TreePath::parse(input)
    } else {
        let mut segments = base.segments().to_vec();
        segments.extend(
            input
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        TreePath::from_segments(segments)
    };

    resolve_components(&combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_components_simple() {
        let resolved = resolve_components(&TreePath::parse("/bookmarks/a/./b/../c")).unwrap();
        assert_eq!(resolved, TreePath::parse("/bookmarks/a/c"));
    }

    #[test]
    fn test_resolve_components_multiple_parent() {
        let resolved = resolve_components(&TreePath::parse("/bookmarks/a/b/../../c")).unwrap();
        assert_eq!(resolved, TreePath::parse("/bookmarks/c"));
    }

    #[test]
    fn test_resolve_components_root_only() {
        let resolved = resolve_components(&TreePath::root()).unwrap();
        assert_eq!(resolved, TreePath::root());
    }

    #[test]
    fn test_resolve_components_too_many_parent() {
        let result = resolve_components(&TreePath::parse("/bookmarks/a/../.."));
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_normalize_relative() {
        let base = TreePath::parse("/bookmarks/Tech");
        assert_eq!(
            normalize(&base, "AI/Models").unwrap(),
            TreePath::parse("/bookmarks/Tech/AI/Models")
        );
        assert_eq!(normalize(&base, ".").unwrap(), base);
        assert_eq!(normalize(&base, "").unwrap(), base);
    }

    #[test]
    fn test_normalize_absolute_ignores_base() {
        let base = TreePath::parse("/bookmarks/Tech");
        assert_eq!(
            normalize(&base, "/bookmarks/Work/").unwrap(),
            TreePath::parse("/bookmarks/Work")
        );
    }

    #[test]
    fn test_normalize_parent_of_root_fails() {
        assert!(normalize(&TreePath::root(), "..").is_err());
    }
}
