//! Node types for the bookmark tree.
//!
//! A tree is made of [`Node`]s, each either a folder that owns an ordered
//! list of children or a bookmark that carries a URL. Both variants share a
//! name, a creation date, free-form tags and a favorite flag.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Display and parse format for node dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Identity of a node within one session.
///
/// Ids are assigned when a node enters the tree (on create, or on paste of a
/// copy) and survive rename and move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two kinds of node.
///
/// # Examples
///
/// ```
/// use marks::NodeKind;
///
/// assert_eq!("folder".parse::<NodeKind>().unwrap(), NodeKind::Folder);
/// assert_eq!("Bookmark".parse::<NodeKind>().unwrap(), NodeKind::Bookmark);
/// assert!("link".parse::<NodeKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A container of other nodes.
    Folder,
    /// A leaf carrying a URL.
    Bookmark,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::Bookmark => write!(f, "bookmark"),
        }
    }
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "folder" => Ok(Self::Folder),
            "bookmark" => Ok(Self::Bookmark),
            _ => Err(Error::validation(
                "kind",
                format!("unknown node kind '{s}' (expected folder or bookmark)"),
            )),
        }
    }
}

/// A calendar date shown as `DD/MM/YYYY`.
///
/// # Examples
///
/// ```
/// use marks::DateStamp;
///
/// let date: DateStamp = "28/02/2025".parse().unwrap();
/// assert_eq!(date.to_string(), "28/02/2025");
/// assert!("2025-02-28".parse::<DateStamp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateStamp(NaiveDate);

impl DateStamp {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from day, month and year.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the combination is not a real date.
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                Error::validation("date", format!("{day:02}/{month:02}/{year} is not a date"))
            })
    }

    /// Today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateStamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| Error::validation("date", format!("'{s}' is not DD/MM/YYYY: {e}")))
    }
}

impl Serialize for DateStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields shared by both node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMeta {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) date: DateStamp,
    pub(crate) tags: Vec<String>,
    pub(crate) favorite: bool,
}

/// A node in the bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A folder owning its children in insertion order.
    Folder {
        /// Shared fields.
        meta: NodeMeta,
        /// Child nodes.
        contents: Vec<Node>,
    },
    /// A bookmark pointing at a URL.
    Bookmark {
        /// Shared fields.
        meta: NodeMeta,
        /// Target URL.
        url: String,
    },
}

impl Node {
    /// Builds a node from validated caller input.
    pub(crate) fn from_spec(id: NodeId, spec: ItemSpec, date: DateStamp) -> Self {
        let meta = NodeMeta {
            id,
            name: spec.name,
            date,
            tags: spec.tags,
            favorite: spec.favorite,
        };
        match spec.kind {
            NodeKind::Folder => Self::Folder {
                meta,
                contents: Vec::new(),
            },
            NodeKind::Bookmark => Self::Bookmark {
                meta,
                url: spec.url.unwrap_or_default(),
            },
        }
    }

    pub(crate) fn meta(&self) -> &NodeMeta {
        match self {
            Self::Folder { meta, .. } | Self::Bookmark { meta, .. } => meta,
        }
    }

    pub(crate) fn meta_mut(&mut self) -> &mut NodeMeta {
        match self {
            Self::Folder { meta, .. } | Self::Bookmark { meta, .. } => meta,
        }
    }

    /// The node's kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder { .. } => NodeKind::Folder,
            Self::Bookmark { .. } => NodeKind::Bookmark,
        }
    }

    /// Session identity of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.meta().id
    }

    /// The node's name, unique among its siblings.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.meta().name
    }

    /// Creation date.
    #[must_use]
    pub fn date(&self) -> DateStamp {
        self.meta().date
    }

    /// Free-form tags in the order given.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.meta().tags
    }

    /// Whether the node is marked as a favorite.
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.meta().favorite
    }

    /// Returns true for folders.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// The URL of a bookmark, `None` for folders.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Bookmark { url, .. } => Some(url),
            Self::Folder { .. } => None,
        }
    }

    /// The children of a folder, `None` for bookmarks.
    #[must_use]
    pub fn contents(&self) -> Option<&[Node]> {
        match self {
            Self::Folder { contents, .. } => Some(contents),
            Self::Bookmark { .. } => None,
        }
    }

    pub(crate) fn contents_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Folder { contents, .. } => Some(contents),
            Self::Bookmark { .. } => None,
        }
    }

    /// Number of direct children of a folder, `None` for bookmarks.
    #[must_use]
    pub fn child_count(&self) -> Option<usize> {
        self.contents().map(<[Node]>::len)
    }

    /// Number of nodes strictly below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.contents().map_or(0, |children| {
            children.iter().map(|c| 1 + c.descendant_count()).sum()
        })
    }

    /// Gives this node and every descendant a fresh id.
    pub(crate) fn reassign_ids(&mut self, next_id: &mut impl FnMut() -> NodeId) {
        self.meta_mut().id = next_id();
        if let Some(children) = self.contents_mut() {
            for child in children {
                child.reassign_ids(next_id);
            }
        }
    }

    /// Returns true if `id` is this node or lies below it.
    #[must_use]
    pub fn contains_id(&self, id: NodeId) -> bool {
        self.id() == id
            || self
                .contents()
                .is_some_and(|children| children.iter().any(|c| c.contains_id(id)))
    }

    /// The view of this node exposed to renderers.
    #[must_use]
    pub fn to_listing_item(&self) -> ListingItem {
        ListingItem {
            kind: self.kind(),
            name: self.name().to_string(),
            date: self.date(),
            tags: self.tags().to_vec(),
            favorite: self.is_favorite(),
            url: self.url().map(str::to_string),
            child_count: self.child_count(),
        }
    }
}

/// Caller input for creating a node.
///
/// # Examples
///
/// ```
/// use marks::{ItemSpec, NodeKind};
///
/// let spec = ItemSpec::bookmark("Bing", "https://bing.com")
///     .with_tags(vec!["Search".to_string()])
///     .with_favorite(true);
/// assert_eq!(spec.kind, NodeKind::Bookmark);
/// assert!(spec.validate().is_ok());
///
/// assert!(ItemSpec::bookmark("Bing", "bing.com").validate().is_err());
/// assert!(ItemSpec::folder("").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    /// Which variant to create.
    pub kind: NodeKind,
    /// Name, unique within the destination folder.
    pub name: String,
    /// URL for bookmarks; ignored for folders.
    pub url: Option<String>,
    /// Tags, stored as given.
    pub tags: Vec<String>,
    /// Initial favorite flag.
    pub favorite: bool,
}

impl ItemSpec {
    /// Input for a new folder.
    #[must_use]
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Folder,
            name: name.into(),
            url: None,
            tags: Vec::new(),
            favorite: false,
        }
    }

    /// Input for a new bookmark.
    #[must_use]
    pub fn bookmark(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Bookmark,
            name: name.into(),
            url: Some(url.into()),
            tags: Vec::new(),
            favorite: false,
        }
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the favorite flag.
    #[must_use]
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Checks the name and, for bookmarks, the URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is invalid or a bookmark URL
    /// does not start with `http`.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.kind == NodeKind::Bookmark {
            let url = self.url.as_deref().unwrap_or_default();
            if !url.starts_with("http") {
                return Err(Error::validation(
                    "url",
                    format!("'{url}' must start with http"),
                ));
            }
        }
        Ok(())
    }
}

/// Checks that `name` can address a node.
///
/// Names must be non-blank and may not contain `/`, which separates path
/// segments.
///
/// # Errors
///
/// Returns a validation error describing the problem.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("name", "must be non-empty"));
    }
    if name.contains('/') {
        return Err(Error::validation(
            "name",
            format!("'{name}' must not contain '/'"),
        ));
    }
    Ok(())
}

/// Splits a comma-separated tag string.
///
/// Each tag is trimmed and empty entries are dropped. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use marks::parse_tags;
///
/// assert_eq!(parse_tags(" AI, Tech ,,AI"), vec!["AI", "Tech", "AI"]);
/// assert!(parse_tags("  ").is_empty());
/// ```
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A node as shown in a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingItem {
    /// Folder or bookmark.
    pub kind: NodeKind,
    /// Node name.
    pub name: String,
    /// Creation date.
    pub date: DateStamp,
    /// Tags.
    pub tags: Vec<String>,
    /// Favorite flag.
    pub favorite: bool,
    /// Bookmark URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Number of direct children of a folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_count: Option<usize>,
}
