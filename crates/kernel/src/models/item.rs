//! Content item records.
//!
//! [`ItemRecord`] is the authored shape read from catalog files. The catalog
//! validates records and turns them into [`ContentItem`]s, which are the only
//! items listings ever see.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tag::{NormalizedTag, Tag};

/// Ordering key: a publish/event date, or a plain number such as a year.
///
/// A single catalog uses one variant throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortKey {
    Number(i64),
    Date(NaiveDate),
}

impl SortKey {
    /// Whether two keys are of the same variant and thus comparable.
    pub fn same_variant(&self, other: &SortKey) -> bool {
        matches!(
            (self, other),
            (SortKey::Number(_), SortKey::Number(_)) | (SortKey::Date(_), SortKey::Date(_))
        )
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            SortKey::Number(_) => "number",
            SortKey::Date(_) => "date",
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            // Mixed keys are rejected at catalog load; numbers sort first otherwise.
            (SortKey::Number(_), SortKey::Date(_)) => Ordering::Less,
            (SortKey::Date(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Number(n) => write!(f, "{n}"),
            SortKey::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Post author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    /// Avatar image key; resolved with the avatar placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Media as authored: a single image key or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    One(String),
    Many(Vec<String>),
}

impl MediaRef {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            MediaRef::One(key) => vec![key],
            MediaRef::Many(keys) => keys,
        }
    }
}

/// A content item as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// URL slug, unique within its catalog.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Priority display tier.
    #[serde(default, alias = "featured")]
    pub important: bool,

    #[serde(alias = "date", alias = "year")]
    pub sort_key: SortKey,

    /// `None` when the field is absent; the catalog substitutes a placeholder.
    #[serde(default, alias = "image", alias = "images", skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ItemRecord {
    /// Minimal record; every optional field left unset.
    pub fn new(id: impl Into<String>, title: impl Into<String>, sort_key: SortKey) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            categories: Vec::new(),
            status: None,
            important: false,
            sort_key,
            media: None,
            tags: Vec::new(),
            author: None,
            excerpt: None,
            location: None,
            link: None,
        }
    }
}

/// A validated content item.
///
/// `media` is never empty and `categories` holds no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub important: bool,
    pub sort_key: SortKey,
    pub media: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<NormalizedTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ContentItem {
    /// Exact, case-sensitive category membership.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Case-insensitive title substring match. `needle` must already be
    /// lowercased; an empty needle matches everything.
    pub fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }

    /// Cover image key (first media entry).
    pub fn cover(&self) -> &str {
        self.media.first().map(String::as_str).unwrap_or_default()
    }
}
