//! Gather query types.

use serde::{Deserialize, Serialize};

use crate::models::ContentItem;

/// Choice value meaning "no restriction" in category and status pickers.
pub const ALL_CHOICE: &str = "all";

/// Normalize a picker value: empty or `all` (any case) means unset.
pub fn normalize_choice(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_CHOICE) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Filter inputs for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    /// Case-insensitive title substring. Empty matches everything.
    #[serde(default)]
    pub search: String,

    /// Exact category; `None` means all categories.
    #[serde(default)]
    pub category: Option<String>,

    /// Exact status; `None` means all statuses.
    #[serde(default)]
    pub status: Option<String>,
}

impl ContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = normalize_choice(category);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = normalize_choice(status);
        self
    }

    /// Whether a category or status restriction is active. Drives the
    /// "clear filters" affordance on empty listings.
    pub fn has_filters(&self) -> bool {
        self.category.is_some() || self.status.is_some()
    }

    /// Reset category and status to "all". The search term is kept.
    pub fn clear_filters(&mut self) {
        self.category = None;
        self.status = None;
    }

    /// Whether `item` passes every active restriction.
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.matches_lowered(item, &self.search.to_lowercase())
    }

    pub(crate) fn matches_lowered(&self, item: &ContentItem, needle: &str) -> bool {
        item.title_contains(needle)
            && self
                .category
                .as_deref()
                .is_none_or(|category| item.has_category(category))
            && self
                .status
                .as_deref()
                .is_none_or(|status| item.status.as_deref() == Some(status))
    }
}

/// Display tiers of a gathered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    /// First item of the listing, shown as the hero block.
    pub spotlight: Option<&'a ContentItem>,
    /// Remaining items flagged important, in listing order.
    pub important: Vec<&'a ContentItem>,
    /// Remaining items not flagged important, in listing order.
    pub regular: Vec<&'a ContentItem>,
}

impl Partition<'_> {
    /// Total items across all tiers.
    pub fn len(&self) -> usize {
        usize::from(self.spotlight.is_some()) + self.important.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spotlight.is_none()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served (after clamping).
    pub page: usize,
    pub per_page: usize,
    /// Items across all pages.
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
