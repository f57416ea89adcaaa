//! Static content catalogs.
//!
//! A [`Catalog`] is built once from authored records and never changes
//! afterwards. Construction enforces the data invariants listings rely on:
//!
//! - ids are unique URL slugs
//! - titles are non-empty
//! - every item has at least one media entry (a placeholder stands in when
//!   the field is omitted)
//! - statuses come from the kind's vocabulary
//! - all sort keys share one variant

mod error;
pub mod loader;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub use error::CatalogError;
pub use loader::{CATALOG_VERSION, CatalogFile, Site, load_catalog, load_site, parse_catalog};

use crate::gather::available_categories;
use crate::media::PLACEHOLDER_KEY;
use crate::models::{ContentItem, ContentKind, ItemRecord};

#[allow(clippy::expect_used)]
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug regex is valid"));

/// An immutable, validated set of items of one kind.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: ContentKind,
    items: Vec<ContentItem>,
    categories: Vec<String>,
}

impl Catalog {
    /// Validate `records` and build the catalog. Item order is preserved.
    pub fn new(kind: ContentKind, records: Vec<ItemRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut items = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    kind,
                    id: record.id,
                });
            }

            let item = build_item(kind, record)?;

            if let Some(first) = items.first().map(|i: &ContentItem| i.sort_key)
                && !first.same_variant(&item.sort_key)
            {
                return Err(CatalogError::MixedSortKeys {
                    kind,
                    id: item.id,
                    expected: first.variant_name(),
                    found: item.sort_key.variant_name(),
                });
            }

            items.push(item);
        }

        let categories = available_categories(&items);
        debug!(
            kind = %kind,
            items = items.len(),
            categories = categories.len(),
            "catalog built"
        );

        Ok(Self {
            kind,
            items,
            categories,
        })
    }

    /// A catalog with no items.
    pub fn empty(kind: ContentKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Items in authored order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories across all items, ascending, case-sensitive.
    ///
    /// Derived once at construction since the catalog never changes.
    pub fn available_categories(&self) -> &[String] {
        &self.categories
    }
}

/// Validate a single record and resolve it into a display-ready item.
fn build_item(kind: ContentKind, record: ItemRecord) -> Result<ContentItem, CatalogError> {
    let ItemRecord {
        id,
        title,
        categories,
        status,
        important,
        sort_key,
        media,
        tags,
        author,
        excerpt,
        location,
        link,
    } = record;

    if !SLUG_RE.is_match(&id) {
        return Err(CatalogError::InvalidId { kind, id });
    }

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(CatalogError::EmptyTitle { kind, id });
    }

    let status = match status.map(|s| s.trim().to_string()) {
        Some(s) if s.is_empty() => None,
        Some(s) if !kind.statuses().contains(&s.as_str()) => {
            let allowed = if kind.statuses().is_empty() {
                "none".to_string()
            } else {
                kind.statuses().join(", ")
            };
            return Err(CatalogError::UnknownStatus {
                kind,
                id,
                status: s,
                allowed,
            });
        }
        other => other,
    };

    let media = match media {
        // Omitted: fall back to the placeholder.
        None => vec![PLACEHOLDER_KEY.to_string()],
        Some(media) => {
            let keys = media.into_vec();
            if keys.is_empty() {
                return Err(CatalogError::EmptyMedia { kind, id });
            }
            keys.into_iter()
                .map(|key| {
                    let key = key.trim();
                    if key.is_empty() {
                        PLACEHOLDER_KEY.to_string()
                    } else {
                        key.to_string()
                    }
                })
                .collect()
        }
    };

    let mut unique = HashSet::new();
    let categories = categories
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && unique.insert(c.clone()))
        .collect();

    Ok(ContentItem {
        id,
        title,
        categories,
        status,
        important,
        sort_key,
        media,
        tags: tags.into_iter().map(|t| t.normalize()).collect(),
        author,
        excerpt,
        location,
        link,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::{MediaRef, SortKey, Tag};

    fn record(id: &str, title: &str) -> ItemRecord {
        ItemRecord::new(id, title, SortKey::Number(2024))
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Catalog::new(
            ContentKind::Blog,
            vec![record("intro", "Intro"), record("intro", "Again")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                kind: ContentKind::Blog,
                id: "intro".into()
            }
        );
    }

    #[test]
    fn non_slug_id_rejected() {
        for id in ["Intro", "two words", "trailing-", "a--b", ""] {
            let err = Catalog::new(ContentKind::Blog, vec![record(id, "T")]).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidId { .. }), "{id}");
        }
    }

    #[test]
    fn blank_title_rejected() {
        let err = Catalog::new(ContentKind::Blog, vec![record("x", "   ")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle { .. }));
    }

    #[test]
    fn empty_media_list_rejected() {
        let mut r = record("spring-meetup", "Spring Meetup");
        r.media = Some(MediaRef::Many(vec![]));
        let err = Catalog::new(ContentKind::Event, vec![r]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyMedia {
                kind: ContentKind::Event,
                id: "spring-meetup".into()
            }
        );
    }

    #[test]
    fn missing_media_gets_placeholder() {
        let catalog = Catalog::new(ContentKind::Blog, vec![record("x", "X")]).unwrap();
        assert_eq!(catalog.items()[0].media, vec![PLACEHOLDER_KEY.to_string()]);
    }

    #[test]
    fn blank_media_key_becomes_placeholder() {
        let mut r = record("x", "X");
        r.media = Some(MediaRef::Many(vec!["a.jpg".into(), " ".into()]));
        let catalog = Catalog::new(ContentKind::Event, vec![r]).unwrap();
        assert_eq!(catalog.items()[0].media[1], PLACEHOLDER_KEY);
    }

    #[test]
    fn status_checked_against_kind() {
        let mut r = record("x", "X");
        r.status = Some("upcoming".into());
        assert!(Catalog::new(ContentKind::Event, vec![r.clone()]).is_ok());

        let err = Catalog::new(ContentKind::Blog, vec![r]).unwrap_err();
        match err {
            CatalogError::UnknownStatus { allowed, .. } => assert_eq!(allowed, "none"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mixed_sort_keys_rejected() {
        let a = record("a", "A");
        let b = ItemRecord::new(
            "b",
            "B",
            SortKey::Date(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        );
        let err = Catalog::new(ContentKind::Blog, vec![a, b]).unwrap_err();
        assert!(matches!(err, CatalogError::MixedSortKeys { .. }));
    }

    #[test]
    fn categories_deduplicated_and_sorted() {
        let mut a = record("a", "A");
        a.categories = vec!["Web".into(), "AI".into(), "AI".into(), " ".into()];
        let mut b = record("b", "B");
        b.categories = vec!["ai".into(), "Robotics".into()];

        let catalog = Catalog::new(ContentKind::Blog, vec![a, b]).unwrap();
        assert_eq!(catalog.items()[0].categories, vec!["Web", "AI"]);
        assert_eq!(
            catalog.available_categories(),
            &["AI", "Robotics", "Web", "ai"]
        );
    }

    #[test]
    fn tags_normalized_at_load() {
        let mut r = record("x", "X");
        r.tags = vec![Tag::plain("Rust"), Tag::colored("ML", "#22c55e")];
        let catalog = Catalog::new(ContentKind::Project, vec![r]).unwrap();
        let tags = &catalog.items()[0].tags;
        assert_eq!(tags[0].name, "Rust");
        assert_eq!(tags[1].color, "#22c55e");
    }

    #[test]
    fn lookup_by_id() {
        let catalog =
            Catalog::new(ContentKind::Blog, vec![record("a", "A"), record("b", "B")]).unwrap();
        assert_eq!(catalog.get("b").map(|i| i.title.as_str()), Some("B"));
        assert!(catalog.get("c").is_none());
        assert!(Catalog::empty(ContentKind::Blog).is_empty());
    }
}
