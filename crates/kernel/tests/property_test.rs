#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-based tests for listing laws.
//!
//! These tests use proptest to verify invariants across many random
//! catalogs and inputs.

use std::collections::HashSet;

use proptest::prelude::*;
use synapse_kernel::catalog::Catalog;
use synapse_kernel::cursor::{Direction, advance};
use synapse_kernel::gather::{ContentQuery, filter, partition};
use synapse_kernel::media::{ImageKind, ImageResolver, Placeholders};
use synapse_kernel::models::{ContentKind, ItemRecord, MediaRef, SortKey};
use synapse_kernel::view::ListingView;

// ===== STRATEGY HELPERS =====

const WORDS: &[&str] = &["Quantum", "Neural", "Web", "Vision", "Robots", "Data", "ai"];
const CATEGORIES: &[&str] = &["AI", "Web Development", "Quantum Computing", "Robotics"];

fn any_kind() -> impl Strategy<Value = ContentKind> {
    prop_oneof![
        Just(ContentKind::Blog),
        Just(ContentKind::Project),
        Just(ContentKind::Event),
    ]
}

/// Title, categories, status pick, important, year, media count.
type RecordParts = (Vec<usize>, Vec<usize>, Option<usize>, bool, i64, usize);

fn any_record_parts() -> impl Strategy<Value = RecordParts> {
    (
        prop::collection::vec(0..WORDS.len(), 1..4),
        prop::collection::vec(0..CATEGORIES.len(), 0..3),
        prop::option::of(0..2usize),
        any::<bool>(),
        2015i64..2030,
        1..4usize,
    )
}

/// A valid catalog of the given kind built from random parts.
fn any_catalog() -> impl Strategy<Value = Catalog> {
    (any_kind(), prop::collection::vec(any_record_parts(), 0..20)).prop_map(|(kind, parts)| {
        let records = parts
            .into_iter()
            .enumerate()
            .map(|(i, (words, cats, status, important, year, media))| {
                let title = words.iter().map(|w| WORDS[*w]).collect::<Vec<_>>().join(" ");
                let mut r = ItemRecord::new(format!("item-{i}"), title, SortKey::Number(year));
                r.categories = cats.iter().map(|c| CATEGORIES[*c].to_string()).collect();
                r.status = status.and_then(|s| kind.statuses().get(s).map(|s| s.to_string()));
                r.important = important;
                r.media = Some(MediaRef::Many(
                    (0..media).map(|m| format!("item-{i}-{m}.jpg")).collect(),
                ));
                r
            })
            .collect();
        Catalog::new(kind, records).unwrap()
    })
}

fn any_query() -> impl Strategy<Value = ContentQuery> {
    (
        prop_oneof![
            Just(""),
            Just("quantum"),
            Just("AI"),
            Just("web"),
            Just("o"),
            Just("nothing-here")
        ],
        prop_oneof![
            Just("all"),
            Just(""),
            Just("AI"),
            Just("Web Development"),
            Just("Robotics"),
            Just("Unknown")
        ],
        prop_oneof![
            Just("all"),
            Just("completed"),
            Just("in-progress"),
            Just("upcoming"),
            Just("past"),
            Just("bogus")
        ],
    )
        .prop_map(|(search, category, status)| {
            ContentQuery::new()
                .with_search(search)
                .with_category(category)
                .with_status(status)
        })
}

#[derive(Debug, Clone)]
enum ViewOp {
    NextItem,
    PrevItem,
    Select(usize),
    NextMedia,
    PrevMedia,
    Search(&'static str),
    Category(&'static str),
    ClearFilters,
}

fn any_view_op() -> impl Strategy<Value = ViewOp> {
    prop_oneof![
        Just(ViewOp::NextItem),
        Just(ViewOp::PrevItem),
        (0..25usize).prop_map(ViewOp::Select),
        Just(ViewOp::NextMedia),
        Just(ViewOp::PrevMedia),
        prop_oneof![Just(""), Just("quantum"), Just("a")].prop_map(ViewOp::Search),
        prop_oneof![Just("all"), Just("AI"), Just("Robotics")].prop_map(ViewOp::Category),
        Just(ViewOp::ClearFilters),
    ]
}

fn ids(items: &[&synapse_kernel::ContentItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

// ===== PROPERTIES =====

proptest! {
    #[test]
    fn filter_returns_exactly_the_matching_items(catalog in any_catalog(), query in any_query()) {
        let results = filter(&catalog, &query);

        let mut seen = HashSet::new();
        for item in &results {
            prop_assert!(catalog.get(&item.id).is_some(), "invented item {}", item.id);
            prop_assert!(seen.insert(item.id.clone()), "duplicate item {}", item.id);
            prop_assert!(query.matches(item));
        }

        let expected = catalog.items().iter().filter(|i| query.matches(i)).count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn filter_is_deterministic(catalog in any_catalog(), query in any_query()) {
        prop_assert_eq!(ids(&filter(&catalog, &query)), ids(&filter(&catalog, &query)));
    }

    #[test]
    fn filter_respects_order_policy(catalog in any_catalog(), query in any_query()) {
        let results = filter(&catalog, &query);
        match catalog.kind() {
            ContentKind::Project => {
                let first_regular = results.iter().position(|i| !i.important).unwrap_or(results.len());
                prop_assert!(results[first_regular..].iter().all(|i| !i.important));
            }
            ContentKind::Blog | ContentKind::Event => {
                prop_assert!(results.windows(2).all(|w| w[0].sort_key >= w[1].sort_key));
            }
        }
    }

    #[test]
    fn partition_is_complete_and_disjoint(catalog in any_catalog(), query in any_query()) {
        let results = filter(&catalog, &query);
        let parts = partition(&results);

        let mut all: Vec<String> = parts.spotlight.iter().map(|i| i.id.clone()).collect();
        all.extend(ids(&parts.important));
        all.extend(ids(&parts.regular));

        let mut sorted_all = all.clone();
        sorted_all.sort();
        let mut sorted_results = ids(&results);
        sorted_results.sort();
        prop_assert_eq!(sorted_all, sorted_results);

        prop_assert!(parts.important.iter().all(|i| i.important));
        prop_assert!(parts.regular.iter().all(|i| !i.important));

        // Tiers keep listing order.
        let position = |id: &str| results.iter().position(|i| i.id == id).unwrap();
        prop_assert!(parts.important.windows(2).all(|w| position(&w[0].id) < position(&w[1].id)));
        prop_assert!(parts.regular.windows(2).all(|w| position(&w[0].id) < position(&w[1].id)));
    }

    #[test]
    fn cursor_returns_home_after_len_steps(len in 1usize..64, start in 0usize..64) {
        let start = start % len;
        let mut forward = start;
        let mut backward = start;
        for _ in 0..len {
            forward = advance(forward, len, Direction::Forward).unwrap();
            backward = advance(backward, len, Direction::Backward).unwrap();
            prop_assert!(forward < len && backward < len);
        }
        prop_assert_eq!(forward, start);
        prop_assert_eq!(backward, start);
    }

    #[test]
    fn item_moves_reset_media_cursor(
        catalog in any_catalog(),
        ops in prop::collection::vec(any_view_op(), 1..40),
    ) {
        let mut view = ListingView::new(&catalog);

        for op in ops {
            let before = view.state().active_index;
            let outer_move = matches!(
                op,
                ViewOp::NextItem
                    | ViewOp::PrevItem
                    | ViewOp::Select(_)
                    | ViewOp::Search(_)
                    | ViewOp::Category(_)
                    | ViewOp::ClearFilters
            );

            let moved = match op {
                ViewOp::NextItem => view.next_item().is_some(),
                ViewOp::PrevItem => view.prev_item().is_some(),
                ViewOp::Select(i) => view.select(i).is_some(),
                ViewOp::NextMedia => { view.next_media(); false }
                ViewOp::PrevMedia => { view.prev_media(); false }
                ViewOp::Search(s) => { view.set_search(s); true }
                ViewOp::Category(c) => { view.set_category(c); true }
                ViewOp::ClearFilters => { view.clear_filters(); true }
            };

            if outer_move && moved {
                prop_assert_eq!(view.state().active_media_index, 0);
            }
            if !moved && !outer_move {
                prop_assert_eq!(view.state().active_index, before);
            }

            match view.active_item() {
                Some(item) => {
                    prop_assert!(view.state().active_index < view.results().len());
                    prop_assert!(view.state().active_media_index < item.media.len());
                }
                None => prop_assert!(view.is_empty()),
            }
        }
    }

    #[test]
    fn failed_images_never_resolve_to_original(key in "[a-z]{1,8}\\.(jpg|png)") {
        let placeholders = Placeholders::default();
        let mut resolver = ImageResolver::new("/images", placeholders.clone());
        resolver.resolve(&key, ImageKind::Cover);
        resolver.mark_failed(&key);

        for _ in 0..1000 {
            prop_assert_eq!(resolver.resolve(&key, ImageKind::Cover), placeholders.cover.clone());
        }
    }
}
