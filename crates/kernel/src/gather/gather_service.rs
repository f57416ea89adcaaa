//! Listing derivation: filter, order, partition.
//!
//! All functions here are pure. The same catalog and query always produce
//! the same listing, in the same order.

use std::collections::BTreeSet;

use tracing::trace;

use super::types::{ContentQuery, Partition};
use crate::catalog::Catalog;
use crate::models::{ContentItem, OrderPolicy};

/// Items of `catalog` matching `query`, ordered by the catalog kind's policy.
///
/// An item is kept iff its title contains the search term (case-insensitive),
/// it carries the requested category, and its status equals the requested
/// status. Unknown categories or statuses simply match nothing.
pub fn filter<'a>(catalog: &'a Catalog, query: &ContentQuery) -> Vec<&'a ContentItem> {
    let needle = query.search.to_lowercase();
    let mut results: Vec<&ContentItem> = catalog
        .items()
        .iter()
        .filter(|item| query.matches_lowered(item, &needle))
        .collect();

    order(&mut results, catalog.kind().order_policy());

    trace!(
        kind = %catalog.kind(),
        matched = results.len(),
        total = catalog.len(),
        "gathered listing"
    );
    results
}

/// Apply an ordering policy in place. Sorting is stable, so ties keep
/// catalog order.
fn order(items: &mut [&ContentItem], policy: OrderPolicy) {
    match policy {
        OrderPolicy::SortKeyDesc => items.sort_by(|a, b| b.sort_key.cmp(&a.sort_key)),
        OrderPolicy::FeaturedFirst => items.sort_by_key(|item| !item.important),
    }
}

/// Split a listing into spotlight, important and regular tiers.
///
/// The spotlight is the first item of the listing whether or not it is
/// flagged important. Every other item lands in exactly one tier, keeping
/// listing order.
pub fn partition<'a>(listing: &[&'a ContentItem]) -> Partition<'a> {
    let Some((spotlight, rest)) = listing.split_first() else {
        return Partition {
            spotlight: None,
            important: Vec::new(),
            regular: Vec::new(),
        };
    };

    let (important, regular): (Vec<_>, Vec<_>) =
        rest.iter().copied().partition(|item| item.important);

    Partition {
        spotlight: Some(spotlight),
        important,
        regular,
    }
}

/// Distinct categories across `items`, ascending, exact (case-sensitive).
pub fn available_categories(items: &[ContentItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
