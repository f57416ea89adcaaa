//! Per-listing view state.
//!
//! A [`ListingView`] is owned by one mounted listing (blog, projects, events)
//! and holds everything that listing mutates in response to input: the
//! filter query, the active item, and the active image of that item. The
//! catalog itself is borrowed and never changes.
//!
//! Moving the active item, for any reason, resets the active image to 0.

pub mod countdown;
pub mod scope;

use crate::catalog::Catalog;
use crate::cursor::{Carousel, Direction};
use crate::gather::{self, ContentQuery, Page, Partition, normalize_choice};
use crate::models::ContentItem;

pub use countdown::{Countdown, spawn_ticker, time_until};
pub use scope::ViewScope;

/// Mutable state of one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: ContentQuery,
    /// Cursor into the filtered listing.
    pub active_index: usize,
    /// Cursor into the active item's media.
    pub active_media_index: usize,
}

/// A listing over one catalog.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    catalog: &'a Catalog,
    state: ViewState,
    results: Vec<&'a ContentItem>,
}

impl<'a> ListingView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_query(catalog, ContentQuery::default())
    }

    pub fn with_query(catalog: &'a Catalog, query: ContentQuery) -> Self {
        let results = gather::filter(catalog, &query);
        Self {
            catalog,
            state: ViewState {
                query,
                ..ViewState::default()
            },
            results,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn query(&self) -> &ContentQuery {
        &self.state.query
    }

    // -------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.query.search = search.into();
        self.refresh();
    }

    /// Restrict to one category; empty or `all` lifts the restriction.
    pub fn set_category(&mut self, category: &str) {
        self.state.query.category = normalize_choice(category);
        self.refresh();
    }

    /// Restrict to one status; empty or `all` lifts the restriction.
    pub fn set_status(&mut self, status: &str) {
        self.state.query.status = normalize_choice(status);
        self.refresh();
    }

    /// Reset category and status to "all", keeping the search term.
    pub fn clear_filters(&mut self) {
        self.state.query.clear_filters();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = gather::filter(self.catalog, &self.state.query);
        self.set_active(0);
    }

    /// Filtered, ordered listing.
    pub fn results(&self) -> &[&'a ContentItem] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether the empty state should offer "clear filters".
    pub fn can_clear_filters(&self) -> bool {
        self.results.is_empty() && self.state.query.has_filters()
    }

    pub fn partition(&self) -> Partition<'a> {
        gather::partition(&self.results)
    }

    /// Category choices, derived from the whole catalog.
    pub fn categories(&self) -> &'a [String] {
        self.catalog.available_categories()
    }

    pub fn page(&self, page: usize, per_page: usize) -> Page<&'a ContentItem> {
        gather::paginate(&self.results, page, per_page)
    }

    // -------------------------------------------------------------------
    // Item cursor
    // -------------------------------------------------------------------

    /// All outer-cursor moves go through here so the media cursor resets.
    fn set_active(&mut self, index: usize) {
        self.state.active_index = index;
        self.state.active_media_index = 0;
    }

    pub fn active_item(&self) -> Option<&'a ContentItem> {
        self.results.get(self.state.active_index).copied()
    }

    pub fn step_item(&mut self, direction: Direction) -> Option<&'a ContentItem> {
        let mut cursor = Carousel::at(self.state.active_index, self.results.len())?;
        self.set_active(cursor.step(direction));
        self.active_item()
    }

    pub fn next_item(&mut self) -> Option<&'a ContentItem> {
        self.step_item(Direction::Forward)
    }

    pub fn prev_item(&mut self) -> Option<&'a ContentItem> {
        self.step_item(Direction::Backward)
    }

    /// Make the item at `index` of the listing active. Out-of-range indexes
    /// are ignored.
    pub fn select(&mut self, index: usize) -> Option<&'a ContentItem> {
        if index >= self.results.len() {
            return None;
        }
        self.set_active(index);
        self.active_item()
    }

    /// Make the item with `id` active, if it is in the current listing.
    pub fn select_id(&mut self, id: &str) -> Option<&'a ContentItem> {
        let index = self.results.iter().position(|item| item.id == id)?;
        self.select(index)
    }

    // -------------------------------------------------------------------
    // Media cursor
    // -------------------------------------------------------------------

    pub fn active_media(&self) -> Option<&'a str> {
        self.active_item()?
            .media
            .get(self.state.active_media_index)
            .map(String::as_str)
    }

    pub fn step_media(&mut self, direction: Direction) -> Option<&'a str> {
        let len = self.active_item()?.media.len();
        let mut gallery = Carousel::at(self.state.active_media_index, len)?;
        self.state.active_media_index = gallery.step(direction);
        self.active_media()
    }

    pub fn next_media(&mut self) -> Option<&'a str> {
        self.step_media(Direction::Forward)
    }

    pub fn prev_media(&mut self) -> Option<&'a str> {
        self.step_media(Direction::Backward)
    }
}

/// Fraction of a page that has been scrolled past, in `[0, 1]`.
///
/// Pages that fit in the viewport count as fully read.
pub fn reading_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 1.0;
    }
    if !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}
