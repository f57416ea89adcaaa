//! Gather: listing queries over static catalogs.
//!
//! This module provides:
//! - `filter`: search/category/status filtering with per-kind ordering
//! - `partition`: spotlight / important / regular display tiers
//! - `available_categories`: the category choices a listing offers
//! - `paginate`: page slicing for long listings
//! - Types: ContentQuery, Partition, Page

mod gather_service;
mod pager;
pub mod types;

pub use gather_service::{available_categories, filter, partition};
pub use pager::paginate;
pub use types::{ALL_CHOICE, ContentQuery, Page, Partition, normalize_choice};
