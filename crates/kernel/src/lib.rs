//! Synapse Kernel Library
//!
//! Content catalogs, listing queries and view state for the club site.
//! The `synapse` binary is a thin CLI over these modules.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod decor;
pub mod gather;
pub mod media;
pub mod models;
pub mod nav;
pub mod view;

pub use catalog::{Catalog, CatalogError, Site};
pub use config::Config;
pub use gather::ContentQuery;
pub use models::{ContentItem, ContentKind};
