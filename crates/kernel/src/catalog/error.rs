//! Catalog validation errors.
//!
//! Every error names the catalog kind and the offending item so that a
//! content author can find and fix the entry directly.

use thiserror::Error;

use crate::models::ContentKind;

/// Errors raised while building a catalog from authored records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("{kind} catalog: duplicate item id '{id}'")]
    DuplicateId { kind: ContentKind, id: String },

    /// Id is not a URL slug.
    #[error("{kind} catalog: item id '{id}' must be a lowercase slug (a-z, 0-9, single dashes)")]
    InvalidId { kind: ContentKind, id: String },

    /// Title is empty or whitespace.
    #[error("{kind} catalog: item '{id}' has an empty title")]
    EmptyTitle { kind: ContentKind, id: String },

    /// Media list was given but contains nothing.
    #[error("{kind} catalog: item '{id}' lists no media; omit the field to use the placeholder")]
    EmptyMedia { kind: ContentKind, id: String },

    /// Status is not part of this kind's vocabulary.
    #[error("{kind} catalog: item '{id}' has status '{status}'; allowed: {allowed}")]
    UnknownStatus {
        kind: ContentKind,
        id: String,
        status: String,
        allowed: String,
    },

    /// Sort keys mix dates and numbers.
    #[error("{kind} catalog: item '{id}' has a {found} sort key but the catalog uses {expected}")]
    MixedSortKeys {
        kind: ContentKind,
        id: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Catalog file declares a schema version this build does not read.
    #[error("{kind} catalog: unsupported schema version {version} (expected {supported})")]
    UnsupportedVersion {
        kind: ContentKind,
        version: u32,
        supported: u32,
    },
}
