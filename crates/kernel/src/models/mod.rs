//! Content models.
//!
//! Raw records as authored in catalog files, the validated items built from
//! them, and the per-kind rules (status vocabulary, ordering) they obey.

pub mod item;
pub mod kind;
pub mod tag;

pub use item::{Author, ContentItem, ItemRecord, MediaRef, SortKey};
pub use kind::{ContentKind, OrderPolicy, UnknownKind};
pub use tag::{DEFAULT_TAG_COLOR, NormalizedTag, Tag};
