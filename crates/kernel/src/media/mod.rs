//! Image asset resolution.
//!
//! Maps logical image keys to servable paths and falls back to a
//! per-kind placeholder when an image is missing or has failed to load.

mod resolver;

pub use resolver::{ImageResolver, ImageState};

use serde::{Deserialize, Serialize};

/// Media key the catalog substitutes for omitted or blank image references.
pub const PLACEHOLDER_KEY: &str = "@placeholder";

/// Default placeholder for cover and gallery images.
pub const DEFAULT_COVER_PLACEHOLDER: &str = "/images/placeholder-cover.svg";

/// Default placeholder for author avatars.
pub const DEFAULT_AVATAR_PLACEHOLDER: &str = "/images/placeholder-avatar.svg";

/// What an image is used for. Each kind has its own placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Cover,
    Avatar,
}

/// Placeholder paths per image kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub cover: String,
    pub avatar: String,
}

impl Placeholders {
    pub fn for_kind(&self, kind: ImageKind) -> &str {
        match kind {
            ImageKind::Cover => &self.cover,
            ImageKind::Avatar => &self.avatar,
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            cover: DEFAULT_COVER_PLACEHOLDER.to_string(),
            avatar: DEFAULT_AVATAR_PLACEHOLDER.to_string(),
        }
    }
}

/// Map an image key to a concrete asset path.
///
/// Absolute URLs and rooted paths pass through unchanged; anything else is
/// joined onto `base`. The placeholder key maps to the placeholder for
/// `kind`. Pure: the same inputs always give the same path.
pub fn asset_path(base: &str, placeholders: &Placeholders, key: &str, kind: ImageKind) -> String {
    let key = key.trim();
    if key.is_empty() || key == PLACEHOLDER_KEY {
        return placeholders.for_kind(kind).to_string();
    }
    if key.starts_with('/') || key.starts_with("http://") || key.starts_with("https://") {
        return key.to_string();
    }

    let base = base.trim_end_matches('/');
    let key = key.trim_start_matches("./");
    if base.is_empty() {
        format!("/{key}")
    } else {
        format!("{base}/{key}")
    }
}
