//! Per-session image fallback tracking.
//!
//! Each image key moves through `Unresolved → Requested → {Loaded, Failed}`.
//! A load error reported by the rendering layer marks the key `Failed`, and
//! from then on every resolution of that key returns the placeholder without
//! touching the original asset again. There is no retry.

use std::collections::HashMap;

use tracing::debug;

use super::{ImageKind, PLACEHOLDER_KEY, Placeholders, asset_path};

/// Load state of one image key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Unresolved,
    Requested,
    Loaded,
    /// Terminal for the session.
    Failed,
}

/// Resolves image keys for one rendering session.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base: String,
    placeholders: Placeholders,
    states: HashMap<String, ImageState>,
}

impl ImageResolver {
    pub fn new(base: impl Into<String>, placeholders: Placeholders) -> Self {
        Self {
            base: base.into(),
            placeholders,
            states: HashMap::new(),
        }
    }

    /// Path to render for `key`.
    ///
    /// Failed keys short-circuit to the placeholder. Otherwise the key is
    /// recorded as requested and its asset path returned.
    pub fn resolve(&mut self, key: &str, kind: ImageKind) -> String {
        if key == PLACEHOLDER_KEY {
            return self.placeholders.for_kind(kind).to_string();
        }

        let state = self.states.entry(key.to_string()).or_default();
        match *state {
            ImageState::Failed => self.placeholders.for_kind(kind).to_string(),
            ImageState::Unresolved => {
                *state = ImageState::Requested;
                asset_path(&self.base, &self.placeholders, key, kind)
            }
            ImageState::Requested | ImageState::Loaded => {
                asset_path(&self.base, &self.placeholders, key, kind)
            }
        }
    }

    /// The rendering layer finished loading `key`.
    ///
    /// Only a requested key can load. A failed key stays failed.
    pub fn mark_loaded(&mut self, key: &str) {
        self.settle(key, ImageState::Loaded);
    }

    /// The rendering layer reported a load error for `key`.
    ///
    /// Only a requested key can fail. Signals for keys this session never
    /// resolved are ignored.
    pub fn mark_failed(&mut self, key: &str) {
        if self.settle(key, ImageState::Failed) {
            debug!(key = %key, "image failed, using placeholder for session");
        }
    }

    /// Move a requested key to `outcome`. Returns false, leaving the state
    /// alone, for keys in any other state.
    fn settle(&mut self, key: &str, outcome: ImageState) -> bool {
        let current = self.state(key);
        if current != ImageState::Requested {
            debug!(key = %key, state = ?current, outcome = ?outcome, "ignoring image signal");
            return false;
        }
        self.states.insert(key.to_string(), outcome);
        true
    }

    pub fn state(&self, key: &str) -> ImageState {
        self.states.get(key).copied().unwrap_or_default()
    }

    /// Number of keys that have fallen back to a placeholder.
    pub fn failed_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == ImageState::Failed)
            .count()
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new("/images", Placeholders::default())
    }
}
