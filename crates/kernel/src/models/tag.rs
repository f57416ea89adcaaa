//! Project tags.
//!
//! Catalog authors write a tag either as a bare name or as a `{name, color}`
//! map. Both shapes are resolved into [`NormalizedTag`] once, when the catalog
//! is built, so nothing downstream branches on the authored form.

use serde::{Deserialize, Serialize};

/// Badge color for tags authored without one.
pub const DEFAULT_TAG_COLOR: &str = "#64748b";

/// A tag as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    /// `- Rust`
    Plain(String),
    /// `- { name: Rust, color: "#dea584" }`
    Colored { name: String, color: String },
}

impl Tag {
    pub fn plain(name: impl Into<String>) -> Self {
        Tag::Plain(name.into())
    }

    pub fn colored(name: impl Into<String>, color: impl Into<String>) -> Self {
        Tag::Colored {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Tag name regardless of shape.
    pub fn name(&self) -> &str {
        match self {
            Tag::Plain(name) | Tag::Colored { name, .. } => name,
        }
    }

    /// Resolve into the single shape used for rendering.
    pub fn normalize(self) -> NormalizedTag {
        match self {
            Tag::Plain(name) => NormalizedTag {
                name: name.trim().to_string(),
                color: DEFAULT_TAG_COLOR.to_string(),
            },
            Tag::Colored { name, color } => {
                let color = color.trim();
                NormalizedTag {
                    name: name.trim().to_string(),
                    color: if color.is_empty() {
                        DEFAULT_TAG_COLOR.to_string()
                    } else {
                        color.to_string()
                    },
                }
            }
        }
    }
}

/// A tag ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTag {
    pub name: String,
    pub color: String,
}
