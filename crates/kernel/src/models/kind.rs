//! Content kinds and their per-kind rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a gathered listing is ordered.
///
/// The two policies are not interchangeable: each content kind picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Most recent first by `sort_key`; ties keep catalog order.
    SortKeyDesc,
    /// Important items first, then catalog (insertion) order.
    FeaturedFirst,
}

/// The content types the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Project,
    Event,
}

const PROJECT_STATUSES: &[&str] = &["completed", "in-progress", "planned"];
const EVENT_STATUSES: &[&str] = &["upcoming", "past"];

impl ContentKind {
    /// Every kind, in navigation order.
    pub const ALL: [ContentKind; 3] = [ContentKind::Blog, ContentKind::Project, ContentKind::Event];

    /// Machine name used in config, logs and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Project => "project",
            ContentKind::Event => "event",
        }
    }

    /// Human-readable label for listings.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Blog => "Blog",
            ContentKind::Project => "Projects",
            ContentKind::Event => "Events",
        }
    }

    /// Status values an item of this kind may carry. Empty means the kind
    /// has no status at all.
    pub fn statuses(self) -> &'static [&'static str] {
        match self {
            ContentKind::Blog => &[],
            ContentKind::Project => PROJECT_STATUSES,
            ContentKind::Event => EVENT_STATUSES,
        }
    }

    /// Ordering applied to gathered listings of this kind.
    pub fn order_policy(self) -> OrderPolicy {
        match self {
            // Blog posts and events read newest first.
            ContentKind::Blog | ContentKind::Event => OrderPolicy::SortKeyDesc,
            // Projects keep their curated order with showcase entries on top.
            ContentKind::Project => OrderPolicy::FeaturedFirst,
        }
    }

    /// Catalog file name under the catalog directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ContentKind::Blog => "blog.yml",
            ContentKind::Project => "projects.yml",
            ContentKind::Event => "events.yml",
        }
    }

    /// First path segment of listing and detail routes.
    pub fn route_segment(self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Project => "projects",
            ContentKind::Event => "events",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known content kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind '{0}' (expected blog, project or event)")]
pub struct UnknownKind(pub String);

impl FromStr for ContentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog" | "post" | "posts" => Ok(ContentKind::Blog),
            "project" | "projects" => Ok(ContentKind::Project),
            "event" | "events" => Ok(ContentKind::Event),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
