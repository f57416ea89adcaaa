//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::media::{DEFAULT_AVATAR_PLACEHOLDER, DEFAULT_COVER_PLACEHOLDER, Placeholders};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `blog.yml`, `projects.yml`, `events.yml` (default: ./content).
    pub catalog_dir: PathBuf,

    /// Base URL image keys are resolved against (default: /images).
    pub assets_url: String,

    /// Placeholder for cover and gallery images.
    pub placeholder_cover: String,

    /// Placeholder for author avatars.
    pub placeholder_avatar: String,

    /// Items per listing page (default: 6).
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_dir = lookup("CATALOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./content"));

        let assets_url = lookup("ASSETS_URL").unwrap_or_else(|| "/images".to_string());

        let placeholder_cover =
            lookup("PLACEHOLDER_COVER").unwrap_or_else(|| DEFAULT_COVER_PLACEHOLDER.to_string());

        let placeholder_avatar =
            lookup("PLACEHOLDER_AVATAR").unwrap_or_else(|| DEFAULT_AVATAR_PLACEHOLDER.to_string());

        let page_size: usize = lookup("PAGE_SIZE")
            .unwrap_or_else(|| "6".to_string())
            .parse()
            .context("PAGE_SIZE must be a positive integer")?;
        if page_size == 0 {
            anyhow::bail!("PAGE_SIZE must be a positive integer");
        }

        Ok(Self {
            catalog_dir,
            assets_url,
            placeholder_cover,
            placeholder_avatar,
            page_size,
        })
    }

    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            cover: self.placeholder_cover.clone(),
            avatar: self.placeholder_avatar.clone(),
        }
    }
}
