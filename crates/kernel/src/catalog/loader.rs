//! YAML catalog files.
//!
//! Each content kind lives in its own file under the catalog directory
//! (`blog.yml`, `projects.yml`, `events.yml`). Files are versioned and read
//! wholesale at startup:
//!
//! ```yaml
//! version: 1
//! items:
//!   - id: intro-to-transformers
//!     title: Introduction to Transformers
//!     date: 2024-09-12
//!     categories: [AI]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Catalog, CatalogError};
use crate::models::{ContentKind, ItemRecord};

/// Schema version this build reads and writes.
pub const CATALOG_VERSION: u32 = 1;

/// Maximum catalog file size (10 MB). Larger files are refused rather than
/// read into memory.
const MAX_CATALOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// On-disk catalog layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl CatalogFile {
    /// Check the version and build the catalog.
    pub fn into_catalog(self, kind: ContentKind) -> Result<Catalog, CatalogError> {
        if self.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                kind,
                version: self.version,
                supported: CATALOG_VERSION,
            });
        }
        Catalog::new(kind, self.items)
    }
}

/// Parse catalog YAML for `kind`.
pub fn parse_catalog(kind: ContentKind, yaml: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_yml::from_str(yaml)
        .with_context(|| format!("failed to parse {kind} catalog YAML"))?;
    Ok(file.into_catalog(kind)?)
}

/// Load one kind's catalog from `dir`.
///
/// A missing file yields an empty catalog so that the listing renders its
/// empty state instead of failing the whole site.
pub fn load_catalog(dir: &Path, kind: ContentKind) -> Result<Catalog> {
    let path = dir.join(kind.file_name());

    let metadata = match std::fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(kind = %kind, path = %path.display(), "catalog file missing, using empty catalog");
            return Ok(Catalog::empty(kind));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to stat {}", path.display()));
        }
    };

    if metadata.len() > MAX_CATALOG_FILE_SIZE {
        anyhow::bail!(
            "{} is {} bytes, exceeding the {MAX_CATALOG_FILE_SIZE} byte limit",
            path.display(),
            metadata.len()
        );
    }

    let yaml = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let catalog =
        parse_catalog(kind, &yaml).with_context(|| format!("invalid catalog {}", path.display()))?;

    info!(
        kind = %kind,
        items = catalog.len(),
        path = %path.display(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// All catalogs the site serves.
#[derive(Debug, Clone)]
pub struct Site {
    pub blog: Catalog,
    pub projects: Catalog,
    pub events: Catalog,
}

impl Site {
    /// Catalog for a given kind.
    pub fn catalog(&self, kind: ContentKind) -> &Catalog {
        match kind {
            ContentKind::Blog => &self.blog,
            ContentKind::Project => &self.projects,
            ContentKind::Event => &self.events,
        }
    }
}

/// Load every catalog from `dir`.
pub fn load_site(dir: &Path) -> Result<Site> {
    Ok(Site {
        blog: load_catalog(dir, ContentKind::Blog)?,
        projects: load_catalog(dir, ContentKind::Project)?,
        events: load_catalog(dir, ContentKind::Event)?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    use std::ops::Deref;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    /// Temp directory removed on drop, even if the test panics.
    struct TestDir(std::path::PathBuf);

    impl TestDir {
        fn new(name: &str) -> Self {
            let n = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let path = std::env::temp_dir()
                .join(format!("synapse_test_{name}_{n}_{}", std::process::id()));
            let _ = std::fs::remove_dir_all(&path);
            std::fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Deref for TestDir {
        type Target = Path;
        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    const EVENTS_YAML: &str = r#"
version: 1
items:
  - id: spring-hackathon
    title: Spring Hackathon
    date: 2025-04-12
    status: upcoming
    location: Engineering Hall
    image: [hack-1.jpg, hack-2.jpg]
  - id: ml-workshop
    title: ML Workshop
    date: 2024-11-02
    status: past
    image: workshop.jpg
"#;

    #[test]
    fn parse_events() {
        let catalog = parse_catalog(ContentKind::Event, EVENTS_YAML).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].media.len(), 2);
        assert_eq!(catalog.items()[1].media, vec!["workshop.jpg".to_string()]);
    }

    #[test]
    fn wrong_version_rejected() {
        let err = parse_catalog(ContentKind::Blog, "version: 2\nitems: []\n").unwrap_err();
        let catalog_err = err.downcast_ref::<CatalogError>().unwrap();
        assert!(matches!(
            catalog_err,
            CatalogError::UnsupportedVersion { version: 2, .. }
        ));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(parse_catalog(ContentKind::Blog, "version: [").is_err());
    }

    #[test]
    fn load_site_from_dir() {
        let dir = TestDir::new("load_site");
        std::fs::write(dir.join("events.yml"), EVENTS_YAML).unwrap();

        let site = load_site(&dir).unwrap();
        assert_eq!(site.catalog(ContentKind::Event).len(), 2);
        // Missing files degrade to empty catalogs.
        assert!(site.blog.is_empty());
        assert!(site.projects.is_empty());
    }

    #[test]
    fn invalid_file_names_path() {
        let dir = TestDir::new("invalid_file");
        std::fs::write(
            dir.join("blog.yml"),
            "version: 1\nitems:\n  - {id: Bad Id, title: T, date: 2024-01-01}\n",
        )
        .unwrap();

        let err = load_catalog(&dir, ContentKind::Blog).unwrap_err();
        assert!(format!("{err:#}").contains("blog.yml"));
    }
}
