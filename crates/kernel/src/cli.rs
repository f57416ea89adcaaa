//! CLI command implementations.
//!
//! Commands work from the catalogs on disk only; output is plain text
//! tables written to the given writer.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::{Site, load_catalog};
use crate::config::Config;
use crate::gather::ContentQuery;
use crate::media::{ImageKind, ImageResolver};
use crate::models::{ContentItem, ContentKind};
use crate::nav::NavRegistry;
use crate::view::ListingView;

/// List a filtered page of one catalog.
pub fn cmd_list<W: Write>(
    out: &mut W,
    site: &Site,
    config: &Config,
    kind: ContentKind,
    query: ContentQuery,
    page: usize,
) -> Result<()> {
    let view = ListingView::with_query(site.catalog(kind), query);

    if view.is_empty() {
        writeln!(out, "No {} match the current filters.", kind.label().to_lowercase())?;
        if view.can_clear_filters() {
            writeln!(out, "Hint: drop --category/--status to clear filters.")?;
        }
        return Ok(());
    }

    let parts = view.partition();
    let page = view.page(page, config.page_size);

    writeln!(
        out,
        "{:<32} {:<12} {:<12} {:<5} {}",
        "ID", "DATE", "STATUS", "TIER", "TITLE"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;

    for item in &page.items {
        let tier = if parts.spotlight.is_some_and(|s| s.id == item.id) {
            "hero"
        } else if item.important {
            "top"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<32} {:<12} {:<12} {:<5} {}",
            item.id,
            item.sort_key.to_string(),
            item.status.as_deref().unwrap_or("-"),
            tier,
            item.title
        )?;
    }

    writeln!(
        out,
        "\nPage {} of {} ({} matching)",
        page.page, page.total_pages, page.total
    )?;
    Ok(())
}

/// Print the category choices of a catalog.
pub fn cmd_categories<W: Write>(out: &mut W, site: &Site, kind: ContentKind) -> Result<()> {
    let categories = site.catalog(kind).available_categories();
    if categories.is_empty() {
        writeln!(out, "No categories.")?;
        return Ok(());
    }
    writeln!(out, "all")?;
    for category in categories {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

/// Show one item with resolved image paths and its detail route.
pub fn cmd_show<W: Write>(
    out: &mut W,
    site: &Site,
    config: &Config,
    kind: ContentKind,
    id: &str,
    json: bool,
) -> Result<()> {
    let item = site
        .catalog(kind)
        .get(id)
        .with_context(|| format!("{kind} '{id}' not found"))?;

    if json {
        let rendered =
            serde_json::to_string_pretty(item).context("failed to serialize item as JSON")?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    let nav = NavRegistry::site();
    let mut images = ImageResolver::new(config.assets_url.clone(), config.placeholders());
    write_item(out, item, &nav.detail_path(kind, id), &mut images)
}

fn write_item<W: Write>(
    out: &mut W,
    item: &ContentItem,
    path: &str,
    images: &mut ImageResolver,
) -> Result<()> {
    writeln!(out, "{}", item.title)?;
    writeln!(out, "  path:       {path}")?;
    writeln!(out, "  date:       {}", item.sort_key)?;
    if let Some(status) = &item.status {
        writeln!(out, "  status:     {status}")?;
    }
    if !item.categories.is_empty() {
        writeln!(out, "  categories: {}", item.categories.join(", "))?;
    }
    if !item.tags.is_empty() {
        let tags: Vec<String> = item
            .tags
            .iter()
            .map(|t| format!("{} ({})", t.name, t.color))
            .collect();
        writeln!(out, "  tags:       {}", tags.join(", "))?;
    }
    if let Some(author) = &item.author {
        let avatar = images.resolve(author.avatar.as_deref().unwrap_or_default(), ImageKind::Avatar);
        writeln!(out, "  author:     {} [{avatar}]", author.name)?;
    }
    if let Some(location) = &item.location {
        writeln!(out, "  location:   {location}")?;
    }
    if let Some(link) = &item.link {
        writeln!(out, "  link:       {link}")?;
    }
    for (i, key) in item.media.iter().enumerate() {
        writeln!(out, "  media[{i}]:   {}", images.resolve(key, ImageKind::Cover))?;
    }
    if let Some(excerpt) = &item.excerpt {
        writeln!(out, "\n{excerpt}")?;
    }
    Ok(())
}

/// Validate every catalog under `dir`. Fails on the first invalid catalog.
pub fn cmd_check<W: Write>(out: &mut W, dir: &Path) -> Result<()> {
    for kind in ContentKind::ALL {
        let catalog = load_catalog(dir, kind)?;
        let important = catalog.items().iter().filter(|item| item.important).count();
        writeln!(
            out,
            "{:<14} {:>4} items  {:>3} categories  {:>3} important",
            kind.file_name(),
            catalog.len(),
            catalog.available_categories().len(),
            important
        )?;
    }
    writeln!(out, "All catalogs valid.")?;
    Ok(())
}
