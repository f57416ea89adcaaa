//! Synapse CLI
//!
//! Inspect and validate the site's content catalogs.
//!
//! Usage:
//!   synapse list blog --search quantum
//!   synapse list projects --status in-progress --page 2
//!   synapse show events spring-hackathon
//!   synapse check

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use synapse_kernel::catalog::load_site;
use synapse_kernel::cli;
use synapse_kernel::{Config, ContentKind, ContentQuery, Site};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "synapse", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a catalog, filtered and paged.
    List {
        /// blog, projects or events.
        kind: ContentKind,

        /// Case-insensitive title search.
        #[arg(long, default_value = "")]
        search: String,

        /// Category to restrict to ("all" for none).
        #[arg(long, default_value = "all")]
        category: String,

        /// Status to restrict to ("all" for none).
        #[arg(long, default_value = "all")]
        status: String,

        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// List the category choices of a catalog.
    Categories {
        kind: ContentKind,
    },

    /// Show one item.
    Show {
        kind: ContentKind,
        id: String,

        /// Print the item as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate every catalog file.
    Check,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    info!(catalog_dir = %config.catalog_dir.display(), "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::List {
            kind,
            search,
            category,
            status,
            page,
        } => {
            let site = load_catalogs(&config)?;
            let query = ContentQuery::new()
                .with_search(search)
                .with_category(&category)
                .with_status(&status);
            cli::cmd_list(&mut out, &site, &config, kind, query, page)?;
        }
        Command::Categories { kind } => {
            let site = load_catalogs(&config)?;
            cli::cmd_categories(&mut out, &site, kind)?;
        }
        Command::Show { kind, id, json } => {
            let site = load_catalogs(&config)?;
            cli::cmd_show(&mut out, &site, &config, kind, &id, json)?;
        }
        Command::Check => cli::cmd_check(&mut out, &config.catalog_dir)?,
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn load_catalogs(config: &Config) -> Result<Site> {
    load_site(&config.catalog_dir).context("failed to load catalogs")
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synapse_kernel=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
