use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tatra_core::{Difficulty, FilterCriteria, Language, SortOrder};

/// CLI arguments for tatra-cli
#[derive(Debug, Parser)]
#[command(
    name = "tatra",
    version,
    about = "Browse, filter and export Tatra trail reports"
)]
pub struct CliArgs {
    /// Dataset export to read (`.json`, `.json.gz`). Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", global = true, conflicts_with = "endpoint")]
    pub input: Option<PathBuf>,

    /// Content language (pl, en). Defaults to TATRA_LANGUAGE or pl.
    #[arg(short = 'l', long = "lang", global = true)]
    pub lang: Option<Language>,

    /// Fetch from a WordPress GraphQL endpoint instead of a file.
    #[arg(short = 'e', long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by `list` and `map`.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Deep-link query string, e.g. "region=western-tatras&difficulty=easy"
    #[arg(long = "filter")]
    pub query: Option<String>,

    /// Region slug (repeatable)
    #[arg(long)]
    pub region: Vec<String>,

    /// Difficulty: easy, moderate, difficult, very_difficult, expert (repeatable)
    #[arg(long)]
    pub difficulty: Vec<Difficulty>,

    /// Season slug (repeatable)
    #[arg(long)]
    pub season: Vec<String>,

    /// Trail type slug (repeatable)
    #[arg(long = "type")]
    pub trail_type: Vec<String>,

    /// Feature slug (repeatable)
    #[arg(long)]
    pub feature: Vec<String>,

    /// Case-insensitive text matched against title and excerpt
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// `--filter` first, individual flags layered on top.
    pub fn criteria(&self) -> FilterCriteria {
        let mut c = self
            .query
            .as_deref()
            .map(FilterCriteria::from_query_str)
            .unwrap_or_default();
        for r in &self.region {
            c = c.with_region(r.as_str());
        }
        c = c
            .with_difficulties(self.difficulty.iter().copied())
            .with_seasons(self.season.iter().map(String::as_str))
            .with_trail_types(self.trail_type.iter().map(String::as_str))
            .with_features(self.feature.iter().map(String::as_str));
        if let Some(s) = &self.search {
            c.set_search(s.as_str());
        }
        c.normalized()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List trails matching the filters, one page at a time
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// newest, difficulty-asc, difficulty-desc, distance-asc, distance-desc
        #[arg(long, default_value_t = SortOrder::Newest)]
        sort: SortOrder,

        /// One-indexed page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Trails per page (defaults to TATRA_PAGE_SIZE or 12)
        #[arg(long = "page-size")]
        page_size: Option<usize>,
    },

    /// Show one trail by slug
    Show {
        slug: String,
    },

    /// Print map markers for the trails matching the filters
    Map {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List taxonomy terms
    Taxonomies,

    /// Write a binary snapshot of the loaded dataset, all languages included
    Snapshot {
        /// Output path
        out: PathBuf,
    },

    /// Newest trails, as featured on the home page
    #[cfg(feature = "fetch")]
    Featured,

    /// List blog posts, newest first
    #[cfg(feature = "fetch")]
    Posts {
        /// Category slug
        #[arg(long)]
        category: Option<String>,

        /// Posts per page
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Cursor printed at the end of the previous page
        #[arg(long)]
        after: Option<String>,
    },

    /// Show one blog post by slug
    #[cfg(feature = "fetch")]
    Post {
        slug: String,
    },
}
