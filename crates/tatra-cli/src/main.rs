//! tatra: command-line interface for tatra-core
//!
//! Inspect, filter and export the trail collection from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ tatra stats
//!
//! - List trails (filters combine with AND, repeated values with OR)
//!   $ tatra list --region western-tatras --difficulty easy --difficulty moderate
//!   $ tatra list --filter "season=summer,fall&type=loop" --sort distance-desc
//!
//! - Show one trail
//!   $ tatra show giewont
//!
//! - Map markers as JSON
//!   $ tatra map --feature lake
//!
//! - Snapshot a dataset export for fast reloads
//!   $ tatra --input trails.json snapshot trails.bin
//!
//! - Blog posts and featured trails (GraphQL only)
//!   $ tatra --endpoint https://cms.example.org/graphql posts --category porady
//!   $ tatra --endpoint https://cms.example.org/graphql post co-spakowac
//!
//! Data source
//! -----------
//!
//! Without flags the CLI uses the sample dataset bundled with `tatra-core`.
//! `--input <path>` reads a dataset export (and caches a `.bin` snapshot next
//! to it); `--endpoint <url>` queries a WordPress GraphQL endpoint.
//! `RUST_LOG` controls log output on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use tatra_core::format::{
    format_date, format_distance, format_duration, format_elevation, format_gps, trail_url,
};
use tatra_core::markers::{trail_position, MapBounds};
use tatra_core::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// The full collection; listing commands narrow it to one language.
fn load_db(args: &CliArgs, config: &ContentConfig, lang: Language) -> anyhow::Result<TrailDb> {
    if let Some(endpoint) = &args.endpoint {
        return fetch_db(endpoint, config, lang);
    }

    let db = match &args.input {
        Some(path) => TrailDb::load_cached(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => TrailDb::bundled()?.clone(),
    };
    debug!(trails = db.trails.len(), "dataset ready");
    Ok(db)
}

fn language_view(db: &TrailDb, lang: Language) -> TrailDb {
    TrailDb::new(db.for_language(lang), db.taxonomies.clone())
}

fn find_trail<'a>(db: &'a TrailDb, slug: &str, lang: Language) -> anyhow::Result<&'a Trail> {
    db.find_by_slug(slug, Some(lang))
        .with_context(|| format!("no trail found for: {slug}"))
}

/// Selected slugs that none of the known taxonomy terms carry.
fn unknown_slugs(criteria: &FilterCriteria, taxonomies: &Taxonomies) -> Vec<(Taxonomy, String)> {
    let dims = [
        (Taxonomy::Region, &criteria.region),
        (Taxonomy::Season, &criteria.season),
        (Taxonomy::TrailType, &criteria.trail_type),
        (Taxonomy::Feature, &criteria.features),
    ];
    let mut unknown = Vec::new();
    for (taxonomy, selected) in dims {
        if taxonomies.terms(taxonomy).is_empty() {
            continue;
        }
        for slug in selected.iter().flatten() {
            if taxonomies.find(taxonomy, slug).is_none() {
                unknown.push((taxonomy, slug.clone()));
            }
        }
    }
    unknown
}

#[cfg(feature = "fetch")]
fn content_client(endpoint: Option<&str>, config: &ContentConfig) -> anyhow::Result<ContentClient> {
    let config = ContentConfig {
        api_url: endpoint.unwrap_or(&config.api_url).to_string(),
        ..config.clone()
    };
    Ok(ContentClient::new(&config)?)
}

#[cfg(feature = "fetch")]
fn fetch_db(endpoint: &str, config: &ContentConfig, lang: Language) -> anyhow::Result<TrailDb> {
    content_client(Some(endpoint), config)?
        .fetch_db(lang)
        .with_context(|| format!("fetching trails from {endpoint}"))
}

#[cfg(not(feature = "fetch"))]
fn fetch_db(_endpoint: &str, _config: &ContentConfig, _lang: Language) -> anyhow::Result<TrailDb> {
    anyhow::bail!("this build has no GraphQL support (enable the `fetch` feature)")
}

fn print_row(t: &Trail, lang: Language) {
    println!(
        "{:<24} {:<16} {:>9}  {}",
        t.slug,
        t.difficulty().label(lang),
        format_distance(t.trail_data.distance_km, lang),
        t.primary_region().unwrap_or("-"),
    );
}

fn print_trail(trail: &Trail, lang: Language) {
    let data = &trail.trail_data;
    println!("{}", trail.title);
    println!("  Slug:       {}", trail.slug);
    println!("  URL:        {}", trail_url(&trail.slug, lang));
    let other = lang.other();
    if let Some(slug) = trail.translation_slug(other) {
        println!("  URL ({other}):   {}", trail_url(slug, other));
    }
    if !trail.date.is_empty() {
        println!("  Published:  {}", format_date(&trail.date, lang));
    }
    println!("  Difficulty: {}", data.difficulty.label(lang));
    println!("  Distance:   {}", format_distance(data.distance_km, lang));
    println!("  Elevation:  {}", format_elevation(data.elevation_gain_m, lang));
    println!("  Time:       {}", format_duration(data.estimated_time_hours, lang));
    if let Some(pos) = trail_position(trail) {
        println!("  GPS:        {}", format_gps(pos.lat, pos.lng));
    }
    for taxonomy in Taxonomy::ALL {
        let terms = trail.terms(taxonomy);
        if !terms.is_empty() {
            let names: Vec<&str> = terms.iter().map(|t| t.name.as_str()).collect();
            println!("  {}: {}", taxonomy.label(lang), names.join(", "));
        }
    }
    if let Some(excerpt) = &trail.excerpt {
        println!();
        println!("  {excerpt}");
    }
}

#[cfg(feature = "fetch")]
fn print_post(post: &Post, lang: Language) {
    use tatra_core::format::{format_relative_time, post_url};

    println!("{}", post.title);
    println!("  URL:       {}", post_url(&post.slug, lang));
    if !post.date.is_empty() {
        println!(
            "  Published: {} ({})",
            format_date(&post.date, lang),
            format_relative_time(&post.date, lang)
        );
    }
    if let Some(author) = &post.author {
        println!("  Author:    {author}");
    }
    if !post.categories.is_empty() {
        let names: Vec<&str> = post.categories.iter().map(|c| c.name.as_str()).collect();
        println!("  Category:  {}", names.join(", "));
    }
    println!("  Reading:   {} min", post.reading_time_minutes());
    if let Some(excerpt) = &post.excerpt {
        println!();
        println!("  {excerpt}");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let config = ContentConfig::from_env()?;
    let lang = args.lang.unwrap_or(config.language);
    let local = || -> anyhow::Result<TrailDb> {
        Ok(language_view(&load_db(&args, &config, lang)?, lang))
    };

    match &args.command {
        Commands::Stats => {
            let stats = local()?.stats();
            println!("Dataset statistics:");
            println!("  Trails: {}", stats.trails);
            println!("  With coordinates: {}", stats.with_coordinates);
            println!("  Regions: {}", stats.regions);
            println!("  Seasons: {}", stats.seasons);
            println!("  Trail types: {}", stats.trail_types);
            println!("  Features: {}", stats.features);
        }

        Commands::List {
            filters,
            sort,
            page,
            page_size,
        } => {
            let db = local()?;
            let criteria = filters.criteria();
            let page_size = page_size.unwrap_or(config.page_size);
            let result = db.page(&criteria, *sort, page_size, *page);
            let info = result.info;

            if info.total_items == 0 {
                println!("No trails match {}", criteria.to_href("/trails"));
                for (taxonomy, slug) in unknown_slugs(&criteria, db.taxonomies()) {
                    println!("  unknown {}: {slug}", taxonomy.label(Language::En).to_lowercase());
                }
            } else if result.trails.is_empty() {
                println!("Page {page} is past the last page ({})", info.total_pages);
            } else {
                for t in &result.trails {
                    print_row(t, lang);
                }
                println!(
                    "-- {}-{} of {} (page {}/{})",
                    info.first_item, info.last_item, info.total_items, info.page, info.total_pages
                );
            }
        }

        Commands::Show { slug } => {
            let db = local()?;
            print_trail(find_trail(&db, slug, lang)?, lang);
        }

        Commands::Map { filters } => {
            let markers = local()?.markers(&filters.criteria());
            let center = MapBounds::from_markers(&markers)
                .map(|b| b.center())
                .unwrap_or(TATRA_CENTER);
            let out = serde_json::json!({ "center": center, "markers": markers });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        Commands::Taxonomies => {
            let db = local()?;
            for taxonomy in Taxonomy::ALL {
                println!("{}:", taxonomy.label(lang));
                for term in db.taxonomies().terms(taxonomy) {
                    match term.count {
                        Some(n) => println!("  {:<20} {} ({n})", term.slug, term.name),
                        None => println!("  {:<20} {}", term.slug, term.name),
                    }
                }
            }
        }

        Commands::Snapshot { out } => {
            let db = load_db(&args, &config, lang)?;
            db.save_snapshot(out)
                .with_context(|| format!("writing snapshot {}", out.display()))?;
            println!("Wrote {} trails to {}", db.trails.len(), out.display());
        }

        #[cfg(feature = "fetch")]
        Commands::Featured => {
            let client = content_client(args.endpoint.as_deref(), &config)?;
            for t in client.fetch_featured_trails(lang)? {
                print_row(&t, lang);
            }
        }

        #[cfg(feature = "fetch")]
        Commands::Posts {
            category,
            limit,
            after,
        } => {
            let client = content_client(args.endpoint.as_deref(), &config)?;
            let page = client.fetch_posts(lang, category.as_deref(), *limit, after.as_deref())?;
            if page.posts.is_empty() {
                println!("No posts");
            }
            for post in &page.posts {
                println!(
                    "{:<32} {:<14} {}",
                    post.slug,
                    format_date(&post.date, lang),
                    post.title
                );
            }
            if let Some(cursor) = page.next_cursor {
                println!("-- more: --after {cursor}");
            }
        }

        #[cfg(feature = "fetch")]
        Commands::Post { slug } => {
            let client = content_client(args.endpoint.as_deref(), &config)?;
            print_post(&client.fetch_post(slug)?, lang);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_language_db() -> TrailDb {
        let mut db = TrailDb::bundled().unwrap().clone();
        let mut english = db.trails[0].clone();
        english.slug = "morskie-oko-en".to_string();
        english.language = Some(Language::En);
        db.trails.push(english);
        db
    }

    #[test]
    fn language_view_narrows_trails_only() {
        let db = two_language_db();
        let pl = language_view(&db, Language::Pl);
        assert_eq!(pl.trails.len(), 3);
        assert_eq!(pl.taxonomies, db.taxonomies);
        assert_eq!(language_view(&db, Language::En).trails.len(), 1);
    }

    #[test]
    fn snapshot_keeps_every_language() {
        let args = CliArgs::parse_from(["tatra", "--lang", "en", "snapshot", "out.bin"]);
        let db = load_db(&args, &ContentConfig::default(), Language::En).unwrap();
        assert_eq!(&db, TrailDb::bundled().unwrap());
    }

    #[test]
    fn unknown_trail_is_an_error() {
        let db = two_language_db();
        assert!(find_trail(&db, "giewont", Language::Pl).is_ok());
        let err = find_trail(&db, "rysy", Language::Pl).unwrap_err();
        assert_eq!(err.to_string(), "no trail found for: rysy");
        assert!(find_trail(&db, "giewont", Language::En).is_err());
    }

    #[test]
    fn reports_unknown_taxonomy_slugs() {
        let db = TrailDb::bundled().unwrap();
        let criteria = FilterCriteria::from_query_str("region=alps,western-tatras&type=loop&features=glacier");
        assert_eq!(
            unknown_slugs(&criteria, db.taxonomies()),
            [
                (Taxonomy::Region, "alps".to_string()),
                (Taxonomy::Feature, "glacier".to_string()),
            ]
        );
    }
}
