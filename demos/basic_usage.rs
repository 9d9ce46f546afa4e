//! Basic usage of tatra-core
//!
//! Filters the bundled sample trails the way the listing page does:
//! criteria from a deep link, refined by toggles, sorted and paged.

use tatra_core::format::{format_distance, format_duration};
use tatra_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Tatra Trails: Basic Usage ===\n");

    let db = TrailDb::bundled()?;
    let stats = db.stats();
    println!(
        "Loaded {} trails ({} with coordinates), {} regions\n",
        stats.trails, stats.with_coordinates, stats.regions
    );

    // 1. Criteria from a deep link
    println!("--- Deep link: /trails?region=western-tatras ---");
    let mut criteria = FilterCriteria::from_query_str("?region=western-tatras");
    for t in db.filter(&criteria) {
        println!("  {} ({})", t.title, t.difficulty().label(Language::Pl));
    }
    println!();

    // 2. Toggle a difficulty checkbox
    println!("--- Toggle difficulty: easy ---");
    criteria.toggle_difficulty(Difficulty::Easy);
    for t in db.filter(&criteria) {
        println!("  {}", t.title);
    }
    println!("  link: {}", criteria.to_href("/trails"));
    println!();

    // 3. Free-text search
    println!("--- Search: \"oko\" ---");
    let search = FilterCriteria::new().with_search("oko");
    for t in db.filter(&search) {
        println!("  {}", t.title);
    }
    println!();

    // 4. Sorted, paged listing
    println!("--- All trails, longest first, 2 per page ---");
    let everything = FilterCriteria::new();
    for page in 1..=2 {
        let result = db.page(&everything, SortOrder::DistanceDesc, 2, page);
        println!("  page {}/{}", result.info.page, result.info.total_pages);
        for t in &result.trails {
            println!(
                "    {:<22} {:>8}  {}",
                t.title,
                format_distance(t.trail_data.distance_km, Language::En),
                format_duration(t.trail_data.estimated_time_hours, Language::En)
            );
        }
    }

    Ok(())
}
