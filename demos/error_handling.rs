//! Error handling example for tatra-core
//!
//! The engine never fails: unknown slugs and missing coordinates simply
//! exclude trails. Errors only come from the data boundary.

use tatra_core::markers::marker_for;
use tatra_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Tatra Trails: Error Handling ===\n");

    // Example 1: Loading a missing dataset
    println!("--- Example 1: Missing dataset ---");
    match TrailDb::load_from_path("does/not/exist/trails.json") {
        Ok(db) => println!("  unexpectedly loaded {} trails", db.trails.len()),
        Err(TrailError::NotFound(msg)) => println!("  not found: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Malformed payload
    println!("--- Example 2: Malformed JSON ---");
    match TrailDb::from_json_str("{\"trails\": \"nope\"}") {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(e) => println!("  {e}"),
    }
    println!();

    let db = TrailDb::bundled()?;

    // Example 3: Unknown slugs are not errors
    println!("--- Example 3: Unknown slugs ---");
    let criteria = FilterCriteria::from_query_str("region=alps&difficulty=extreme");
    println!("  parsed criteria: {criteria:?}");
    println!("  matches: {}", db.filter(&criteria).len());
    println!();

    // Example 4: Missing coordinates drop the marker
    println!("--- Example 4: Trails without usable coordinates ---");
    let mut data = TrailData::new(Difficulty::Moderate);
    data.gps_latitude = Some("49.25".into());
    data.gps_longitude = Some("n/a".into());
    let trail = Trail::new("x", "Unmapped trail", "unmapped-trail", data);
    println!("  marker: {:?}", marker_for(&trail));
    println!();

    // Example 5: Invalid configuration
    println!("--- Example 5: Invalid configuration ---");
    match ContentConfig::from_lookup(|key| (key == "TATRA_PAGE_SIZE").then(|| "zero".to_string())) {
        Ok(cfg) => println!("  page size: {}", cfg.page_size),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
