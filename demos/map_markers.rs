//! Map markers example
//!
//! Projects the bundled trails to markers and computes the viewport the map
//! page would fit, falling back to the Tatra center.

use tatra_core::format::format_gps;
use tatra_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Tatra Trails: Map Markers ===\n");

    let db = TrailDb::bundled()?;

    for criteria in [
        FilterCriteria::new(),
        FilterCriteria::new().with_features(["lake"]),
        FilterCriteria::new().with_region("eastern-tatras"),
    ] {
        let markers = db.markers(&criteria);
        let label = criteria.to_query_string();
        println!(
            "--- {} ---",
            if label.is_empty() { "all trails" } else { label.as_str() }
        );

        for m in &markers {
            println!(
                "  {:<22} {}  [{}]",
                m.title,
                format_gps(m.position.lat, m.position.lng),
                m.region.as_deref().unwrap_or("-")
            );
        }

        let center = match MapBounds::from_markers(&markers) {
            Some(bounds) => bounds.center(),
            None => {
                println!("  (no markers, using default center)");
                TATRA_CENTER
            }
        };
        println!("  center: {}\n", format_gps(center.lat, center.lng));
    }

    Ok(())
}
