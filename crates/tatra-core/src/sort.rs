// crates/tatra-core/src/sort.rs
use crate::model::{Language, Trail};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Listing order offered by the trail database view.
///
/// The filter engine preserves input order; sorting is an explicit step the
/// caller applies afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    DifficultyAsc,
    DifficultyDesc,
    DistanceAsc,
    DistanceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Newest,
        SortOrder::DifficultyAsc,
        SortOrder::DifficultyDesc,
        SortOrder::DistanceAsc,
        SortOrder::DistanceDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::DifficultyAsc => "difficulty-asc",
            SortOrder::DifficultyDesc => "difficulty-desc",
            SortOrder::DistanceAsc => "distance-asc",
            SortOrder::DistanceDesc => "distance-desc",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::Pl, SortOrder::Newest) => "Najnowsze",
            (Language::Pl, SortOrder::DifficultyAsc) => "Trudność (rosnąco)",
            (Language::Pl, SortOrder::DifficultyDesc) => "Trudność (malejąco)",
            (Language::Pl, SortOrder::DistanceAsc) => "Dystans (rosnąco)",
            (Language::Pl, SortOrder::DistanceDesc) => "Dystans (malejąco)",
            (Language::En, SortOrder::Newest) => "Newest",
            (Language::En, SortOrder::DifficultyAsc) => "Difficulty (ascending)",
            (Language::En, SortOrder::DifficultyDesc) => "Difficulty (descending)",
            (Language::En, SortOrder::DistanceAsc) => "Distance (ascending)",
            (Language::En, SortOrder::DistanceDesc) => "Distance (descending)",
        }
    }

    fn compare(self, a: &Trail, b: &Trail) -> Ordering {
        match self {
            // ISO-8601 dates order lexicographically.
            SortOrder::Newest => b.date.cmp(&a.date),
            SortOrder::DifficultyAsc => a.difficulty().cmp(&b.difficulty()),
            SortOrder::DifficultyDesc => b.difficulty().cmp(&a.difficulty()),
            SortOrder::DistanceAsc => a.trail_data.distance_km.total_cmp(&b.trail_data.distance_km),
            SortOrder::DistanceDesc => b.trail_data.distance_km.total_cmp(&a.trail_data.distance_km),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s.trim())
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable in-place sort; ties keep their relative order.
pub fn sort_trails(trails: &mut [Trail], order: SortOrder) {
    trails.sort_by(|a, b| order.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, TrailData};

    fn trail(slug: &str, d: Difficulty, km: f64, date: &str) -> Trail {
        let mut data = TrailData::new(d);
        data.distance_km = km;
        let mut t = Trail::new(slug, slug, slug, data);
        t.date = date.to_string();
        t
    }

    fn slugs(ts: &[Trail]) -> Vec<&str> {
        ts.iter().map(|t| t.slug.as_str()).collect()
    }

    #[test]
    fn sorts_each_order() {
        let mut ts = vec![
            trail("a", Difficulty::Moderate, 9.0, "2024-01-15"),
            trail("b", Difficulty::Difficult, 11.5, "2024-01-14"),
            trail("c", Difficulty::Easy, 12.0, "2024-01-13"),
        ];
        sort_trails(&mut ts, SortOrder::DifficultyAsc);
        assert_eq!(slugs(&ts), ["c", "a", "b"]);
        sort_trails(&mut ts, SortOrder::DistanceDesc);
        assert_eq!(slugs(&ts), ["c", "b", "a"]);
        sort_trails(&mut ts, SortOrder::Newest);
        assert_eq!(slugs(&ts), ["a", "b", "c"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut ts = vec![
            trail("x", Difficulty::Easy, 1.0, "2024-01-01"),
            trail("y", Difficulty::Easy, 2.0, "2024-01-01"),
        ];
        sort_trails(&mut ts, SortOrder::DifficultyDesc);
        assert_eq!(slugs(&ts), ["x", "y"]);
    }

    #[test]
    fn parses_dropdown_values() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
        assert!("random".parse::<SortOrder>().is_err());
    }
}
