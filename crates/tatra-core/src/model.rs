// crates/tatra-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site language. Polish is the default variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    /// The other language of the pair, used by the language switcher.
    pub fn other(self) -> Self {
        match self {
            Language::Pl => Language::En,
            Language::En => Language::Pl,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    /// Content-store codes come upper-cased (`PL`), URLs lower-cased (`pl`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language code: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Trail difficulty, ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    VeryDifficult,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Difficult,
        Difficulty::VeryDifficult,
        Difficulty::Expert,
    ];

    /// Slug as used in URLs and by the content store.
    pub fn slug(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Difficult => "difficult",
            Difficulty::VeryDifficult => "very_difficult",
            Difficulty::Expert => "expert",
        }
    }

    /// Localized display label.
    pub fn label(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::Pl, Difficulty::Easy) => "Łatwy",
            (Language::Pl, Difficulty::Moderate) => "Umiarkowany",
            (Language::Pl, Difficulty::Difficult) => "Trudny",
            (Language::Pl, Difficulty::VeryDifficult) => "Bardzo trudny",
            (Language::Pl, Difficulty::Expert) => "Ekspert",
            (Language::En, Difficulty::Easy) => "Easy",
            (Language::En, Difficulty::Moderate) => "Moderate",
            (Language::En, Difficulty::Difficult) => "Difficult",
            (Language::En, Difficulty::VeryDifficult) => "Very Difficult",
            (Language::En, Difficulty::Expert) => "Expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts both `very_difficult` (field value) and `very-difficult`
    /// (taxonomy slug), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "difficult" => Ok(Difficulty::Difficult),
            "very_difficult" => Ok(Difficulty::VeryDifficult),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The four independent classification axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Taxonomy {
    Region,
    Season,
    TrailType,
    Feature,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 4] = [
        Taxonomy::Region,
        Taxonomy::Season,
        Taxonomy::TrailType,
        Taxonomy::Feature,
    ];

    pub fn label(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::Pl, Taxonomy::Region) => "Region",
            (Language::Pl, Taxonomy::Season) => "Sezon",
            (Language::Pl, Taxonomy::TrailType) => "Typ szlaku",
            (Language::Pl, Taxonomy::Feature) => "Atrakcje",
            (Language::En, Taxonomy::Region) => "Region",
            (Language::En, Taxonomy::Season) => "Season",
            (Language::En, Taxonomy::TrailType) => "Trail type",
            (Language::En, Taxonomy::Feature) => "Features",
        }
    }
}

/// A named tag belonging to one taxonomy.
///
/// `count` is maintained by the content store and treated as read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyTerm {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub count: Option<u32>,
}

impl TaxonomyTerm {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            count: None,
        }
    }
}

/// A sibling translation of a trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub uri: String,
    pub slug: String,
    pub title: Option<String>,
    pub language: Language,
}

/// Trail metrics block.
///
/// GPS coordinates are kept as the raw strings the content store delivers;
/// they are parsed on projection (see [`crate::markers`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailData {
    pub difficulty: Difficulty,
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub estimated_time_hours: f64,
    pub gps_latitude: Option<String>,
    pub gps_longitude: Option<String>,
    pub trail_map_embed: Option<String>,
}

impl TrailData {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            distance_km: 0.0,
            elevation_gain_m: 0.0,
            estimated_time_hours: 0.0,
            gps_latitude: None,
            gps_longitude: None,
            trail_map_embed: None,
        }
    }
}

/// A single hiking-route content record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: String,
    pub database_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    /// ISO-8601 publication date.
    pub date: String,
    pub modified: Option<String>,
    pub trail_data: TrailData,
    pub regions: Vec<TaxonomyTerm>,
    pub seasons: Vec<TaxonomyTerm>,
    pub trail_types: Vec<TaxonomyTerm>,
    pub features: Vec<TaxonomyTerm>,
    pub language: Option<Language>,
    pub translations: Vec<Translation>,
}

impl Trail {
    /// Minimal trail with no taxonomy associations.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        trail_data: TrailData,
    ) -> Self {
        Self {
            id: id.into(),
            database_id: None,
            title: title.into(),
            slug: slug.into(),
            excerpt: None,
            content: None,
            date: String::new(),
            modified: None,
            trail_data,
            regions: Vec::new(),
            seasons: Vec::new(),
            trail_types: Vec::new(),
            features: Vec::new(),
            language: None,
            translations: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.trail_data.difficulty
    }

    /// Terms the trail is tagged with on the given axis.
    pub fn terms(&self, taxonomy: Taxonomy) -> &[TaxonomyTerm] {
        match taxonomy {
            Taxonomy::Region => &self.regions,
            Taxonomy::Season => &self.seasons,
            Taxonomy::TrailType => &self.trail_types,
            Taxonomy::Feature => &self.features,
        }
    }

    /// Name of the first region, shown on map popups.
    pub fn primary_region(&self) -> Option<&str> {
        self.regions.first().map(|r| r.name.as_str())
    }

    /// Slug of the sibling translation in `lang`, if any.
    pub fn translation_slug(&self, lang: Language) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.language == lang)
            .map(|t| t.slug.as_str())
    }
}

/// A blog post from the content store.
///
/// Posts sit beside trails in the CMS but never enter the filter engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub database_id: Option<i64>,
    pub title: String,
    pub slug: String,
    /// Plain-text excerpt; derived from `content` when the CMS has none.
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub date: String,
    pub modified: Option<String>,
    pub categories: Vec<TaxonomyTerm>,
    pub tags: Vec<TaxonomyTerm>,
    pub author: Option<String>,
    pub language: Option<Language>,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            database_id: None,
            title: title.into(),
            slug: slug.into(),
            excerpt: None,
            content: None,
            date: String::new(),
            modified: None,
            categories: Vec::new(),
            tags: Vec::new(),
            author: None,
            language: None,
        }
    }

    /// Whole minutes at 200 words per minute; 0 without content.
    pub fn reading_time_minutes(&self) -> usize {
        self.content
            .as_deref()
            .map_or(0, |c| crate::text::reading_time_minutes(c, 200))
    }
}

/// Term lists of one language, as served by the taxonomies query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomies {
    pub regions: Vec<TaxonomyTerm>,
    pub seasons: Vec<TaxonomyTerm>,
    pub trail_types: Vec<TaxonomyTerm>,
    pub features: Vec<TaxonomyTerm>,
}

impl Taxonomies {
    pub fn terms(&self, taxonomy: Taxonomy) -> &[TaxonomyTerm] {
        match taxonomy {
            Taxonomy::Region => &self.regions,
            Taxonomy::Season => &self.seasons,
            Taxonomy::TrailType => &self.trail_types,
            Taxonomy::Feature => &self.features,
        }
    }

    pub fn find(&self, taxonomy: Taxonomy, slug: &str) -> Option<&TaxonomyTerm> {
        self.terms(taxonomy).iter().find(|t| t.slug == slug)
    }

    pub fn is_empty(&self) -> bool {
        Taxonomy::ALL.iter().all(|t| self.terms(*t).is_empty())
    }
}

/// The materialized trail collection owned by the data-fetching boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailDb {
    pub trails: Vec<Trail>,
    pub taxonomies: Taxonomies,
}

impl TrailDb {
    pub fn new(trails: Vec<Trail>, taxonomies: Taxonomies) -> Self {
        Self { trails, taxonomies }
    }
}

/// Simple aggregate statistics for a [`TrailDb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub trails: usize,
    pub regions: usize,
    pub seasons: usize,
    pub trail_types: usize,
    pub features: usize,
    /// Trails that would produce a map marker.
    pub with_coordinates: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_is_ordered() {
        assert!(Difficulty::Easy < Difficulty::Moderate);
        assert!(Difficulty::Moderate < Difficulty::Difficult);
        assert!(Difficulty::Difficult < Difficulty::VeryDifficult);
        assert!(Difficulty::VeryDifficult < Difficulty::Expert);
    }

    #[test]
    fn difficulty_parses_both_slug_styles() {
        assert_eq!("very_difficult".parse::<Difficulty>(), Ok(Difficulty::VeryDifficult));
        assert_eq!("very-difficult".parse::<Difficulty>(), Ok(Difficulty::VeryDifficult));
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn language_codes_are_case_insensitive() {
        assert_eq!("PL".parse::<Language>(), Ok(Language::Pl));
        assert_eq!(" en ".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Pl);
    }

    #[test]
    fn other_language_flips() {
        assert_eq!(Language::Pl.other(), Language::En);
        assert_eq!(Language::En.other(), Language::Pl);
    }

    #[test]
    fn taxonomies_find_by_axis_and_slug() {
        let tax = Taxonomies {
            regions: vec![TaxonomyTerm::new("region-2", "Tatry Zachodnie", "western-tatras")],
            trail_types: vec![TaxonomyTerm::new("type-2", "Pętla", "loop")],
            ..Default::default()
        };
        assert_eq!(
            tax.find(Taxonomy::Region, "western-tatras").map(|t| t.name.as_str()),
            Some("Tatry Zachodnie")
        );
        assert!(tax.find(Taxonomy::Region, "loop").is_none());
        assert!(tax.find(Taxonomy::TrailType, "loop").is_some());
    }

    #[test]
    fn post_reading_time() {
        let mut post = Post::new("p1", "Sprzęt", "sprzet");
        assert_eq!(post.reading_time_minutes(), 0);
        post.content = Some(format!("<p>{}</p>", "słowo ".repeat(201)));
        assert_eq!(post.reading_time_minutes(), 2);
    }

    #[test]
    fn difficulty_serializes_as_snake_case() {
        let json = serde_json::to_string(&Difficulty::VeryDifficult).unwrap();
        assert_eq!(json, "\"very_difficult\"");
    }
}
