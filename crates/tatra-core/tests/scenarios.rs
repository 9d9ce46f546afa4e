use tatra_core::prelude::*;

fn term(slug: &str) -> TaxonomyTerm {
    TaxonomyTerm::new(slug, slug, slug)
}

fn trail(title: &str, slug: &str, difficulty: Difficulty, region: &str, feature: &str) -> Trail {
    let mut t = Trail::new(slug, title, slug, TrailData::new(difficulty));
    t.regions.push(term(region));
    t.features.push(term(feature));
    t
}

/// Morskie Oko, Giewont, Dolina Kościeliska.
fn three_trails() -> Vec<Trail> {
    vec![
        trail("Morskie Oko", "morskie-oko", Difficulty::Moderate, "high-tatras", "lake"),
        trail("Giewont", "giewont", Difficulty::Difficult, "western-tatras", "peak"),
        trail(
            "Dolina Kościeliska",
            "dolina-koscieliska",
            Difficulty::Easy,
            "western-tatras",
            "viewpoint",
        ),
    ]
}

fn slugs(trails: &[Trail]) -> Vec<&str> {
    trails.iter().map(|t| t.slug.as_str()).collect()
}

#[test]
fn region_filter() {
    let hits = filter::apply(&three_trails(), &FilterCriteria::new().with_region("western-tatras"));
    assert_eq!(slugs(&hits), ["giewont", "dolina-koscieliska"]);
}

#[test]
fn difficulty_is_or_within_dimension() {
    let criteria =
        FilterCriteria::new().with_difficulties([Difficulty::Easy, Difficulty::Moderate]);
    let hits = filter::apply(&three_trails(), &criteria);
    assert_eq!(slugs(&hits), ["morskie-oko", "dolina-koscieliska"]);
}

#[test]
fn dimensions_are_and_combined() {
    let criteria = FilterCriteria::new()
        .with_region("western-tatras")
        .with_difficulties([Difficulty::Easy]);
    let hits = filter::apply(&three_trails(), &criteria);
    assert_eq!(slugs(&hits), ["dolina-koscieliska"]);
}

#[test]
fn search_is_case_insensitive() {
    let hits = filter::apply(&three_trails(), &FilterCriteria::new().with_search("giewont"));
    assert_eq!(slugs(&hits), ["giewont"]);

    let hits = filter::apply(&three_trails(), &FilterCriteria::new().with_search("KOŚCIELISKA"));
    assert_eq!(slugs(&hits), ["dolina-koscieliska"]);
}

#[test]
fn unknown_slug_matches_nothing() {
    let hits = filter::apply(&three_trails(), &FilterCriteria::new().with_features(["glacier"]));
    assert!(hits.is_empty());
}

#[test]
fn season_and_trail_type_dimensions_filter() {
    let mut trails = three_trails();
    let tag = |t: &mut Trail, season: &str, kind: &str| {
        t.seasons.push(term(season));
        t.trail_types.push(term(kind));
    };
    tag(&mut trails[0], "summer", "out-and-back");
    tag(&mut trails[1], "fall", "loop");
    tag(&mut trails[2], "fall", "out-and-back");

    let fall = filter::apply(&trails, &FilterCriteria::from_query_str("season=fall"));
    assert_eq!(slugs(&fall), ["giewont", "dolina-koscieliska"]);

    let loops = filter::apply(&trails, &FilterCriteria::from_query_str("type=loop"));
    assert_eq!(slugs(&loops), ["giewont"]);

    let both = FilterCriteria::new()
        .with_seasons(["summer"])
        .with_trail_types(["loop"]);
    assert!(filter::apply(&trails, &both).is_empty());
}

#[test]
fn search_matches_excerpt() {
    let mut trails = three_trails();
    trails[1].excerpt = Some("Szczyt z charakterystycznym krzyżem".to_string());
    let hits = filter::apply(&trails, &FilterCriteria::new().with_search("KRZYŻEM"));
    assert_eq!(slugs(&hits), ["giewont"]);
}

#[test]
fn unknown_difficulty_deep_link_lists_nothing() {
    let db = TrailDb::bundled().unwrap();
    assert!(db.filter(&FilterCriteria::from_query_str("difficulty=extreme")).is_empty());
    assert!(db
        .filter(&FilterCriteria::from_query_str("difficulty=extreme&region=western-tatras"))
        .is_empty());
    assert_eq!(
        slugs(&db.filter(&FilterCriteria::from_query_str("difficulty=extreme,easy"))),
        ["dolina-koscieliska"]
    );
}

#[test]
fn pagination_slices() {
    let trails = three_trails();
    assert_eq!(slugs(&paginate(&trails, 2, 2)), ["dolina-koscieliska"]);
    assert!(paginate(&trails, 2, 3).is_empty());
    assert_eq!(slugs(&paginate(&trails, 2, 1)), ["morskie-oko", "giewont"]);
}

#[test]
fn deep_link_round_trip() {
    let criteria = FilterCriteria::from_query_str("?region=western-tatras&difficulty=easy,difficult");
    let hits = filter::apply(&three_trails(), &criteria);
    assert_eq!(slugs(&hits), ["giewont", "dolina-koscieliska"]);

    let again = FilterCriteria::from_query_str(&criteria.to_query_string());
    assert_eq!(again, criteria);
}

#[test]
fn bundled_dataset_matches_scenarios() {
    let db = TrailDb::bundled().unwrap();

    let western = db.filter(&FilterCriteria::new().with_region("western-tatras"));
    assert_eq!(slugs(&western), ["giewont", "dolina-koscieliska"]);

    let searched = db.filter(&FilterCriteria::new().with_search("giewont"));
    assert_eq!(slugs(&searched), ["giewont"]);

    let by_excerpt = db.filter(&FilterCriteria::new().with_search("krzyżem"));
    assert_eq!(slugs(&by_excerpt), ["giewont"]);

    let fall = db.filter(&FilterCriteria::from_query_str("season=fall"));
    assert_eq!(slugs(&fall), ["giewont", "dolina-koscieliska"]);

    let markers = db.markers(&FilterCriteria::new());
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0].region.as_deref(), Some("Tatry Wysokie"));
    assert_eq!(db.stats().with_coordinates, 3);
}

#[test]
fn listing_page_sorts_before_slicing() {
    let db = TrailDb::bundled().unwrap();

    let page = db.page(&FilterCriteria::new(), SortOrder::DifficultyAsc, 2, 1);
    assert_eq!(slugs(&page.trails), ["dolina-koscieliska", "morskie-oko"]);
    assert_eq!(page.info.total_items, 3);
    assert_eq!(page.info.total_pages, 2);
    assert!(page.info.has_next);

    let last = db.page(&FilterCriteria::new(), SortOrder::DistanceDesc, 2, 2);
    assert_eq!(slugs(&last.trails), ["morskie-oko"]);
    assert!(!last.info.has_next);
}

#[test]
fn find_by_slug_respects_language() {
    let db = TrailDb::bundled().unwrap();
    assert!(db.find_by_slug("giewont", Some(Language::Pl)).is_some());
    assert!(db.find_by_slug("giewont", Some(Language::En)).is_none());
    assert!(db.find_by_slug("rysy", None).is_none());
    assert_eq!(db.for_language(Language::Pl).len(), 3);
}
