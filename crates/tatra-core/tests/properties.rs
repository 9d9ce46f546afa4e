use proptest::prelude::*;
use tatra_core::prelude::*;

const REGIONS: [&str; 3] = ["high-tatras", "western-tatras", "eastern-tatras"];
const SEASONS: [&str; 3] = ["summer", "fall", "winter"];
const FEATURES: [&str; 4] = ["lake", "peak", "viewpoint", "waterfall"];
const TRAIL_TYPES: [&str; 3] = ["loop", "out-and-back", "point-to-point"];
const DIFFICULTY_SLUGS: [&str; 6] = [
    "easy",
    "moderate",
    "difficult",
    "very_difficult",
    "expert",
    "extreme",
];
const EXCERPTS: [&str; 3] = [
    "Szlak nad jezioro",
    "Widok na szczyt z krzyżem",
    "Dolina z wodospadem",
];

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn slug_subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(pool.to_vec(), 0..=pool.len())
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn coordinate() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("NaN".to_string())),
        Just(Some("inf".to_string())),
        Just(Some("n/a".to_string())),
        (-200.0f64..200.0).prop_map(|v| Some(format!("{v:.4}"))),
    ]
}

prop_compose! {
    fn arb_trail()(
        id in 0u32..10_000,
        difficulty in difficulty(),
        regions in slug_subset(&REGIONS),
        seasons in slug_subset(&SEASONS),
        trail_types in slug_subset(&TRAIL_TYPES),
        features in slug_subset(&FEATURES),
        excerpt in prop::option::of(prop::sample::select(EXCERPTS.to_vec())),
        lat in coordinate(),
        lng in coordinate(),
    ) -> Trail {
        let mut data = TrailData::new(difficulty);
        data.gps_latitude = lat;
        data.gps_longitude = lng;
        let slug = format!("trail-{id}");
        let mut t = Trail::new(slug.clone(), format!("Trail {id}"), slug, data);
        let terms = |slugs: Vec<String>| -> Vec<TaxonomyTerm> {
            slugs.iter().map(|s| TaxonomyTerm::new(s.as_str(), s.as_str(), s.as_str())).collect()
        };
        t.regions = terms(regions);
        t.excerpt = excerpt.map(str::to_string);
        t.seasons = terms(seasons);
        t.trail_types = terms(trail_types);
        t.features = terms(features);
        t
    }
}

prop_compose! {
    fn arb_criteria()(
        regions in prop::option::of(slug_subset(&REGIONS)),
        difficulties in prop::option::of(slug_subset(&DIFFICULTY_SLUGS)),
        seasons in prop::option::of(slug_subset(&SEASONS)),
        trail_types in prop::option::of(slug_subset(&TRAIL_TYPES)),
        features in prop::option::of(slug_subset(&FEATURES)),
        search in prop::option::of("[a-zA-Z0-9 ]{0,6}"),
    ) -> FilterCriteria {
        FilterCriteria {
            region: regions,
            difficulty: difficulties,
            season: seasons,
            trail_type: trail_types,
            features,
            search,
        }
    }
}

fn is_subsequence(sub: &[Trail], full: &[Trail]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_result_is_ordered_subsequence(
        trails in prop::collection::vec(arb_trail(), 0..20),
        criteria in arb_criteria(),
    ) {
        let hits = filter::apply(&trails, &criteria);
        prop_assert!(is_subsequence(&hits, &trails));
    }

    #[test]
    fn prop_empty_criteria_is_identity(trails in prop::collection::vec(arb_trail(), 0..20)) {
        prop_assert_eq!(filter::apply(&trails, &FilterCriteria::new()), trails);
    }

    #[test]
    fn prop_disjoint_dimensions_compose(
        trails in prop::collection::vec(arb_trail(), 0..20),
        regions in slug_subset(&REGIONS),
        difficulties in prop::collection::vec(difficulty(), 1..3),
    ) {
        let c1 = FilterCriteria { region: Some(regions.clone()), ..Default::default() };
        let c2 = FilterCriteria::new().with_difficulties(difficulties.clone());
        let both = FilterCriteria {
            region: Some(regions),
            ..FilterCriteria::new().with_difficulties(difficulties)
        };
        prop_assert_eq!(
            filter::apply(&filter::apply(&trails, &c1), &c2),
            filter::apply(&trails, &both)
        );
    }

    #[test]
    fn prop_difficulty_is_or_combined(
        trails in prop::collection::vec(arb_trail(), 0..20),
        d1 in difficulty(),
        d2 in difficulty(),
    ) {
        let criteria = FilterCriteria::new().with_difficulties([d1, d2]);
        for t in filter::apply(&trails, &criteria) {
            prop_assert!(t.difficulty() == d1 || t.difficulty() == d2);
        }
    }

    #[test]
    fn prop_unknown_difficulty_matches_nothing(trails in prop::collection::vec(arb_trail(), 0..20)) {
        let criteria = FilterCriteria::from_query_str("difficulty=extreme");
        prop_assert!(filter::apply(&trails, &criteria).is_empty());
    }

    #[test]
    fn prop_search_hits_title_or_excerpt(
        trails in prop::collection::vec(arb_trail(), 0..20),
        needle in prop::sample::select(vec!["trail 1", "KRZYŻEM", "dolina", "z"]),
    ) {
        let criteria = FilterCriteria::new().with_search(needle);
        let lower = needle.to_lowercase();
        for t in filter::apply(&trails, &criteria) {
            let in_title = t.title.to_lowercase().contains(&lower);
            let in_excerpt = t.excerpt.as_deref().is_some_and(|e| e.to_lowercase().contains(&lower));
            prop_assert!(in_title || in_excerpt);
        }
    }

    #[test]
    fn prop_markers_are_finite(trails in prop::collection::vec(arb_trail(), 0..20)) {
        for m in markers::project_markers(&trails) {
            prop_assert!(m.position.lat.is_finite());
            prop_assert!(m.position.lng.is_finite());
        }
    }

    #[test]
    fn prop_pages_cover_collection(
        items in prop::collection::vec(any::<u16>(), 0..50),
        size in 1usize..8,
    ) {
        let info = PageInfo::new(items.len(), size, 1);
        let mut joined = Vec::new();
        for page in 1..=info.total_pages {
            joined.extend(paginate(&items, size, page));
        }
        prop_assert_eq!(joined, items.clone());
        prop_assert!(paginate(&items, size, info.total_pages + 1).is_empty());
    }

    #[test]
    fn prop_query_string_round_trips(
        trails in prop::collection::vec(arb_trail(), 0..20),
        criteria in arb_criteria(),
    ) {
        let normalized = criteria.normalized();
        let decoded = FilterCriteria::from_query_str(&normalized.to_query_string());
        prop_assert_eq!(filter::apply(&trails, &decoded), filter::apply(&trails, &criteria));
        prop_assert_eq!(decoded, normalized);
    }
}
