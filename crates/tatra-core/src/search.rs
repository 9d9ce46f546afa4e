// crates/tatra-core/src/search.rs
use crate::filter::{self, FilterCriteria};
use crate::markers::{self, Marker};
use crate::model::{DbStats, Language, Taxonomies, Trail, TrailDb};
use crate::paginate::{paginate, PageInfo};
use crate::sort::{sort_trails, SortOrder};
use crate::traits::{TrailPage, TrailSearch};

impl TrailSearch for TrailDb {
    fn stats(&self) -> DbStats {
        DbStats {
            trails: self.trails.len(),
            regions: self.taxonomies.regions.len(),
            seasons: self.taxonomies.seasons.len(),
            trail_types: self.taxonomies.trail_types.len(),
            features: self.taxonomies.features.len(),
            with_coordinates: self
                .trails
                .iter()
                .filter(|t| markers::trail_position(t).is_some())
                .count(),
        }
    }

    fn trails(&self) -> &[Trail] {
        &self.trails
    }

    fn taxonomies(&self) -> &Taxonomies {
        &self.taxonomies
    }

    fn find_by_slug(&self, slug: &str, lang: Option<Language>) -> Option<&Trail> {
        self.trails.iter().find(|t| {
            t.slug == slug
                && match (lang, t.language) {
                    (Some(want), Some(have)) => want == have,
                    _ => true,
                }
        })
    }

    fn for_language(&self, lang: Language) -> Vec<Trail> {
        self.trails
            .iter()
            .filter(|t| t.language.map_or(true, |l| l == lang))
            .cloned()
            .collect()
    }

    fn filter(&self, criteria: &FilterCriteria) -> Vec<Trail> {
        filter::apply(&self.trails, criteria)
    }

    fn markers(&self, criteria: &FilterCriteria) -> Vec<Marker> {
        markers::project_markers(filter::filter_iter(&self.trails, criteria))
    }

    fn page(
        &self,
        criteria: &FilterCriteria,
        order: SortOrder,
        page_size: usize,
        page: usize,
    ) -> TrailPage {
        let mut hits = filter::apply(&self.trails, criteria);
        sort_trails(&mut hits, order);
        TrailPage {
            info: PageInfo::new(hits.len(), page_size, page),
            trails: paginate(&hits, page_size, page),
        }
    }
}
