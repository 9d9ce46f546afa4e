// crates/tatra-core/src/traits.rs
use crate::filter::FilterCriteria;
use crate::markers::Marker;
use crate::model::{DbStats, Language, Taxonomies, TaxonomyTerm, Trail};
use crate::paginate::PageInfo;
use crate::sort::SortOrder;
use crate::text::fold_key;

/// Slug/name matching helpers for taxonomy-like records.
///
/// Slugs compare exactly; names compare accent- and case-insensitively
/// via [`fold_key`], which is what the taxonomy pickers use for
/// type-ahead.
///
/// # Examples
/// ```rust
/// use tatra_core::{TaxonomyTerm, TermMatch};
///
/// let term = TaxonomyTerm::new("region-2", "Tatry Zachodnie", "western-tatras");
/// assert!(term.has_slug("western-tatras"));
/// assert!(term.name_contains("zachod"));
/// ```
pub trait TermMatch {
    fn slug_str(&self) -> &str;
    fn name_str(&self) -> &str;

    #[inline]
    fn has_slug(&self, slug: &str) -> bool {
        self.slug_str() == slug
    }

    /// Accent-insensitive + case-insensitive substring match on the name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl TermMatch for TaxonomyTerm {
    fn slug_str(&self) -> &str {
        &self.slug
    }

    fn name_str(&self) -> &str {
        &self.name
    }
}

/// One page of a listing, already filtered and sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailPage {
    pub trails: Vec<Trail>,
    pub info: PageInfo,
}

/// Query operations on a materialized trail collection.
pub trait TrailSearch {
    fn stats(&self) -> DbStats;

    /// All trails, in content-store order.
    fn trails(&self) -> &[Trail];

    fn taxonomies(&self) -> &Taxonomies;

    /// Look up a trail by slug. With `lang`, trails tagged with another
    /// language are skipped; untagged trails always qualify.
    fn find_by_slug(&self, slug: &str, lang: Option<Language>) -> Option<&Trail>;

    /// Trails of one language variant. Untagged trails are included.
    fn for_language(&self, lang: Language) -> Vec<Trail>;

    /// [`crate::filter::apply`] over the whole collection.
    fn filter(&self, criteria: &FilterCriteria) -> Vec<Trail>;

    /// Markers of the trails passing `criteria`.
    fn markers(&self, criteria: &FilterCriteria) -> Vec<Marker>;

    /// Filter, sort, then slice one page of the listing view.
    fn page(
        &self,
        criteria: &FilterCriteria,
        order: SortOrder,
        page_size: usize,
        page: usize,
    ) -> TrailPage;
}
