// crates/tatra-core/src/filter.rs

//! # Trail Filter Engine
//!
//! Stateless predicate composition over an in-memory trail collection.
//!
//! * Dimensions are combined with **AND**.
//! * Values inside a multi-valued dimension are combined with **OR**: a trail
//!   passes if at least one of its tags on that axis is accepted.
//! * An absent dimension, an empty value list and an empty search string all
//!   mean "no constraint".
//! * Unknown slugs simply match nothing. There is no error path. This holds
//!   for difficulty too: an unrecognized difficulty keeps the dimension
//!   constrained instead of being dropped.
//!
//! The engine never reorders, never mutates its input and performs no I/O.

use crate::model::{Difficulty, TaxonomyTerm, Trail};
use crate::text::contains_ci;
use crate::traits::TermMatch;
use serde::{Deserialize, Deserializer, Serialize};

/// User-selected filter constraints.
///
/// Multi-valued fields deserialize from either a single value or a list, so
/// `{"region": "western-tatras"}` and `{"region": ["western-tatras"]}` are
/// equivalent.
///
/// Difficulties are held as slugs. Known ones are canonicalized
/// (`very-difficult` becomes `very_difficult`); anything else is kept as is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "one_or_many")]
    pub region: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "difficulty_slugs")]
    pub difficulty: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "one_or_many")]
    pub season: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "one_or_many")]
    pub trail_type: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "one_or_many")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<OneOrMany<T>> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::One(x) => vec![x],
        OneOrMany::Many(xs) => xs,
    }))
}

fn difficulty_slugs<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<String>> = one_or_many(deserializer)?;
    Ok(values.map(|values| {
        let mut slugs = Vec::with_capacity(values.len());
        for value in &values {
            let slug = difficulty_slug(value);
            if !slugs.contains(&slug) {
                slugs.push(slug);
            }
        }
        slugs
    }))
}

/// Canonical criteria slug for a difficulty value.
pub(crate) fn difficulty_slug(raw: &str) -> String {
    raw.parse::<Difficulty>()
        .map(|d| d.slug().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Returns the accepted values of a dimension, or `None` when it does not
/// constrain anything.
#[inline]
fn active<T>(dim: &Option<Vec<T>>) -> Option<&[T]> {
    match dim {
        Some(values) if !values.is_empty() => Some(values.as_slice()),
        _ => None,
    }
}

#[inline]
fn any_term(accepted: Option<&[String]>, terms: &[TaxonomyTerm]) -> bool {
    match accepted {
        None => true,
        Some(slugs) => terms.iter().any(|t| slugs.iter().any(|s| t.has_slug(s))),
    }
}

fn toggle<T: PartialEq>(dim: &mut Option<Vec<T>>, value: T) {
    let values = dim.get_or_insert_with(Vec::new);
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
    if values.is_empty() {
        *dim = None;
    }
}

fn extend<T: PartialEq>(dim: &mut Option<Vec<T>>, items: impl IntoIterator<Item = T>) {
    for item in items {
        let values = dim.get_or_insert_with(Vec::new);
        if !values.contains(&item) {
            values.push(item);
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Builders
    // ---------------------------------------------------------------------

    pub fn with_region(mut self, slug: impl Into<String>) -> Self {
        extend(&mut self.region, [slug.into()]);
        self
    }

    pub fn with_difficulties(mut self, values: impl IntoIterator<Item = Difficulty>) -> Self {
        extend(
            &mut self.difficulty,
            values.into_iter().map(|d| d.slug().to_string()),
        );
        self
    }

    pub fn with_seasons<S: Into<String>>(mut self, slugs: impl IntoIterator<Item = S>) -> Self {
        extend(&mut self.season, slugs.into_iter().map(Into::into));
        self
    }

    pub fn with_trail_types<S: Into<String>>(mut self, slugs: impl IntoIterator<Item = S>) -> Self {
        extend(&mut self.trail_type, slugs.into_iter().map(Into::into));
        self
    }

    pub fn with_features<S: Into<String>>(mut self, slugs: impl IntoIterator<Item = S>) -> Self {
        extend(&mut self.features, slugs.into_iter().map(Into::into));
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search(text);
        self
    }

    // ---------------------------------------------------------------------
    // Toggle actions
    // ---------------------------------------------------------------------

    /// Single-select: picking the active region clears it, picking another
    /// replaces the selection.
    pub fn toggle_region(&mut self, slug: &str) {
        let is_sole_selection = matches!(active(&self.region), Some([only]) if only == slug);
        self.region = if is_sole_selection {
            None
        } else {
            Some(vec![slug.to_string()])
        };
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        toggle(&mut self.difficulty, difficulty.slug().to_string());
    }

    pub fn toggle_season(&mut self, slug: &str) {
        toggle(&mut self.season, slug.to_string());
    }

    pub fn toggle_trail_type(&mut self, slug: &str) {
        toggle(&mut self.trail_type, slug.to_string());
    }

    pub fn toggle_feature(&mut self, slug: &str) {
        toggle(&mut self.features, slug.to_string());
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search = if text.is_empty() { None } else { Some(text) };
    }

    /// Reset to the empty criteria.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------------

    /// Number of dimensions that actually constrain the result.
    pub fn active_count(&self) -> usize {
        [
            active(&self.region).is_some(),
            active(&self.difficulty).is_some(),
            active(&self.season).is_some(),
            active(&self.trail_type).is_some(),
            active(&self.features).is_some(),
            self.search_needle().is_some(),
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Copy with empty lists and empty search collapsed to `None`.
    pub fn normalized(&self) -> Self {
        Self {
            region: active(&self.region).map(<[_]>::to_vec),
            difficulty: active(&self.difficulty).map(<[_]>::to_vec),
            season: active(&self.season).map(<[_]>::to_vec),
            trail_type: active(&self.trail_type).map(<[_]>::to_vec),
            features: active(&self.features).map(<[_]>::to_vec),
            search: self.search.clone().filter(|s| !s.is_empty()),
        }
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Per-trail predicate.
    pub fn matches(&self, trail: &Trail) -> bool {
        self.matches_with(trail, self.search_needle().as_deref())
    }

    fn matches_with(&self, trail: &Trail, needle: Option<&str>) -> bool {
        if let Some(q) = needle {
            let hit = contains_ci(&trail.title, q)
                || trail.excerpt.as_deref().is_some_and(|e| contains_ci(e, q));
            if !hit {
                return false;
            }
        }

        if let Some(accepted) = active(&self.difficulty) {
            let slug = trail.trail_data.difficulty.slug();
            if !accepted.iter().any(|s| s == slug) {
                return false;
            }
        }

        any_term(active(&self.region), &trail.regions)
            && any_term(active(&self.season), &trail.seasons)
            && any_term(active(&self.trail_type), &trail.trail_types)
            && any_term(active(&self.features), &trail.features)
    }
}

/// Lazily filter `trails` by `criteria`, borrowing from the input.
pub fn filter_iter<'a>(
    trails: &'a [Trail],
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = &'a Trail> + 'a {
    let needle = criteria.search_needle();
    trails
        .iter()
        .filter(move |t| criteria.matches_with(t, needle.as_deref()))
}

/// Filter `trails` by `criteria`.
///
/// The result is a subsequence of `trails` in the original order. Empty
/// criteria return the whole collection.
pub fn apply(trails: &[Trail], criteria: &FilterCriteria) -> Vec<Trail> {
    filter_iter(trails, criteria).cloned().collect()
}
