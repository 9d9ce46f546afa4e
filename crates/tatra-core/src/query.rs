// crates/tatra-core/src/query.rs

//! URL query-string encoding of [`FilterCriteria`] for deep links.
//!
//! | parameter              | dimension    |
//! |------------------------|--------------|
//! | `region`               | region       |
//! | `difficulty`           | difficulty   |
//! | `season`               | season       |
//! | `type`, `trailType`    | trail type   |
//! | `features`, `feature`  | features     |
//! | `search`, `q`          | search       |
//!
//! Multi-valued dimensions accept repeated parameters and comma-joined
//! values. Unknown parameters and blank values are ignored. An unknown
//! difficulty is kept, so `?difficulty=extreme` lists nothing. Search text is
//! taken verbatim.

use crate::filter::{difficulty_slug, FilterCriteria};
use url::form_urlencoded;

fn push_unique<T: PartialEq>(dim: &mut Option<Vec<T>>, value: T) {
    let values = dim.get_or_insert_with(Vec::new);
    if !values.contains(&value) {
        values.push(value);
    }
}

fn split_values(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|v| !v.is_empty())
}

impl FilterCriteria {
    /// Parse a query string (with or without the leading `?`).
    ///
    /// ```rust
    /// use tatra_core::{Difficulty, FilterCriteria};
    ///
    /// let c = FilterCriteria::from_query_str("?difficulty=easy,moderate&region=western-tatras");
    /// assert_eq!(
    ///     c,
    ///     FilterCriteria::new()
    ///         .with_region("western-tatras")
    ///         .with_difficulties([Difficulty::Easy, Difficulty::Moderate])
    /// );
    /// assert_eq!(c.region, Some(vec!["western-tatras".to_string()]));
    /// ```
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Build criteria from already-decoded key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut c = FilterCriteria::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "region" => split_values(value).for_each(|v| push_unique(&mut c.region, v.into())),
                "difficulty" => split_values(value)
                    .for_each(|v| push_unique(&mut c.difficulty, difficulty_slug(v))),
                "season" => split_values(value).for_each(|v| push_unique(&mut c.season, v.into())),
                "type" | "trailType" => {
                    split_values(value).for_each(|v| push_unique(&mut c.trail_type, v.into()))
                }
                "features" | "feature" => {
                    split_values(value).for_each(|v| push_unique(&mut c.features, v.into()))
                }
                "search" | "q" => {
                    if !value.is_empty() {
                        c.search = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }
        c
    }

    /// Encode active dimensions; values of one dimension are comma-joined.
    ///
    /// Returns an empty string for empty criteria.
    pub fn to_query_string(&self) -> String {
        let c = self.normalized();
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(v) = &c.region {
            out.append_pair("region", &v.join(","));
        }
        if let Some(v) = &c.difficulty {
            out.append_pair("difficulty", &v.join(","));
        }
        if let Some(v) = &c.season {
            out.append_pair("season", &v.join(","));
        }
        if let Some(v) = &c.trail_type {
            out.append_pair("type", &v.join(","));
        }
        if let Some(v) = &c.features {
            out.append_pair("features", &v.join(","));
        }
        if let Some(q) = &c.search {
            out.append_pair("search", q);
        }
        out.finish()
    }

    /// Listing URL for these criteria, e.g. `/trails?difficulty=easy`.
    pub fn to_href(&self, base_path: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            base_path.to_string()
        } else {
            format!("{base_path}?{qs}")
        }
    }
}
