//! tatra-core prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::config::ContentConfig;
#[cfg(feature = "fetch")]
pub use crate::content::{ContentClient, PostPage};
pub use crate::error::{Result, TrailError};
pub use crate::filter::{self, FilterCriteria};
pub use crate::format;
pub use crate::markers::{self, is_valid_gps, LatLng, MapBounds, Marker, TATRA_CENTER};
pub use crate::model::{
    DbStats, Difficulty, Language, Post, Taxonomies, Taxonomy, TaxonomyTerm, Trail, TrailData,
    TrailDb, Translation,
};
pub use crate::paginate::{self, paginate, PageInfo, DEFAULT_PAGE_SIZE};
pub use crate::sort::{sort_trails, SortOrder};
pub use crate::text::{fold_key, slugify};
pub use crate::traits::{TermMatch, TrailPage, TrailSearch};
