// crates/tatra-core/src/lib.rs

//! # tatra-core
//!
//! Trail data model and the stateless filter engine behind the Tatra trails
//! site: criteria composition over an in-memory trail collection, map-marker
//! projection and pagination slicing.
//!
//! ```rust
//! use tatra_core::prelude::*;
//!
//! let db = TrailDb::bundled().unwrap();
//! let criteria = FilterCriteria::from_query_str("region=western-tatras&difficulty=easy");
//!
//! let hits = filter::apply(db.trails(), &criteria);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].slug, "dolina-koscieliska");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
#[cfg(feature = "fetch")]
pub mod content;
pub mod error;
pub mod filter;
pub mod format;
pub mod loader;
pub mod markers;
pub mod model;
pub mod paginate;
pub mod prelude;
pub mod query;
pub mod search;
pub mod sort;
pub mod text;
pub mod traits;
// Shared Raw Input (content store node shapes)
#[doc(hidden)]
pub mod raw;
pub mod convert;

// Re-exports
pub use crate::error::{Result, TrailError};
pub use crate::filter::FilterCriteria;
pub use crate::markers::{LatLng, MapBounds, Marker};
pub use crate::model::{
    DbStats, Difficulty, Language, Post, Taxonomies, Taxonomy, TaxonomyTerm, Trail, TrailData,
    TrailDb, Translation,
};
pub use crate::paginate::PageInfo;
pub use crate::sort::SortOrder;
pub use crate::traits::{TermMatch, TrailPage, TrailSearch};
