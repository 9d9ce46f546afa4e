// crates/tatra-core/src/raw.rs

//! Raw node shapes as served by the WordPress GraphQL endpoint.
//!
//! These mirror the content store's schema (camelCase, `{ nodes: [...] }`
//! wrappers, string GPS fields) and are converted into the model by
//! [`crate::convert`]. Not part of the public API.

use serde::Deserialize;

/// `{ "nodes": [...] }` wrapper used for every taxonomy association.
#[derive(Debug, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRaw {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub database_id: Option<i64>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRaw {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslationRaw {
    #[serde(default)]
    pub uri: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<LanguageRaw>,
}

/// ACF field group attached to every trail report.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailDataRaw {
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub elevation_gain_m: Option<f64>,
    #[serde(default)]
    pub estimated_time_hours: Option<f64>,
    #[serde(default)]
    pub gps_latitude: Option<String>,
    #[serde(default)]
    pub gps_longitude: Option<String>,
    #[serde(default)]
    pub trail_map_embed: Option<String>,
}

/// A `TrailReport` node.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailNode {
    pub id: String,
    #[serde(default)]
    pub database_id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub trail_data: Option<TrailDataRaw>,
    #[serde(default)]
    pub regions: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub seasons: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub trail_types: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub features: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub language: Option<LanguageRaw>,
    #[serde(default)]
    pub translations: Option<Vec<TranslationRaw>>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorRaw {
    pub name: String,
}

/// A blog `Post` node.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostNode {
    pub id: String,
    #[serde(default)]
    pub database_id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub categories: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub tags: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub author: Option<Edge<AuthorRaw>>,
    #[serde(default)]
    pub language: Option<LanguageRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoRaw {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// `{ "node": ... }` wrapper, used by connection edges and single relations.
#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Relay-style connection. Queries select either `nodes` or `edges`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Option::default")]
    pub nodes: Option<Vec<T>>,
    #[serde(default = "Option::default")]
    pub edges: Option<Vec<Edge<T>>>,
    #[serde(default)]
    pub page_info: Option<PageInfoRaw>,
}

impl<T> Connection<T> {
    /// Cursor for the following page, if the server reports one.
    pub fn next_cursor(&self) -> Option<String> {
        self.page_info
            .as_ref()
            .filter(|p| p.has_next_page)
            .and_then(|p| p.end_cursor.clone())
    }

    pub fn into_nodes(self) -> Vec<T> {
        match (self.nodes, self.edges) {
            (Some(nodes), _) => nodes,
            (None, Some(edges)) => edges.into_iter().map(|e| e.node).collect(),
            (None, None) => Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomiesRaw {
    #[serde(default)]
    pub regions: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub seasons: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub trail_types: Option<Nodes<TermRaw>>,
    #[serde(default)]
    pub features: Option<Nodes<TermRaw>>,
}

/// Dataset export: trail nodes plus the taxonomy term lists.
#[derive(Debug, Deserialize)]
pub struct DatasetRaw {
    pub trails: Vec<TrailNode>,
    #[serde(default)]
    pub taxonomies: TaxonomiesRaw,
}
