// crates/tatra-core/src/convert.rs
use crate::model::{
    Difficulty, Language, Post, Taxonomies, TaxonomyTerm, Trail, TrailData, TrailDb, Translation,
};
use crate::raw::{DatasetRaw, LanguageRaw, Nodes, PostNode, TaxonomiesRaw, TermRaw, TrailNode};
use crate::text::{extract_excerpt, strip_html};
use tracing::warn;

/// Length of excerpts derived from post content.
const EXCERPT_CHARS: usize = 160;

fn term(raw: TermRaw) -> TaxonomyTerm {
    TaxonomyTerm {
        id: raw
            .id
            .or_else(|| raw.database_id.map(|id| id.to_string()))
            .unwrap_or_else(|| raw.slug.clone()),
        name: raw.name,
        slug: raw.slug,
        description: raw.description,
        count: raw.count,
    }
}

fn terms(raw: Option<Nodes<TermRaw>>) -> Vec<TaxonomyTerm> {
    raw.map(|n| n.nodes.into_iter().map(term).collect())
        .unwrap_or_default()
}

fn language(raw: Option<&LanguageRaw>) -> Option<Language> {
    raw.and_then(|l| l.code.parse().ok())
}

/// WordPress excerpts arrive as HTML paragraphs.
fn plain_excerpt(raw: Option<String>) -> Option<String> {
    raw.map(|e| strip_html(&e).trim().to_string())
        .filter(|e| !e.is_empty())
}

/// Convert one trail node.
///
/// Returns `None` (and logs a warning) when the node has no usable
/// difficulty, since every trail in the model must carry one.
pub fn trail_from_node(node: TrailNode) -> Option<Trail> {
    let data = node.trail_data.unwrap_or_default();
    let difficulty = match data.difficulty.as_deref().map(str::parse::<Difficulty>) {
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            warn!(slug = %node.slug, error = %e, "skipping trail with unknown difficulty");
            return None;
        }
        None => {
            warn!(slug = %node.slug, "skipping trail without difficulty");
            return None;
        }
    };

    let translations = node
        .translations
        .unwrap_or_default()
        .into_iter()
        .filter_map(|t| {
            let lang = language(t.language.as_ref())?;
            Some(Translation {
                uri: t.uri.unwrap_or_default(),
                slug: t.slug,
                title: t.title,
                language: lang,
            })
        })
        .collect();

    Some(Trail {
        id: node.id,
        database_id: node.database_id,
        title: node.title,
        slug: node.slug,
        excerpt: plain_excerpt(node.excerpt),
        content: node.content,
        date: node.date.unwrap_or_default(),
        modified: node.modified,
        trail_data: TrailData {
            difficulty,
            distance_km: data.distance_km.unwrap_or_default(),
            elevation_gain_m: data.elevation_gain_m.unwrap_or_default(),
            estimated_time_hours: data.estimated_time_hours.unwrap_or_default(),
            gps_latitude: data.gps_latitude,
            gps_longitude: data.gps_longitude,
            trail_map_embed: data.trail_map_embed,
        },
        regions: terms(node.regions),
        seasons: terms(node.seasons),
        trail_types: terms(node.trail_types),
        features: terms(node.features),
        language: language(node.language.as_ref()),
        translations,
    })
}

pub fn trails_from_nodes(nodes: Vec<TrailNode>) -> Vec<Trail> {
    nodes.into_iter().filter_map(trail_from_node).collect()
}

/// Convert one post node. Posts without an excerpt get one cut from the
/// content.
pub fn post_from_node(node: PostNode) -> Post {
    let excerpt = plain_excerpt(node.excerpt).or_else(|| {
        node.content
            .as_deref()
            .map(|c| extract_excerpt(c.trim(), EXCERPT_CHARS))
            .filter(|e| !e.is_empty())
    });
    Post {
        id: node.id,
        database_id: node.database_id,
        title: node.title,
        slug: node.slug,
        excerpt,
        content: node.content,
        date: node.date.unwrap_or_default(),
        modified: node.modified,
        categories: terms(node.categories),
        tags: terms(node.tags),
        author: node.author.map(|a| a.node.name),
        language: language(node.language.as_ref()),
    }
}

pub fn taxonomies_from_raw(raw: TaxonomiesRaw) -> Taxonomies {
    Taxonomies {
        regions: terms(raw.regions),
        seasons: terms(raw.seasons),
        trail_types: terms(raw.trail_types),
        features: terms(raw.features),
    }
}

/// **Standard Converter:** dataset export -> [`TrailDb`].
pub fn from_raw(raw: DatasetRaw) -> TrailDb {
    TrailDb {
        trails: trails_from_nodes(raw.trails),
        taxonomies: taxonomies_from_raw(raw.taxonomies),
    }
}
