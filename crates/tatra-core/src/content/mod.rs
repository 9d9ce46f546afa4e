// crates/tatra-core/src/content/mod.rs

//! # Content Client
//!
//! Blocking GraphQL client for the WordPress content store. Materializes
//! the trail collection and taxonomy term lists the engine operates on, and
//! reads the blog posts published next to them.
//!
//! Responses are memoized per `(query, variables)` for the lifetime of the
//! client; call [`ContentClient::reset_cache`] after a language switch.

use crate::config::ContentConfig;
use crate::convert;
use crate::error::{Result, TrailError};
use crate::model::{Language, Post, Taxonomies, Trail, TrailDb};
use crate::raw::{Connection, PostNode, TaxonomiesRaw, TrailNode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info};

pub mod queries;

/// Trails shown on the home page.
pub const FEATURED_TRAILS: usize = 6;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorRaw {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrailReports {
    trail_reports: Connection<TrailNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SingleTrail {
    trail_report: Option<TrailNode>,
}

#[derive(Debug, Deserialize)]
struct Posts {
    posts: Connection<PostNode>,
}

#[derive(Debug, Deserialize)]
struct SinglePost {
    post: Option<PostNode>,
}

/// One page of blog posts and the cursor of the page after it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub next_cursor: Option<String>,
}

fn post_page(page: Posts) -> PostPage {
    let next_cursor = page.posts.next_cursor();
    PostPage {
        posts: page
            .posts
            .into_nodes()
            .into_iter()
            .map(convert::post_from_node)
            .collect(),
        next_cursor,
    }
}

/// Splits a GraphQL envelope into its data payload, logging every error.
fn into_data(response: GraphQlResponse) -> Result<Value> {
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        for message in &messages {
            error!(%message, "GraphQL error");
        }
        return Err(TrailError::GraphQl { messages });
    }
    response.data.ok_or_else(|| TrailError::GraphQl {
        messages: vec!["response carried no data".to_string()],
    })
}

/// GraphQL spells language codes in upper case (`PL`, `EN`).
fn language_var(lang: Language) -> String {
    lang.code().to_ascii_uppercase()
}

#[derive(Debug)]
pub struct ContentClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    batch: usize,
    cache: Mutex<HashMap<String, Value>>,
}

impl ContentClient {
    pub fn new(config: &ContentConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("tatra-trails/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
            batch: config.fetch_batch.max(1),
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Drops every memoized response.
    pub fn reset_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn cached_responses(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let key = format!("{query}\n{variables}");
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();

        let data = match cached {
            Some(data) => data,
            None => {
                debug!(endpoint = %self.endpoint, %variables, "GraphQL request");
                let response: GraphQlResponse = self
                    .http
                    .post(&self.endpoint)
                    .json(&GraphQlRequest {
                        query,
                        variables: &variables,
                    })
                    .send()?
                    .error_for_status()?
                    .json()?;
                let data = into_data(response)?;
                self.cache
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(key, data.clone());
                data
            }
        };

        Ok(serde_json::from_value(data)?)
    }

    /// All trails of one language, following the cursor until exhausted.
    pub fn fetch_trails(&self, lang: Language) -> Result<Vec<Trail>> {
        let mut nodes = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let page: TrailReports = self.query(
                queries::GET_ALL_TRAILS,
                json!({ "first": self.batch, "after": after, "language": language_var(lang) }),
            )?;
            let next = page.trail_reports.next_cursor();
            nodes.extend(page.trail_reports.into_nodes());

            match next {
                Some(cursor) if after.as_deref() != Some(cursor.as_str()) => after = Some(cursor),
                _ => break,
            }
        }

        let trails = convert::trails_from_nodes(nodes);
        info!(language = %lang, count = trails.len(), "fetched trails");
        Ok(trails)
    }

    pub fn fetch_trail(&self, slug: &str) -> Result<Trail> {
        let found: SingleTrail = self.query(queries::GET_TRAIL_BY_SLUG, json!({ "slug": slug }))?;
        found
            .trail_report
            .and_then(convert::trail_from_node)
            .ok_or_else(|| TrailError::NotFound(format!("trail '{slug}'")))
    }

    pub fn fetch_taxonomies(&self, lang: Language) -> Result<Taxonomies> {
        let raw: TaxonomiesRaw = self.query(
            queries::GET_TAXONOMIES,
            json!({ "language": language_var(lang) }),
        )?;
        Ok(convert::taxonomies_from_raw(raw))
    }

    /// The newest trails of one language, newest first.
    pub fn fetch_featured_trails(&self, lang: Language) -> Result<Vec<Trail>> {
        let page: TrailReports = self.query(
            queries::GET_FEATURED_TRAILS,
            json!({ "first": FEATURED_TRAILS, "language": language_var(lang) }),
        )?;
        Ok(convert::trails_from_nodes(page.trail_reports.into_nodes()))
    }

    /// One page of blog posts, optionally restricted to a category slug.
    pub fn fetch_posts(
        &self,
        lang: Language,
        category: Option<&str>,
        first: usize,
        after: Option<&str>,
    ) -> Result<PostPage> {
        let page: Posts = self.query(
            queries::GET_BLOG_POSTS,
            json!({
                "first": first.max(1),
                "after": after,
                "categoryName": category,
                "language": language_var(lang),
            }),
        )?;
        let page = post_page(page);
        debug!(language = %lang, count = page.posts.len(), "fetched posts");
        Ok(page)
    }

    pub fn fetch_post(&self, slug: &str) -> Result<Post> {
        let found: SinglePost = self.query(queries::GET_POST_BY_SLUG, json!({ "slug": slug }))?;
        found
            .post
            .map(convert::post_from_node)
            .ok_or_else(|| TrailError::NotFound(format!("post '{slug}'")))
    }

    /// Trails plus taxonomy terms, ready for the engine.
    pub fn fetch_db(&self, lang: Language) -> Result<TrailDb> {
        Ok(TrailDb::new(
            self.fetch_trails(lang)?,
            self.fetch_taxonomies(lang)?,
        ))
    }
}
