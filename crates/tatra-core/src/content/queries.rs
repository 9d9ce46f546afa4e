// crates/tatra-core/src/content/queries.rs

//! GraphQL documents sent to the WordPress endpoint.

macro_rules! trail_fields {
    () => {
        "
    id
    databaseId
    title
    slug
    excerpt
    content
    date
    modified
    trailData {
      difficulty
      distanceKm
      elevationGainM
      estimatedTimeHours
      gpsLatitude
      gpsLongitude
      trailMapEmbed
    }
    regions { nodes { id name slug description } }
    seasons { nodes { id name slug } }
    trailTypes { nodes { id name slug } }
    features { nodes { id name slug } }
    language { code name }
    translations { uri slug title language { code name } }
"
    };
}

pub const GET_ALL_TRAILS: &str = concat!(
    "query GetAllTrails($first: Int = 100, $after: String, $language: LanguageCodeFilterEnum) {
  trailReports(
    first: $first
    after: $after
    where: { language: $language, orderby: { field: DATE, order: DESC } }
  ) {
    pageInfo { hasNextPage endCursor }
    nodes {",
    trail_fields!(),
    "    }
  }
}"
);

pub const GET_TRAIL_BY_SLUG: &str = concat!(
    "query GetTrailBySlug($slug: ID!) {
  trailReport(id: $slug, idType: SLUG) {",
    trail_fields!(),
    "  }
}"
);

pub const GET_TAXONOMIES: &str = "query GetTaxonomies($language: LanguageCodeFilterEnum) {
  regions(first: 100, where: { language: $language }) { nodes { id name slug description count } }
  seasons(first: 100, where: { language: $language }) { nodes { id name slug count } }
  trailTypes(first: 100, where: { language: $language }) { nodes { id name slug count } }
  features(first: 100, where: { language: $language }) { nodes { id name slug count } }
}";

/// Newest trails for the home page; the page size is fixed by the caller.
pub const GET_FEATURED_TRAILS: &str = concat!(
    "query GetFeaturedTrails($first: Int = 6, $language: LanguageCodeFilterEnum) {
  trailReports(
    first: $first
    where: { language: $language, orderby: { field: DATE, order: DESC } }
  ) {
    nodes {",
    trail_fields!(),
    "    }
  }
}"
);

macro_rules! post_fields {
    () => {
        "
    id
    databaseId
    title
    slug
    date
    modified
    excerpt
    categories { nodes { id name slug } }
    tags { nodes { id name slug } }
    author { node { name } }
    language { code name }
"
    };
}

pub const GET_BLOG_POSTS: &str = concat!(
    "query GetBlogPosts(
  $first: Int = 10
  $after: String
  $categoryName: String
  $language: LanguageCodeFilterEnum
) {
  posts(
    first: $first
    after: $after
    where: { language: $language, categoryName: $categoryName }
  ) {
    pageInfo { hasNextPage endCursor }
    edges {
      node {",
    post_fields!(),
    "      }
    }
  }
}"
);

pub const GET_POST_BY_SLUG: &str = concat!(
    "query GetPostBySlug($slug: ID!) {
  post(id: $slug, idType: SLUG) {
    content",
    post_fields!(),
    "  }
}"
);
