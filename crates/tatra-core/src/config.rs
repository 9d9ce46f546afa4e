// crates/tatra-core/src/config.rs
use crate::error::{Result, TrailError};
use crate::model::Language;
use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/graphql";

/// Runtime settings for the data-fetching boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    /// WordPress GraphQL endpoint (`WORDPRESS_API_URL`).
    pub api_url: String,
    /// Language requested from the content store (`TATRA_LANGUAGE`).
    pub language: Language,
    /// Listing page size (`TATRA_PAGE_SIZE`).
    pub page_size: usize,
    /// Nodes requested per GraphQL round-trip (`TATRA_FETCH_BATCH`).
    pub fetch_batch: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            language: Language::Pl,
            page_size: crate::paginate::DEFAULT_PAGE_SIZE,
            fetch_batch: 100,
        }
    }
}

impl ContentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ContentConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            api_url: try_load(&lookup, "WORDPRESS_API_URL", defaults.api_url)?,
            language: try_load(&lookup, "TATRA_LANGUAGE", defaults.language)?,
            page_size: try_load(&lookup, "TATRA_PAGE_SIZE", defaults.page_size)?,
            fetch_batch: try_load(&lookup, "TATRA_FETCH_BATCH", defaults.fetch_batch)?,
        };
        for (key, value) in [
            ("TATRA_PAGE_SIZE", config.page_size),
            ("TATRA_FETCH_BATCH", config.fetch_batch),
        ] {
            if value == 0 {
                warn!("Invalid {key} value: must be positive");
                return Err(TrailError::Config {
                    key: key.to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }
        Ok(config)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            TrailError::Config {
                key: key.to_string(),
                message: e.to_string(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ContentConfig::default());
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn reads_overrides() {
        let config = ContentConfig::from_lookup(lookup(&[
            ("WORDPRESS_API_URL", "https://cms.example.org/graphql"),
            ("TATRA_LANGUAGE", "EN"),
            ("TATRA_PAGE_SIZE", "24"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://cms.example.org/graphql");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.page_size, 24);
        assert_eq!(config.fetch_batch, 100);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = ContentConfig::from_lookup(lookup(&[("TATRA_PAGE_SIZE", "many")])).unwrap_err();
        assert!(matches!(err, TrailError::Config { ref key, .. } if key == "TATRA_PAGE_SIZE"));

        let err = ContentConfig::from_lookup(lookup(&[("TATRA_FETCH_BATCH", "0")])).unwrap_err();
        assert!(matches!(err, TrailError::Config { ref key, .. } if key == "TATRA_FETCH_BATCH"));
    }
}
