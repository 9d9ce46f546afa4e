//! tatra-cli
//! =========
//!
//! Command-line interface for the `tatra-core` trail engine.
//!
//! This crate primarily provides a binary (`tatra`). The library target
//! exists so that a documentation page is rendered for it.
//!
//! Quick start
//! -----------
//!
//! ```text
//! tatra --help
//! tatra stats
//! tatra list --region western-tatras --difficulty easy
//! tatra --lang en --endpoint https://cms.example.org/graphql list --sort newest
//! tatra show morskie-oko
//! ```
//!
//! Environment
//! -----------
//!
//! - `WORDPRESS_API_URL`, `TATRA_LANGUAGE`, `TATRA_PAGE_SIZE`, `TATRA_FETCH_BATCH`
//!   (see `tatra_core::config::ContentConfig`)
//! - `RUST_LOG` for log verbosity (default `warn`)
#![cfg_attr(docsrs, feature(doc_cfg))]
