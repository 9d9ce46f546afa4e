// crates/tatra-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, snapshots) and
//! delegates payload conversion to [`crate::convert`].

use crate::convert;
use crate::error::Result;
use crate::model::TrailDb;
use crate::raw::DatasetRaw;
use once_cell::sync::OnceCell;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod common_io;
mod snapshot;

pub use snapshot::SNAPSHOT_LIMIT;

const CACHE_SUFFIX: &str = "bin";

static BUNDLED_JSON: &str = include_str!("../../data/trails.json");
static BUNDLED: OnceCell<TrailDb> = OnceCell::new();

impl TrailDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "trails.json"
    }

    /// The sample dataset compiled into the crate, parsed once per process.
    pub fn bundled() -> Result<&'static TrailDb> {
        BUNDLED.get_or_try_init(|| Self::from_json_str(BUNDLED_JSON))
    }

    /// Parses a dataset export held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(json)?;
        Ok(convert::from_raw(raw))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_reader(reader)?;
        Ok(convert::from_raw(raw))
    }

    /// Reads a dataset export from disk (`.json`, or `.json.gz` with `compact`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Self::from_reader(common_io::open_stream(path)?)?;
        info!(
            path = %path.display(),
            trails = db.trails.len(),
            "loaded trail dataset"
        );
        Ok(db)
    }

    /// Writes a bincode snapshot of the whole collection.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = snapshot::encode(self)?;
        fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote snapshot");
        Ok(())
    }

    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut bytes = Vec::new();
        common_io::open_stream(path)?.read_to_end(&mut bytes)?;
        snapshot::decode(&bytes)
    }

    /// **Smart Load:** uses `<source>.bin` when it is fresh, otherwise
    /// rebuilds from the JSON export and refreshes the snapshot.
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache = common_io::get_cache_path(source, CACHE_SUFFIX);

        // 1. Snapshot
        if common_io::is_cache_fresh(source, &cache) {
            match Self::load_snapshot(&cache) {
                Ok(db) => {
                    debug!(path = %cache.display(), "using snapshot");
                    return Ok(db);
                }
                Err(e) => warn!(path = %cache.display(), error = %e, "ignoring unreadable snapshot"),
            }
        }

        // 2. Build
        let db = Self::load_from_path(source)?;

        // 3. Cache (best effort)
        if let Err(e) = db.save_snapshot(&cache) {
            warn!(path = %cache.display(), error = %e, "could not write snapshot");
        }

        Ok(db)
    }
}
