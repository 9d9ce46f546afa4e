// crates/tatra-core/src/loader/common_io.rs
use crate::error::{Result, TrailError};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file. `.gz` files are decompressed transparently when
/// the `compact` feature is enabled.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TrailError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `data/trails.json` -> `data/trails.json.{suffix}`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trails".to_string());
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// A cache is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the snapshot is all we have.
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("data/trails.json"), "bin");
        assert_eq!(p, PathBuf::from("data/trails.json.bin"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, TrailError::NotFound(_)));
    }

    #[test]
    fn missing_cache_is_stale() {
        assert!(!is_cache_fresh(
            Path::new("data/trails.json"),
            Path::new("/definitely/not/here.bin")
        ));
    }
}
