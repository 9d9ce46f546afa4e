// crates/tatra-core/src/loader/snapshot.rs
use crate::error::Result;
use crate::model::TrailDb;
use bincode::Options;

/// Upper bound for a decoded snapshot, guards against corrupt length prefixes.
pub const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

pub fn encode(db: &TrailDb) -> Result<Vec<u8>> {
    Ok(options().serialize(db)?)
}

pub fn decode(bytes: &[u8]) -> Result<TrailDb> {
    Ok(options().deserialize(bytes)?)
}
