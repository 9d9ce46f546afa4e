//! tatra-trails
//! ============
//!
//! Workspace crate. Re-exports [`tatra_core`] so the demos under `demos/`
//! build against a single dependency.
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example map_markers
//! cargo run --example error_handling
//! ```
pub use tatra_core::*;
