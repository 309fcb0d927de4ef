//! External data sources for the clan rank calculator.
//!
//! Typed HTTP clients for the RuneProfile and Wise Old Man APIs, a raw-JSON
//! disk cache mirroring each source, and the snapshot adapter that turns
//! raw payloads into the engine's [`clanrank_core::NormalizedSnapshot`].

pub mod cache;
pub mod client;
pub mod fetch;
pub mod normalize;
pub mod types;

mod error;

pub use cache::SnapshotCache;
pub use client::{RuneProfileClient, WiseOldManClient};
pub use error::SourceError;
pub use fetch::{fetch_snapshots, RawSnapshots};
pub use normalize::build_snapshot;
