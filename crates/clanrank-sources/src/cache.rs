//! Disk cache for raw source payloads.
//!
//! One JSON file per source under the cache directory. Reads that fail for
//! any reason behave like a miss, and writes are best-effort — a broken
//! cache never blocks a report, it just costs a refetch.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Cache file name for the RuneProfile payload.
pub const PROFILE_CACHE: &str = "profile";
/// Cache file name for the Wise Old Man player payload.
pub const STATS_CACHE: &str = "stats";
/// Cache file name for the clan group payload.
pub const CLAN_CACHE: &str = "clan";

/// A directory of cached JSON payloads.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    dir: PathBuf,
}

impl SnapshotCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads and decodes a cached payload. Returns `None` on a miss or if
    /// the file cannot be decoded.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.path(name);
        let content = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding corrupt cache file");
                None
            }
        }
    }

    /// Writes a payload to the cache, creating the directory if needed.
    /// Failures are logged and swallowed.
    pub fn store<T: Serialize>(&self, name: &str, value: &T) {
        let path = self.path(name);
        let result = std::fs::create_dir_all(&self.dir)
            .and_then(|()| {
                let content = serde_json::to_string_pretty(value)?;
                std::fs::write(&path, content)
            });
        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "failed to write cache file");
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}
