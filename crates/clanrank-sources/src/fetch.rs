//! Concurrent fetch of the three raw snapshots through the cache.

use crate::cache::{SnapshotCache, CLAN_CACHE, PROFILE_CACHE, STATS_CACHE};
use crate::client::{RuneProfileClient, WiseOldManClient};
use crate::error::SourceError;
use crate::types::{GroupResponse, PlayerResponse, ProfileResponse};

/// The three raw payloads, pre-normalization. `None` marks a source that
/// reported the player missing.
#[derive(Debug)]
pub struct RawSnapshots {
    pub profile: Option<ProfileResponse>,
    pub stats: Option<PlayerResponse>,
    pub group: GroupResponse,
}

/// Resolves all three sources concurrently.
///
/// Each source consults the cache first unless `refresh` is set; only
/// successful payloads are cached, so a not-found answer is re-checked on
/// the next run.
///
/// # Errors
///
/// Returns the first [`SourceError`] from any of the three requests.
pub async fn fetch_snapshots(
    runeprofile: &RuneProfileClient,
    wom: &WiseOldManClient,
    cache: &SnapshotCache,
    username: &str,
    group_id: u64,
    refresh: bool,
) -> Result<RawSnapshots, SourceError> {
    let profile = async {
        if !refresh {
            if let Some(cached) = cache.load::<ProfileResponse>(PROFILE_CACHE) {
                tracing::debug!("using cached profile payload");
                return Ok(Some(cached));
            }
        }
        let fetched = runeprofile.get_profile(username).await?;
        if let Some(payload) = &fetched {
            cache.store(PROFILE_CACHE, payload);
        }
        Ok::<_, SourceError>(fetched)
    };

    let stats = async {
        if !refresh {
            if let Some(cached) = cache.load::<PlayerResponse>(STATS_CACHE) {
                tracing::debug!("using cached stats payload");
                return Ok(Some(cached));
            }
        }
        let fetched = wom.get_player(username).await?;
        if let Some(payload) = &fetched {
            cache.store(STATS_CACHE, payload);
        }
        Ok::<_, SourceError>(fetched)
    };

    let group = async {
        if !refresh {
            if let Some(cached) = cache.load::<GroupResponse>(CLAN_CACHE) {
                tracing::debug!("using cached clan payload");
                return Ok(cached);
            }
        }
        let fetched = wom.get_group(group_id).await?;
        cache.store(CLAN_CACHE, &fetched);
        Ok::<_, SourceError>(fetched)
    };

    let (profile, stats, group) = tokio::try_join!(profile, stats, group)?;

    Ok(RawSnapshots {
        profile,
        stats,
        group,
    })
}
