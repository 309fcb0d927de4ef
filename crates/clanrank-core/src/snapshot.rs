//! Normalized view of the three external data sources.
//!
//! The snapshot adapter in `clanrank-sources` translates raw API payloads
//! into these types; the engine never sees wire formats. An unavailable
//! source (account not found, request skipped) is `None`, never a bag of
//! zeroed fields — rules that depend on it score zero instead of guessing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

/// Completion state of a quest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestState {
    NotStarted,
    InProgress,
    Completed,
}

/// Whether a quest record is a full quest or a miniquest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    Quest,
    Miniquest,
}

/// One quest or miniquest entry from the profile source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestRecord {
    pub name: String,
    pub state: QuestState,
    pub kind: QuestKind,
}

impl QuestRecord {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == QuestState::Completed
    }
}

/// One achievement diary tier record. A tier index (0=Easy .. 3=Elite) can
/// appear once per diary region, so several records share an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiaryTier {
    pub tier_index: u32,
    pub tasks_count: u32,
    pub completed_count: u32,
}

/// One combat achievement tier record. The tier id doubles as the per-task
/// point weight (1=Easy .. 6=Grandmaster).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatTier {
    pub id: u32,
    pub tasks_count: u32,
    pub completed_count: u32,
}

/// Everything the engine needs from the profile source.
#[derive(Debug, Clone, Default)]
pub struct ProfileSnapshot {
    pub quests: Vec<QuestRecord>,
    /// Collection log item names, exact upstream casing.
    pub owned_items: HashSet<String>,
    pub diary_tiers: Vec<DiaryTier>,
    pub combat_tiers: Vec<CombatTier>,
}

/// Everything the engine needs from the stats source.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSnapshot {
    /// Efficient hours bossed.
    pub ehb: f64,
    /// Efficient hours played.
    pub ehp: f64,
    /// Overall skill total level.
    pub total_level: u32,
}

/// The adapted view of all three sources for one player.
#[derive(Debug, Clone)]
pub struct NormalizedSnapshot {
    /// `None` when the profile service reported the account missing.
    pub profile: Option<ProfileSnapshot>,
    /// `None` when the stats service reported the player missing.
    pub stats: Option<StatsSnapshot>,
    /// Clan join timestamp; defaults to the evaluation time (zero tenure)
    /// when the player is absent from the membership list.
    pub joined_at: DateTime<Utc>,
}

impl NormalizedSnapshot {
    /// A snapshot with both player sources unavailable and zero tenure.
    #[must_use]
    pub fn unavailable(now: DateTime<Utc>) -> Self {
        Self {
            profile: None,
            stats: None,
            joined_at: now,
        }
    }
}
