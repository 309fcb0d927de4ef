//! Wire types for the RuneProfile and Wise Old Man APIs.
//!
//! Both services speak camelCase JSON. Every non-essential field carries
//! `#[serde(default)]` so a payload with gaps decodes to neutral values
//! instead of failing the whole report. `Serialize` is derived so payloads
//! can round-trip through the disk cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RuneProfile: GET /profiles/{username}
// ---------------------------------------------------------------------------

/// A player profile from RuneProfile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default)]
    pub quests: Vec<RawQuest>,
    /// Collection log entries.
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub achievement_diary_tiers: Vec<RawDiaryTier>,
    #[serde(default)]
    pub combat_achievement_tiers: Vec<RawCombatTier>,
}

/// One quest entry: `state` 0=not started, 1=in progress, 2=completed;
/// `type` 2 marks a miniquest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuest {
    pub name: String,
    #[serde(default)]
    pub state: i32,
    #[serde(rename = "type", default)]
    pub kind: i32,
}

/// One collection log item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    pub name: String,
}

/// One achievement diary tier record (one per region per tier).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDiaryTier {
    #[serde(default)]
    pub tier_index: u32,
    #[serde(default)]
    pub tasks_count: u32,
    #[serde(default)]
    pub completed_count: u32,
}

/// One combat achievement tier record; `id` is also the per-task point
/// weight (1=Easy .. 6=Grandmaster).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCombatTier {
    pub id: u32,
    #[serde(default)]
    pub tasks_count: u32,
    #[serde(default)]
    pub completed_count: u32,
}

// ---------------------------------------------------------------------------
// Wise Old Man: GET /players/{username}
// ---------------------------------------------------------------------------

/// A player record from Wise Old Man.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default)]
    pub ehb: f64,
    #[serde(default)]
    pub ehp: f64,
    #[serde(default)]
    pub latest_snapshot: Option<LatestSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub data: SnapshotData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotData {
    pub skills: Skills,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub overall: SkillEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default)]
    pub level: u32,
}

// ---------------------------------------------------------------------------
// Wise Old Man: GET /groups/{id}
// ---------------------------------------------------------------------------

/// A clan group with its membership list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupResponse {
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub player: MemberPlayer,
    /// When the player joined the group.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPlayer {
    pub display_name: String,
}
