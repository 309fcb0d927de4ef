//! The snapshot adapter: raw API payloads → [`NormalizedSnapshot`].
//!
//! This is the only place that knows both the wire formats and the engine's
//! model. It never fails: unavailable sources pass through as `None`,
//! unknown enum codes map to conservative defaults, and a player missing
//! from the clan membership list gets a join date of "now" (zero tenure).

use chrono::{DateTime, Utc};

use clanrank_core::snapshot::{
    CombatTier, DiaryTier, NormalizedSnapshot, ProfileSnapshot, QuestKind, QuestRecord, QuestState,
    StatsSnapshot,
};

use crate::types::{GroupResponse, PlayerResponse, ProfileResponse};

/// Quest `state` code for a completed quest.
const STATE_COMPLETED: i32 = 2;
/// Quest `state` code for a started quest.
const STATE_IN_PROGRESS: i32 = 1;
/// Quest `type` code for a miniquest.
const KIND_MINIQUEST: i32 = 2;

/// Builds the engine's snapshot from the three raw payloads.
pub fn build_snapshot(
    profile: Option<&ProfileResponse>,
    stats: Option<&PlayerResponse>,
    group: Option<&GroupResponse>,
    username: &str,
    now: DateTime<Utc>,
) -> NormalizedSnapshot {
    NormalizedSnapshot {
        profile: profile.map(adapt_profile),
        stats: stats.map(adapt_stats),
        joined_at: join_date(group, username).unwrap_or(now),
    }
}

fn adapt_profile(raw: &ProfileResponse) -> ProfileSnapshot {
    ProfileSnapshot {
        quests: raw
            .quests
            .iter()
            .map(|q| QuestRecord {
                name: q.name.clone(),
                state: map_quest_state(q.state),
                kind: map_quest_kind(q.kind),
            })
            .collect(),
        owned_items: raw.items.iter().map(|i| i.name.clone()).collect(),
        diary_tiers: raw
            .achievement_diary_tiers
            .iter()
            .map(|t| DiaryTier {
                tier_index: t.tier_index,
                tasks_count: t.tasks_count,
                completed_count: t.completed_count,
            })
            .collect(),
        combat_tiers: raw
            .combat_achievement_tiers
            .iter()
            .map(|t| CombatTier {
                id: t.id,
                tasks_count: t.tasks_count,
                completed_count: t.completed_count,
            })
            .collect(),
    }
}

fn adapt_stats(raw: &PlayerResponse) -> StatsSnapshot {
    StatsSnapshot {
        ehb: raw.ehb,
        ehp: raw.ehp,
        total_level: raw
            .latest_snapshot
            .as_ref()
            .map_or(0, |s| s.data.skills.overall.level),
    }
}

/// Maps a raw quest state code. Unknown codes read as not started, so a new
/// upstream state can never award points by accident.
fn map_quest_state(code: i32) -> QuestState {
    match code {
        STATE_COMPLETED => QuestState::Completed,
        STATE_IN_PROGRESS => QuestState::InProgress,
        _ => QuestState::NotStarted,
    }
}

fn map_quest_kind(code: i32) -> QuestKind {
    if code == KIND_MINIQUEST {
        QuestKind::Miniquest
    } else {
        QuestKind::Quest
    }
}

/// Looks up the player's join date in the membership list. Exact
/// display-name match, as the upstream service reports canonical casing.
fn join_date(group: Option<&GroupResponse>, username: &str) -> Option<DateTime<Utc>> {
    group?
        .memberships
        .iter()
        .find(|m| m.player.display_name == username)
        .and_then(|m| m.created_at)
}
