//! The scoring engine.
//!
//! Walks the static catalog, evaluates each item's rule against the
//! normalized snapshot, and assembles the finished [`ScoreReport`]. Every
//! rule degrades to zero/incomplete when the source it needs is
//! unavailable; evaluation itself never fails. The only error path is a
//! defective catalog, caught up front.

use chrono::{DateTime, Utc};

use crate::catalog::{self, CombatLadder, ItemDef, MaxPoints, Rule};
use crate::error::CatalogError;
use crate::quests::QuestPointTable;
use crate::rank::RankLadder;
use crate::report::{ScoreReport, ScoredItem};
use crate::snapshot::{NormalizedSnapshot, ProfileSnapshot, QuestKind, QuestState};

/// Evaluates the full catalog against a snapshot.
///
/// `now` is the evaluation instant, used for tenure rules; passing it in
/// keeps the engine a pure function of its inputs.
///
/// # Errors
///
/// Returns a [`CatalogError`] only for construction-time defects (duplicate
/// catalog entries, a broken rank tier table). Player-data irregularities
/// never error.
pub fn score(
    quests: &QuestPointTable,
    snapshot: &NormalizedSnapshot,
    now: DateTime<Utc>,
) -> Result<ScoreReport, CatalogError> {
    catalog::validate_catalog()?;
    let ranks = RankLadder::new()?;

    let combat_ladder = snapshot
        .profile
        .as_ref()
        .map(|p| CombatLadder::from_tiers(&p.combat_tiers));

    let mut items = Vec::with_capacity(catalog::ITEMS.len());
    for def in catalog::ITEMS {
        let max_points = resolve_max(def, quests, snapshot);
        let (earned_points, completed) =
            evaluate(def, max_points, quests, snapshot, combat_ladder.as_ref(), now);
        debug_assert!(earned_points <= max_points);
        items.push(ScoredItem {
            key: def.key,
            name: def.name,
            category: def.category,
            max_points,
            earned_points,
            completed,
        });
    }

    let total_points = items.iter().map(|i| i.earned_points).sum();
    let summary = ranks.resolve(total_points);

    Ok(ScoreReport {
        items,
        total_points,
        summary,
    })
}

/// Resolves an item's maximum, consulting the snapshot for data-dependent
/// totals. Unavailable sources resolve to zero.
fn resolve_max(def: &ItemDef, quests: &QuestPointTable, snapshot: &NormalizedSnapshot) -> u32 {
    match def.max {
        MaxPoints::Fixed(n) => n,
        MaxPoints::QuestPointTotal => quests.total(),
        MaxPoints::MiniquestTotal => snapshot
            .profile
            .as_ref()
            .map_or(0, |p| miniquest_count(p, false)),
        MaxPoints::DiaryTaskTotal => snapshot
            .profile
            .as_ref()
            .map_or(0, |p| p.diary_tiers.iter().map(|t| t.tasks_count).sum()),
        MaxPoints::CombatPointTotal => snapshot.profile.as_ref().map_or(0, |p| {
            p.combat_tiers.iter().map(|t| t.id * t.tasks_count).sum()
        }),
    }
}

fn evaluate(
    def: &ItemDef,
    max_points: u32,
    quests: &QuestPointTable,
    snapshot: &NormalizedSnapshot,
    combat_ladder: Option<&CombatLadder>,
    now: DateTime<Utc>,
) -> (u32, bool) {
    let profile = snapshot.profile.as_ref();
    let stats = snapshot.stats.as_ref();

    match def.rule {
        Rule::QuestPoints => match profile {
            Some(p) => accumulate(quest_points(p, quests), max_points),
            None => (0, false),
        },
        Rule::MiniquestCount => match profile {
            Some(p) => accumulate(miniquest_count(p, true), max_points),
            None => (0, false),
        },
        Rule::QuestComplete(name) => binary(
            profile.is_some_and(|p| {
                p.quests
                    .iter()
                    .any(|q| q.name == name && q.is_completed())
            }),
            max_points,
        ),
        Rule::DiaryTier(index) => binary(
            profile.is_some_and(|p| diary_tier_completed(p, index)),
            max_points,
        ),
        Rule::DiaryTasks => match profile {
            Some(p) => accumulate(
                p.diary_tiers.iter().map(|t| t.completed_count).sum(),
                max_points,
            ),
            None => (0, false),
        },
        Rule::CombatPoints => match profile {
            Some(p) => accumulate(combat_points(p), max_points),
            None => (0, false),
        },
        Rule::CombatTier(tier_id) => {
            let done = match (profile, combat_ladder.and_then(|l| l.threshold(tier_id))) {
                (Some(p), Some(threshold)) => combat_points(p) >= threshold,
                _ => false,
            };
            binary(done, max_points)
        }
        Rule::OwnedItem(name) => binary(
            profile.is_some_and(|p| p.owned_items.contains(name)),
            max_points,
        ),
        Rule::OwnedAll(names) => binary(
            profile.is_some_and(|p| names.iter().all(|n| p.owned_items.contains(*n))),
            max_points,
        ),
        Rule::Ehb => match stats {
            Some(s) => accumulate(floor_hours(s.ehb), max_points),
            None => (0, false),
        },
        Rule::Ehp => match stats {
            Some(s) => accumulate(floor_hours(s.ehp), max_points),
            None => (0, false),
        },
        Rule::TotalLevel(threshold) => binary(
            stats.is_some_and(|s| s.total_level >= threshold),
            max_points,
        ),
        Rule::CollectionCount => match profile {
            Some(p) => accumulate(
                u32::try_from(p.owned_items.len()).unwrap_or(u32::MAX),
                max_points,
            ),
            None => (0, false),
        },
        Rule::TenureDays(days) => binary(
            (now - snapshot.joined_at).num_days() >= days,
            max_points,
        ),
        Rule::Unscored => (0, false),
    }
}

/// Binary rules award all or nothing.
fn binary(done: bool, max_points: u32) -> (u32, bool) {
    if done {
        (max_points, true)
    } else {
        (0, false)
    }
}

/// Accumulator rules report a running value capped at the maximum, and only
/// count as completed at the cap.
fn accumulate(value: u32, max_points: u32) -> (u32, bool) {
    if value >= max_points {
        (max_points, true)
    } else {
        (value, false)
    }
}

fn quest_points(profile: &ProfileSnapshot, quests: &QuestPointTable) -> u32 {
    profile
        .quests
        .iter()
        .filter(|q| q.is_completed())
        .map(|q| quests.points_for(&q.name))
        .sum()
}

/// Counts miniquest records; `completed_only` restricts to finished ones.
fn miniquest_count(profile: &ProfileSnapshot, completed_only: bool) -> u32 {
    let count = profile
        .quests
        .iter()
        .filter(|q| q.kind == QuestKind::Miniquest)
        .filter(|q| !completed_only || q.state == QuestState::Completed)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// A diary tier spans one record per region; all of them must be finished.
/// A tier with no records at all does not count as finished.
fn diary_tier_completed(profile: &ProfileSnapshot, tier_index: u32) -> bool {
    let mut any = false;
    for tier in profile
        .diary_tiers
        .iter()
        .filter(|t| t.tier_index == tier_index)
    {
        if tier.completed_count != tier.tasks_count {
            return false;
        }
        any = true;
    }
    any
}

fn combat_points(profile: &ProfileSnapshot) -> u32 {
    profile
        .combat_tiers
        .iter()
        .map(|t| t.completed_count * t.id)
        .sum()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_hours(value: f64) -> u32 {
    value.max(0.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::catalog::{Category, ItemKey, TOA_REMNANTS};
    use crate::snapshot::{CombatTier, DiaryTier, QuestRecord, StatsSnapshot};

    fn eval_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn quest_table() -> QuestPointTable {
        QuestPointTable::from_entries(
            [
                ("Cook's Assistant", 1),
                ("Dragon Slayer II", 5),
                ("Recipe for Disaster", 10),
                ("While Guthix Sleeps", 5),
            ]
            .into_iter()
            .map(|(n, p)| (n.to_string(), p)),
        )
        .unwrap()
    }

    fn quest(name: &str, state: QuestState, kind: QuestKind) -> QuestRecord {
        QuestRecord {
            name: name.to_string(),
            state,
            kind,
        }
    }

    fn with_profile(profile: ProfileSnapshot) -> NormalizedSnapshot {
        NormalizedSnapshot {
            profile: Some(profile),
            stats: None,
            joined_at: eval_time(),
        }
    }

    fn item(report: &ScoreReport, key: ItemKey) -> &crate::report::ScoredItem {
        report.item(key).expect("item must exist in report")
    }

    #[test]
    fn unavailable_sources_score_zero_everywhere() {
        let snapshot = NormalizedSnapshot::unavailable(eval_time());
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();

        assert_eq!(report.total_points, 0);
        assert_eq!(report.summary.rank, "Helper");
        for scored in &report.items {
            assert_eq!(scored.earned_points, 0, "{} earned points", scored.name);
            assert!(!scored.completed, "{} should be incomplete", scored.name);
        }
    }

    #[test]
    fn report_covers_whole_catalog_in_order() {
        let snapshot = NormalizedSnapshot::unavailable(eval_time());
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();

        assert_eq!(report.items.len(), catalog::ITEMS.len());
        for (scored, def) in report.items.iter().zip(catalog::ITEMS) {
            assert_eq!(scored.key, def.key);
        }
        // Grouped iteration covers everything exactly once.
        let grouped: usize = Category::ALL
            .iter()
            .map(|c| report.items_in(*c).count())
            .sum();
        assert_eq!(grouped, report.items.len());
    }

    #[test]
    fn dragon_slayer_2_alone() {
        let profile = ProfileSnapshot {
            quests: vec![quest(
                "Dragon Slayer II",
                QuestState::Completed,
                QuestKind::Quest,
            )],
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        let ds2 = item(&report, ItemKey::DragonSlayer2);
        assert!(ds2.completed);
        assert_eq!(ds2.earned_points, 100);

        let qp = item(&report, ItemKey::QuestPoints);
        assert_eq!(qp.earned_points, 5);
        assert_eq!(qp.max_points, 21);
        assert!(!qp.completed);
    }

    #[test]
    fn quest_points_complete_at_full_total() {
        let profile = ProfileSnapshot {
            quests: vec![
                quest("Cook's Assistant", QuestState::Completed, QuestKind::Quest),
                quest("Dragon Slayer II", QuestState::Completed, QuestKind::Quest),
                quest("Recipe for Disaster", QuestState::Completed, QuestKind::Quest),
                quest("While Guthix Sleeps", QuestState::Completed, QuestKind::Quest),
            ],
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        let qp = item(&report, ItemKey::QuestPoints);
        assert_eq!(qp.earned_points, 21);
        assert!(qp.completed);
    }

    #[test]
    fn in_progress_quests_award_nothing() {
        let profile = ProfileSnapshot {
            quests: vec![quest(
                "Dragon Slayer II",
                QuestState::InProgress,
                QuestKind::Quest,
            )],
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        assert!(!item(&report, ItemKey::DragonSlayer2).completed);
        assert_eq!(item(&report, ItemKey::QuestPoints).earned_points, 0);
    }

    #[test]
    fn miniquests_count_toward_their_snapshot_total() {
        let profile = ProfileSnapshot {
            quests: vec![
                quest("Mage Arena II", QuestState::Completed, QuestKind::Miniquest),
                quest("Enter the Abyss", QuestState::InProgress, QuestKind::Miniquest),
                quest("Cook's Assistant", QuestState::Completed, QuestKind::Quest),
            ],
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        let mini = item(&report, ItemKey::MiniquestsCompleted);
        assert_eq!(mini.max_points, 2);
        assert_eq!(mini.earned_points, 1);
        assert!(!mini.completed);

        // The Imbued God Cape item keys off the Mage Arena II record.
        assert!(item(&report, ItemKey::ImbuedGodCape).completed);
    }

    #[test]
    fn all_miniquests_done_completes_the_item() {
        let profile = ProfileSnapshot {
            quests: vec![quest(
                "Mage Arena II",
                QuestState::Completed,
                QuestKind::Miniquest,
            )],
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        let mini = item(&report, ItemKey::MiniquestsCompleted);
        assert_eq!(mini.earned_points, 1);
        assert!(mini.completed);
    }

    #[test]
    fn diary_tier_requires_every_region_complete() {
        let profile = ProfileSnapshot {
            diary_tiers: vec![
                DiaryTier {
                    tier_index: 0,
                    tasks_count: 10,
                    completed_count: 10,
                },
                DiaryTier {
                    tier_index: 0,
                    tasks_count: 12,
                    completed_count: 11,
                },
                DiaryTier {
                    tier_index: 1,
                    tasks_count: 8,
                    completed_count: 8,
                },
            ],
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        assert!(!item(&report, ItemKey::EasyDiaries).completed);
        assert!(item(&report, ItemKey::MediumDiaries).completed);
        // No Hard records at all: not complete.
        assert!(!item(&report, ItemKey::HardDiaries).completed);

        let aggregate = item(&report, ItemKey::DiariesCompleted);
        assert_eq!(aggregate.earned_points, 10 + 11 + 8);
        assert_eq!(aggregate.max_points, 10 + 12 + 8);
        assert!(!aggregate.completed);
    }

    #[test]
    fn combat_points_at_easy_threshold_only() {
        let tiers = vec![
            CombatTier {
                id: 1,
                tasks_count: 10,
                completed_count: 10,
            },
            CombatTier {
                id: 2,
                tasks_count: 10,
                completed_count: 0,
            },
            CombatTier {
                id: 3,
                tasks_count: 10,
                completed_count: 0,
            },
        ];
        let profile = ProfileSnapshot {
            combat_tiers: tiers,
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        // Earned exactly the Easy cumulative threshold (10), below Medium's (30).
        assert!(item(&report, ItemKey::EasyCombat).completed);
        assert!(!item(&report, ItemKey::MediumCombat).completed);
        assert!(!item(&report, ItemKey::HardCombat).completed);
        assert!(!item(&report, ItemKey::GrandmasterCombat).completed);

        let points = item(&report, ItemKey::CombatPoints);
        assert_eq!(points.earned_points, 10);
        assert_eq!(points.max_points, 10 + 20 + 30);
        assert!(!points.completed);
    }

    #[test]
    fn owned_item_names_are_case_sensitive() {
        let profile = ProfileSnapshot {
            owned_items: HashSet::from(["Fire Cape".to_string()]),
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();
        // The source reports "Fire cape"; different casing must not match.
        assert!(!item(&report, ItemKey::FireCape).completed);
    }

    #[test]
    fn toa_remnants_need_all_five() {
        let four: HashSet<String> = TOA_REMNANTS[..4].iter().map(|s| (*s).to_string()).collect();
        let profile = ProfileSnapshot {
            owned_items: four,
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();
        assert!(!item(&report, ItemKey::ToaRemnants).completed);

        let all: HashSet<String> = TOA_REMNANTS.iter().map(|s| (*s).to_string()).collect();
        let profile = ProfileSnapshot {
            owned_items: all,
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();
        assert!(item(&report, ItemKey::ToaRemnants).completed);
    }

    #[test]
    fn unscored_items_stay_at_zero_even_when_owned() {
        let profile = ProfileSnapshot {
            owned_items: HashSet::from([
                "Ancient blood ornament kit".to_string(),
                "Purifying sigil".to_string(),
            ]),
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        for key in [
            ItemKey::AncientBloodOrnamentKit,
            ItemKey::PurifyingSigil,
            ItemKey::MusicCape,
        ] {
            let scored = item(&report, key);
            assert_eq!(scored.earned_points, 0, "{} must stay at zero", scored.name);
            assert!(!scored.completed);
        }
    }

    #[test]
    fn collections_accumulate_and_cap() {
        let owned: HashSet<String> = (0..40).map(|i| format!("Item {i}")).collect();
        let profile = ProfileSnapshot {
            owned_items: owned,
            ..ProfileSnapshot::default()
        };
        let report = score(&quest_table(), &with_profile(profile), eval_time()).unwrap();

        let clogs = item(&report, ItemKey::CollectionsLogged);
        assert_eq!(clogs.earned_points, 40);
        assert!(!clogs.completed);
    }

    #[test]
    fn ehb_partial_and_ehp_capped() {
        let snapshot = NormalizedSnapshot {
            profile: None,
            stats: Some(StatsSnapshot {
                ehb: 833.7,
                ehp: 1250.0,
                total_level: 0,
            }),
            joined_at: eval_time(),
        };
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();

        let ehb = item(&report, ItemKey::Ehb);
        assert_eq!(ehb.earned_points, 833);
        assert!(!ehb.completed);

        let ehp = item(&report, ItemKey::Ehp);
        assert_eq!(ehp.earned_points, 1250);
        assert!(ehp.completed);
    }

    #[test]
    fn total_level_2200_exactly() {
        let snapshot = NormalizedSnapshot {
            profile: None,
            stats: Some(StatsSnapshot {
                ehb: 0.0,
                ehp: 0.0,
                total_level: 2200,
            }),
            joined_at: eval_time(),
        };
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();

        for key in [
            ItemKey::Level1250,
            ItemKey::Level1500,
            ItemKey::Level1750,
            ItemKey::Level2000,
            ItemKey::Level2100,
            ItemKey::Level2200,
        ] {
            assert!(item(&report, key).completed, "{key:?} should be complete");
        }
        assert!(!item(&report, ItemKey::Level2277).completed);
    }

    #[test]
    fn tenure_boundaries() {
        let snapshot = NormalizedSnapshot {
            profile: None,
            stats: None,
            joined_at: eval_time() - Duration::days(365),
        };
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();

        assert!(item(&report, ItemKey::OneMonthInClan).completed);
        assert!(item(&report, ItemKey::ThreeMonthsInClan).completed);
        assert!(item(&report, ItemKey::SixMonthsInClan).completed);
        assert!(item(&report, ItemKey::OneYearInClan).completed);
        assert!(!item(&report, ItemKey::TwoYearsInClan).completed);
    }

    #[test]
    fn fresh_join_has_no_tenure() {
        let snapshot = NormalizedSnapshot::unavailable(eval_time());
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();
        assert!(!item(&report, ItemKey::OneMonthInClan).completed);
    }

    #[test]
    fn total_matches_recomputed_item_sum() {
        let profile = ProfileSnapshot {
            quests: vec![
                quest("Dragon Slayer II", QuestState::Completed, QuestKind::Quest),
                quest("Mage Arena II", QuestState::Completed, QuestKind::Miniquest),
            ],
            owned_items: HashSet::from(["Fire cape".to_string(), "Dragon defender".to_string()]),
            diary_tiers: vec![DiaryTier {
                tier_index: 0,
                tasks_count: 10,
                completed_count: 10,
            }],
            combat_tiers: vec![CombatTier {
                id: 1,
                tasks_count: 5,
                completed_count: 5,
            }],
        };
        let snapshot = NormalizedSnapshot {
            profile: Some(profile),
            stats: Some(StatsSnapshot {
                ehb: 120.9,
                ehp: 700.2,
                total_level: 1800,
            }),
            joined_at: eval_time() - Duration::days(1000),
        };
        let report = score(&quest_table(), &snapshot, eval_time()).unwrap();

        let recomputed: u32 = report.items.iter().map(|i| i.earned_points).sum();
        assert_eq!(report.total_points, recomputed);
        assert!(report.total_points > 0);

        for scored in &report.items {
            assert!(
                scored.earned_points <= scored.max_points,
                "{} exceeds its maximum",
                scored.name
            );
        }
    }
}
