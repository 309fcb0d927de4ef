//! The fetch → normalize → score → print pipeline.

use chrono::Utc;

use clanrank_core::{score, AppConfig, Category, QuestPointTable, ScoreReport};
use clanrank_sources::{
    build_snapshot, fetch_snapshots, RuneProfileClient, SnapshotCache, WiseOldManClient,
};

/// Evaluates one player and prints the summary table.
///
/// # Errors
///
/// Returns an error if the quest table fails validation, a source request
/// fails, or the catalog is defective. A player missing from a source is
/// not an error; the affected items score zero.
pub(crate) async fn run(config: &AppConfig, username: &str, refresh: bool) -> anyhow::Result<()> {
    let quests = QuestPointTable::load(&config.quests_path)?;

    let runeprofile =
        RuneProfileClient::new(&config.runeprofile_base_url, config.http_timeout_secs)?;
    let wom = WiseOldManClient::new(&config.wom_base_url, config.http_timeout_secs)?;
    let cache = SnapshotCache::new(config.cache_dir.clone());

    tracing::info!(username, group_id = config.clan_group_id, "fetching snapshots");
    let raw = fetch_snapshots(
        &runeprofile,
        &wom,
        &cache,
        username,
        config.clan_group_id,
        refresh,
    )
    .await?;

    let now = Utc::now();
    let snapshot = build_snapshot(
        raw.profile.as_ref(),
        raw.stats.as_ref(),
        Some(&raw.group),
        username,
        now,
    );

    let report = score(&quests, &snapshot, now)?;
    print_report(username, &report);
    Ok(())
}

fn print_report(username: &str, report: &ScoreReport) {
    println!("Username: {username}");
    println!("Rank: {} ({} pts)", report.summary.rank, report.total_points);
    if report.summary.at_max_rank() {
        println!("Next Rank: maximum rank reached");
    } else {
        println!(
            "Next Rank: {} ({} pts to go)",
            report.summary.next_rank, report.summary.points_to_next
        );
    }
    println!();
    println!(
        "{:<34}{:<10}{:>8}{:>10}",
        "CRITERIA", "DONE", "EARNED", "POSSIBLE"
    );

    for category in Category::ALL {
        println!();
        println!("{category}");
        for item in report.items_in(category) {
            let marker = if item.completed { "\u{2705}" } else { "\u{274c}" };
            println!(
                "{:<34}{:<10}{:>8}{:>10}",
                item.name, marker, item.earned_points, item.max_points
            );
        }
    }
}
