//! Core scoring engine for the clan rank calculator.
//!
//! Evaluates a static catalog of rank items (quests, achievement diaries,
//! PvM milestones, skilling thresholds, clan tenure) against a normalized
//! snapshot of a player's external data, sums the earned points, and resolves
//! the player's clan rank tier. The engine is a pure function of the
//! snapshot and the evaluation clock; all I/O lives in `clanrank-sources`.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod quests;
pub mod rank;
pub mod report;
pub mod snapshot;

mod error;

pub use catalog::{Category, ItemKey};
pub use config::{load_config, AppConfig, ConfigError};
pub use engine::score;
pub use error::CatalogError;
pub use quests::QuestPointTable;
pub use rank::{RankLadder, RankSummary};
pub use report::{ScoreReport, ScoredItem};
pub use snapshot::NormalizedSnapshot;
