use thiserror::Error;

/// Construction-time catalog defects.
///
/// These indicate a broken rule table or quest file, not bad player data —
/// they silently corrupt every report if allowed through, so loading fails
/// loudly instead. Player-data irregularities never produce an error; the
/// engine degrades them to zero scores.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two catalog entries share a display name.
    #[error("duplicate rank item name: {0}")]
    DuplicateItem(String),

    /// The rank tier table has no entries.
    #[error("rank tier table is empty")]
    EmptyRankTable,

    /// The lowest rank tier must start at zero points.
    #[error("rank tier table must start at 0 points, got {0}")]
    RankTableStart(u32),

    /// Tier thresholds must be strictly increasing.
    #[error("rank tier '{name}' threshold {threshold} is not above the previous tier")]
    RankTableOrder { name: String, threshold: u32 },

    /// The quest point file could not be read.
    #[error("failed to read quest table {path}: {source}")]
    QuestFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The quest point file is not valid YAML of the expected shape.
    #[error("failed to parse quest table: {0}")]
    QuestFileParse(#[from] serde_yaml::Error),

    /// A quest appears twice in the quest point file.
    #[error("duplicate quest '{0}' in quest table")]
    DuplicateQuest(String),

    /// Every mapped quest must award at least one point.
    #[error("quest '{0}' has a zero point value")]
    ZeroPointQuest(String),
}
