//! Clan rank tier table and resolution.

use crate::error::CatalogError;

/// Rank tiers with minimum point thresholds, ascending.
pub const RANKS: &[(&str, u32)] = &[
    ("Helper", 0),
    ("Sapphire", 500),
    ("Emerald", 1000),
    ("Ruby", 2000),
    ("Diamond", 3500),
    ("Dragonstone", 5000),
    ("Onyx", 6500),
    ("Zenyte", 8250),
    ("Beast", 10000),
    ("Wrath", 12500),
];

/// Resolved rank for a point total.
///
/// At or above the top threshold, `next_rank` equals `rank` and
/// `points_to_next` is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSummary {
    pub rank: String,
    pub next_rank: String,
    pub points_to_next: u32,
}

impl RankSummary {
    /// Whether the top tier has been reached.
    #[must_use]
    pub fn at_max_rank(&self) -> bool {
        self.rank == self.next_rank
    }
}

/// Validated rank tier ladder.
#[derive(Debug, Clone)]
pub struct RankLadder {
    tiers: Vec<(String, u32)>,
}

impl RankLadder {
    /// Builds the ladder from the static [`RANKS`] table.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the table is empty, does not start at
    /// zero, or is not strictly increasing — a defect that would corrupt
    /// every report.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_tiers(RANKS.iter().map(|&(name, pts)| (name.to_string(), pts)))
    }

    /// Builds a ladder from arbitrary tiers, applying the same validation.
    ///
    /// # Errors
    ///
    /// See [`RankLadder::new`].
    pub fn with_tiers(
        tiers: impl IntoIterator<Item = (String, u32)>,
    ) -> Result<Self, CatalogError> {
        let tiers: Vec<(String, u32)> = tiers.into_iter().collect();
        let Some(first) = tiers.first() else {
            return Err(CatalogError::EmptyRankTable);
        };
        if first.1 != 0 {
            return Err(CatalogError::RankTableStart(first.1));
        }
        for pair in tiers.windows(2) {
            if pair[1].1 <= pair[0].1 {
                return Err(CatalogError::RankTableOrder {
                    name: pair[1].0.clone(),
                    threshold: pair[1].1,
                });
            }
        }
        Ok(Self { tiers })
    }

    /// Resolves a point total to the highest tier whose threshold it meets,
    /// plus the distance to the next tier.
    #[must_use]
    pub fn resolve(&self, total_points: u32) -> RankSummary {
        // Validation guarantees a tier at 0, so the scan always matches.
        let current = self
            .tiers
            .iter()
            .rposition(|(_, threshold)| *threshold <= total_points)
            .unwrap_or(0);

        let rank = self.tiers[current].0.clone();
        match self.tiers.get(current + 1) {
            Some((next_name, next_threshold)) => RankSummary {
                rank,
                next_rank: next_name.clone(),
                points_to_next: next_threshold - total_points,
            },
            None => RankSummary {
                next_rank: rank.clone(),
                rank,
                points_to_next: 0,
            },
        }
    }
}
