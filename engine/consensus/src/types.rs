use scoring::Position;
use serde::{Deserialize, Serialize};

/// The aggregated, ranked projection summary for one player identity.
///
/// One record exists per distinct `(player, team, position)` present in the
/// input; the whole set is recomputed on every aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusRecord {
    /// Player display name (e.g. "Josh Allen")
    pub player: String,
    /// Team abbreviation (e.g. "BUF")
    pub team: String,
    /// Roster position
    pub position: Position,
    /// Opponent abbreviation, may be empty
    #[serde(default)]
    pub opponent: String,
    /// Arithmetic mean of the contributing point values
    pub consensus: f64,
    /// 10th percentile of the contributing point values
    pub floor: f64,
    /// 90th percentile of the contributing point values
    pub ceiling: f64,
    /// 1-based rank of `consensus` descending across all positions
    pub overall_rank: u32,
    /// 1-based rank of `consensus` descending within this position
    pub pos_rank: u32,
}

impl ConsensusRecord {
    /// Identity key used for cache reconciliation
    pub fn identity(&self) -> (&str, Position) {
        (&self.player, self.position)
    }
}
