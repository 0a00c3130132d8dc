use serde::{Deserialize, Serialize};
use std::fmt;

/// Fantasy-relevant roster positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Qb,
    #[serde(rename = "RB")]
    Rb,
    #[serde(rename = "WR")]
    Wr,
    #[serde(rename = "TE")]
    Te,
    #[serde(rename = "K")]
    K,
    #[serde(rename = "DST")]
    Dst,
}

impl Position {
    /// Whether this position scores under the defense/special-teams rules
    pub fn is_defense(&self) -> bool {
        matches!(self, Position::Dst)
    }

    /// Conventional uppercase abbreviation (e.g. "QB")
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Dst => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projected offensive stat counts for one player.
///
/// Every recognized stat key is present and defaults to 0, so a sparse
/// upstream payload deserializes into a fully populated record and the
/// calculator never has to reason about missing keys. Quantities are
/// projected counts and yardages, not points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffenseStats {
    // Passing
    pub pass_cmp: f64,
    pub pass_yds: f64,
    pub pass_td: f64,
    pub int: f64,
    pub sacks_taken: f64,
    pub pick_six: f64,
    pub pass_40_plus_cmp: f64,
    pub pass_40_plus_td: f64,
    pub pass_fd: f64,

    // Rushing
    pub rush_att: f64,
    pub rush_yds: f64,
    pub rush_td: f64,
    pub rush_40_plus: f64,
    pub rush_40_plus_td: f64,
    pub rush_fd: f64,

    // Receiving
    pub rec: f64,
    pub rec_yds: f64,
    pub rec_td: f64,
    pub rec_40_plus: f64,
    pub rec_40_plus_td: f64,
    pub rec_fd: f64,

    // Misc offense
    pub two_pt: f64,
    pub fumble_lost: f64,
    pub fumble_td: f64,
    pub return_yds: f64,
    pub return_td: f64,

    // Kicking, by distance band
    pub fg_0_19: f64,
    pub fg_20_29: f64,
    pub fg_30_39: f64,
    pub fg_40_49: f64,
    pub fg_50_plus: f64,
    pub fg_miss_0_19: f64,
    pub fg_miss_20_29: f64,
    pub fg_miss_30_39: f64,
    pub fg_miss_40_49: f64,
    pub fg_miss_50_plus: f64,
    pub xp_made: f64,
    pub xp_miss: f64,
}

/// Projected defense/special-teams stat counts for one team unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseStats {
    /// Projected points allowed (feeds the points-allowed tier)
    pub opp_pts: f64,
    /// Projected yards allowed (feeds the yards-allowed tier)
    pub opp_yds: f64,
    pub def_sacks: f64,
    pub def_int: f64,
    pub def_fum_rec: f64,
    pub def_td: f64,
    pub def_safety: f64,
    pub def_block: f64,
    pub def_return_td: f64,
    pub def_4th_down_stops: f64,
    pub def_tfl: f64,
    pub def_3_and_out: f64,
    pub def_xp_return: f64,
}

/// The stat payload of a projection, split by which scoring branch applies.
///
/// Offense and defense share no stat keys, so each variant carries only the
/// fields that are meaningful to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatSheet {
    Offense(OffenseStats),
    Defense(DefenseStats),
}

/// One upstream source's raw projection for one player for the upcoming
/// scoring period. Immutable once built; consumed by the calculator to
/// produce a [`ScoredLine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    /// Player display name (e.g. "Josh Allen")
    pub player: String,
    /// Team abbreviation (e.g. "BUF")
    pub team: String,
    /// Roster position
    pub position: Position,
    /// Opponent abbreviation, may be empty when unknown
    #[serde(default)]
    pub opponent: String,
    /// Which upstream source produced this line
    #[serde(default)]
    pub source: String,
    /// The projected stat counts
    pub stats: StatSheet,
}

/// A [`StatLine`] plus its fantasy-point value under the league rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLine {
    #[serde(flatten)]
    pub line: StatLine,
    /// Fantasy points, rounded to 2 decimal places
    pub points: f64,
}
