//! The league's scoring settings as a literal constant table.
//!
//! These coefficients are the league configuration itself and must not be
//! re-derived or "simplified". Flat coefficients apply as `quantity x
//! coefficient`; the tier functions implement the mutually exclusive
//! threshold bonuses where only the single highest satisfied threshold
//! contributes.

// Passing
pub const PASS_CMP: f64 = 0.1;
pub const PASS_YDS: f64 = 1.0 / 20.0; // 20 yds per point
pub const PASS_TD: f64 = 6.0;
pub const INT: f64 = -2.0;
pub const SACKS_TAKEN: f64 = -0.25;
pub const PICK_SIX: f64 = -2.0;
pub const PASS_40_PLUS_CMP: f64 = 1.0;
pub const PASS_40_PLUS_TD: f64 = 1.0;
pub const PASS_FD: f64 = 0.1;

// Rushing
pub const RUSH_ATT: f64 = 0.35;
pub const RUSH_YDS: f64 = 0.1; // 10 yds per point
pub const RUSH_TD: f64 = 6.0;
pub const RUSH_40_PLUS: f64 = 2.0;
pub const RUSH_40_PLUS_TD: f64 = 1.0;
pub const RUSH_FD: f64 = 0.2;

// Receiving
pub const REC: f64 = 0.7;
pub const REC_YDS: f64 = 0.1;
pub const REC_TD: f64 = 6.0;
pub const REC_40_PLUS: f64 = 2.0;
pub const REC_40_PLUS_TD: f64 = 1.0;
pub const REC_FD: f64 = 0.2;

// Misc offense
pub const TWO_PT: f64 = 2.0;
pub const FUMBLE_LOST: f64 = -2.0;
pub const FUMBLE_TD: f64 = 6.0; // offensive fumble return TD
pub const RETURN_YDS: f64 = 1.0 / 20.0;
pub const RETURN_TD: f64 = 6.0;

// Kicking by distance band
pub const FG_0_19: f64 = 3.0;
pub const FG_20_29: f64 = 3.0;
pub const FG_30_39: f64 = 4.0;
pub const FG_40_49: f64 = 4.0;
pub const FG_50_PLUS: f64 = 5.0;
pub const FG_MISS: f64 = -1.0; // every miss band scores the same
pub const XP_MADE: f64 = 1.0;
pub const XP_MISS: f64 = -1.0;

// Defense/special teams flat terms
pub const DEF_SACKS: f64 = 2.0;
pub const DEF_INT: f64 = 3.0;
pub const DEF_FUM_REC: f64 = 3.0;
pub const DEF_TD: f64 = 6.0;
pub const DEF_SAFETY: f64 = 2.0;
pub const DEF_BLOCK: f64 = 2.0;
pub const DEF_RETURN_TD: f64 = 6.0;
pub const DEF_4TH_DOWN_STOPS: f64 = 0.5;
pub const DEF_TFL: f64 = 0.5;
pub const DEF_3_AND_OUT: f64 = 0.5;
pub const DEF_XP_RETURN: f64 = 2.0;

/// Passing yardage bonus: +2 at 200, +3 at 300, +4 at 400.
/// Thresholds are mutually exclusive; only the highest one met applies.
pub fn passing_yardage_bonus(yards: f64) -> f64 {
    if yards >= 400.0 {
        4.0
    } else if yards >= 300.0 {
        3.0
    } else if yards >= 200.0 {
        2.0
    } else {
        0.0
    }
}

/// Rushing and receiving yardage bonus: +3 at 100, +4 at 200.
/// Same mutually exclusive rule as the passing bonus.
pub fn rushing_receiving_yardage_bonus(yards: f64) -> f64 {
    if yards >= 200.0 {
        4.0
    } else if yards >= 100.0 {
        3.0
    } else {
        0.0
    }
}

/// Points-allowed tier for defense/special teams.
///
/// Bands: 0 -> +12, 1-6 -> +8, 7-13 -> +6, 14-20 -> +4, 21-27 -> +2,
/// 28-34 -> 0, 35+ -> -5. Fractional projections fall into the band that
/// contains them.
pub fn points_allowed_tier(points_allowed: f64) -> f64 {
    if points_allowed <= 0.0 {
        12.0
    } else if points_allowed < 7.0 {
        8.0
    } else if points_allowed < 14.0 {
        6.0
    } else if points_allowed < 21.0 {
        4.0
    } else if points_allowed < 28.0 {
        2.0
    } else if points_allowed < 35.0 {
        0.0
    } else {
        -5.0
    }
}

/// Yards-allowed tier for defense/special teams.
///
/// Bands: 0-99 -> +5, 100-199 -> +4, 200-299 -> +2, 300-399 -> 0,
/// 400-499 -> -1, 500+ -> -3.
pub fn yards_allowed_tier(yards_allowed: f64) -> f64 {
    if yards_allowed < 100.0 {
        5.0
    } else if yards_allowed < 200.0 {
        4.0
    } else if yards_allowed < 300.0 {
        2.0
    } else if yards_allowed < 400.0 {
        0.0
    } else if yards_allowed < 500.0 {
        -1.0
    } else {
        -3.0
    }
}
