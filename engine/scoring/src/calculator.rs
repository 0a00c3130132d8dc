//! Turns one projected stat line into one fantasy-point value.
//!
//! The calculator is a pure function over a fully populated stat record:
//! there are no missing keys, no validation, and no error path. Negative
//! quantities pass through as-is; upstream coercion is the fetch layer's job.

use crate::rubric;
use crate::types::{DefenseStats, OffenseStats, ScoredLine, StatLine, StatSheet};

/// Score one stat payload under the league rubric.
///
/// Returns the fantasy-point total rounded to 2 decimal places.
pub fn score(stats: &StatSheet) -> f64 {
    let points = match stats {
        StatSheet::Offense(offense) => score_offense(offense),
        StatSheet::Defense(defense) => score_defense(defense),
    };
    round2(points)
}

/// Score a full stat line, attaching the point value to the identity.
pub fn score_line(line: StatLine) -> ScoredLine {
    let points = score(&line.stats);
    ScoredLine { line, points }
}

fn score_offense(s: &OffenseStats) -> f64 {
    let mut pts = 0.0;

    // Passing
    pts += s.pass_cmp * rubric::PASS_CMP;
    pts += s.pass_yds * rubric::PASS_YDS;
    pts += rubric::passing_yardage_bonus(s.pass_yds);
    pts += s.pass_td * rubric::PASS_TD;
    pts += s.int * rubric::INT;
    pts += s.sacks_taken * rubric::SACKS_TAKEN;
    pts += s.pick_six * rubric::PICK_SIX;
    pts += s.pass_40_plus_cmp * rubric::PASS_40_PLUS_CMP;
    pts += s.pass_40_plus_td * rubric::PASS_40_PLUS_TD;
    pts += s.pass_fd * rubric::PASS_FD;

    // Rushing
    pts += s.rush_att * rubric::RUSH_ATT;
    pts += s.rush_yds * rubric::RUSH_YDS;
    pts += rubric::rushing_receiving_yardage_bonus(s.rush_yds);
    pts += s.rush_td * rubric::RUSH_TD;
    pts += s.rush_40_plus * rubric::RUSH_40_PLUS;
    pts += s.rush_40_plus_td * rubric::RUSH_40_PLUS_TD;
    pts += s.rush_fd * rubric::RUSH_FD;

    // Receiving
    pts += s.rec * rubric::REC;
    pts += s.rec_yds * rubric::REC_YDS;
    pts += rubric::rushing_receiving_yardage_bonus(s.rec_yds);
    pts += s.rec_td * rubric::REC_TD;
    pts += s.rec_40_plus * rubric::REC_40_PLUS;
    pts += s.rec_40_plus_td * rubric::REC_40_PLUS_TD;
    pts += s.rec_fd * rubric::REC_FD;

    // Misc offense
    pts += s.two_pt * rubric::TWO_PT;
    pts += s.fumble_lost * rubric::FUMBLE_LOST;
    pts += s.fumble_td * rubric::FUMBLE_TD;
    pts += s.return_yds * rubric::RETURN_YDS;
    pts += s.return_td * rubric::RETURN_TD;

    // Kicking
    pts += s.fg_0_19 * rubric::FG_0_19;
    pts += s.fg_20_29 * rubric::FG_20_29;
    pts += s.fg_30_39 * rubric::FG_30_39;
    pts += s.fg_40_49 * rubric::FG_40_49;
    pts += s.fg_50_plus * rubric::FG_50_PLUS;
    let fg_misses =
        s.fg_miss_0_19 + s.fg_miss_20_29 + s.fg_miss_30_39 + s.fg_miss_40_49 + s.fg_miss_50_plus;
    pts += fg_misses * rubric::FG_MISS;
    pts += s.xp_made * rubric::XP_MADE;
    pts += s.xp_miss * rubric::XP_MISS;

    pts
}

fn score_defense(s: &DefenseStats) -> f64 {
    let mut pts = 0.0;

    pts += rubric::points_allowed_tier(s.opp_pts);
    pts += rubric::yards_allowed_tier(s.opp_yds);

    pts += s.def_sacks * rubric::DEF_SACKS;
    pts += s.def_int * rubric::DEF_INT;
    pts += s.def_fum_rec * rubric::DEF_FUM_REC;
    pts += s.def_td * rubric::DEF_TD;
    pts += s.def_safety * rubric::DEF_SAFETY;
    pts += s.def_block * rubric::DEF_BLOCK;
    pts += s.def_return_td * rubric::DEF_RETURN_TD;
    pts += s.def_4th_down_stops * rubric::DEF_4TH_DOWN_STOPS;
    pts += s.def_tfl * rubric::DEF_TFL;
    pts += s.def_3_and_out * rubric::DEF_3_AND_OUT;
    pts += s.def_xp_return * rubric::DEF_XP_RETURN;

    pts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn offense(stats: OffenseStats) -> StatSheet {
        StatSheet::Offense(stats)
    }

    fn defense(stats: DefenseStats) -> StatSheet {
        StatSheet::Defense(stats)
    }

    #[test]
    fn test_empty_stat_sheets_score_zero() {
        assert_eq!(score(&offense(OffenseStats::default())), 0.0);
        assert_eq!(score(&defense(DefenseStats::default())), 0.0);
    }

    #[test]
    fn test_qb_line_with_yardage_bonus() {
        // 310 pass yds -> 15.5 linear + 3 bonus; 2 TD -> 12; 1 INT -> -2
        let sheet = offense(OffenseStats {
            pass_yds: 310.0,
            pass_td: 2.0,
            int: 1.0,
            ..Default::default()
        });
        assert_eq!(score(&sheet), 28.5);
    }

    #[test]
    fn test_dst_line_with_tiers() {
        // pts tier 7-13 -> 6; yds tier 200-299 -> 2; 3 sacks -> 6
        let sheet = defense(DefenseStats {
            opp_pts: 10.0,
            opp_yds: 250.0,
            def_sacks: 3.0,
            ..Default::default()
        });
        assert_eq!(score(&sheet), 14.0);
    }

    #[test]
    fn test_yardage_bonus_is_exclusive_not_cumulative() {
        let at_400 = offense(OffenseStats { pass_yds: 400.0, ..Default::default() });
        let at_450 = offense(OffenseStats { pass_yds: 450.0, ..Default::default() });
        // 400 * 0.05 + 4 = 24.0; 450 * 0.05 + 4 = 26.5 (the bonus stays +4)
        assert_eq!(score(&at_400), 24.0);
        assert_eq!(score(&at_450), 26.5);
    }

    #[test]
    fn test_score_is_monotonic_in_touchdowns() {
        for td in 0..5 {
            let lower = offense(OffenseStats { rec_td: td as f64, ..Default::default() });
            let higher = offense(OffenseStats { rec_td: (td + 1) as f64, ..Default::default() });
            assert!(score(&higher) > score(&lower));
        }
        let one_pass_td = offense(OffenseStats { pass_td: 1.0, ..Default::default() });
        let one_rush_td = offense(OffenseStats { rush_td: 1.0, ..Default::default() });
        assert_eq!(score(&one_pass_td), 6.0);
        assert_eq!(score(&one_rush_td), 6.0);
    }

    #[test]
    fn test_kicker_ladder() {
        let sheet = offense(OffenseStats {
            fg_30_39: 2.0,
            fg_50_plus: 1.0,
            fg_miss_40_49: 1.0,
            xp_made: 3.0,
            ..Default::default()
        });
        // 2*4 + 1*5 - 1 + 3 = 15
        assert_eq!(score(&sheet), 15.0);
    }

    #[test]
    fn test_result_rounds_to_two_decimals() {
        // 3 sacks taken at -0.25 plus 1 completion at 0.1 = -0.65
        let sheet = offense(OffenseStats {
            sacks_taken: 3.0,
            pass_cmp: 1.0,
            ..Default::default()
        });
        assert_eq!(score(&sheet), -0.65);
    }

    #[test]
    fn test_score_line_preserves_identity() {
        let line = StatLine {
            player: "Josh Allen".to_string(),
            team: "BUF".to_string(),
            position: Position::Qb,
            opponent: "MIA".to_string(),
            source: "fantasypros".to_string(),
            stats: offense(OffenseStats { pass_td: 2.0, ..Default::default() }),
        };

        let scored = score_line(line.clone());
        assert_eq!(scored.line, line);
        assert_eq!(scored.points, 12.0);
    }
}
