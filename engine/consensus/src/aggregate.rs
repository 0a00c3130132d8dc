//! Grouping, percentile, and ranking logic for the consensus table.

use crate::types::ConsensusRecord;
use scoring::{Position, ScoredLine};
use std::collections::HashMap;

/// Aggregate scored projection lines into one consensus record per player.
///
/// Lines are grouped by `(player, team, position)` in first-seen order; every
/// line counts as one sample regardless of which upstream source produced it.
/// The output is sorted by consensus descending, with `overall_rank` and
/// `pos_rank` assigned in that order (ties keep their first-seen order).
pub fn aggregate(lines: &[ScoredLine]) -> Vec<ConsensusRecord> {
    struct Group {
        opponent: String,
        points: Vec<f64>,
    }

    let mut order: Vec<(String, String, Position)> = Vec::new();
    let mut groups: HashMap<(String, String, Position), Group> = HashMap::new();

    for scored in lines {
        let key =
            (scored.line.player.clone(), scored.line.team.clone(), scored.line.position);
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Group { opponent: scored.line.opponent.clone(), points: Vec::new() }
        });
        group.points.push(scored.points);
    }

    let records: Vec<ConsensusRecord> = order
        .into_iter()
        .map(|key| {
            let group = groups.remove(&key).expect("group exists for every ordered key");
            let (player, team, position) = key;

            let mut sorted = group.points.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

            let mean = group.points.iter().sum::<f64>() / group.points.len() as f64;

            ConsensusRecord {
                player,
                team,
                position,
                opponent: group.opponent,
                consensus: mean,
                floor: percentile(&sorted, 0.1),
                ceiling: percentile(&sorted, 0.9),
                overall_rank: 0,
                pos_rank: 0,
            }
        })
        .collect();

    rank(records)
}

/// Sort records by consensus descending and reassign both ranks in that
/// order. Runs over every record set that reaches the caller: the fresh
/// aggregate, and the merged table after cache reconciliation, so ranks are
/// always coherent over the whole set.
pub fn rank(mut records: Vec<ConsensusRecord>) -> Vec<ConsensusRecord> {
    // Stable sort keeps prior order among tied consensus values
    records.sort_by(|a, b| b.consensus.partial_cmp(&a.consensus).unwrap());

    let mut pos_counts: HashMap<Position, u32> = HashMap::new();
    for (index, record) in records.iter_mut().enumerate() {
        record.overall_rank = (index + 1) as u32;
        let count = pos_counts.entry(record.position).or_insert(0);
        *count += 1;
        record.pos_rank = *count;
    }

    records
}

/// Percentile over an ascending-sorted sample set, with linear interpolation
/// between adjacent order statistics. A single sample is its own percentile
/// at every quantile.
fn percentile(sorted: &[f64], quantile: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = quantile * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * (rank - lower as f64)
    }
}
