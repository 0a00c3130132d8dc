//! Fresh-wins merge of fetched and persisted consensus records.

use consensus::ConsensusRecord;
use scoring::Position;
use std::collections::HashSet;

/// Merge a freshly fetched record set with the previously persisted one.
///
/// An empty fresh set returns the persisted records unchanged, so a total
/// fetch failure degrades to the last known good table. Otherwise fresh
/// records are kept ahead of persisted ones and the combined sequence is
/// de-duplicated by `(player, position)`, first occurrence wins: fresh data
/// replaces stale data for the same identity, while identities only present
/// in the persisted set are retained. The merge itself never touches rank
/// fields; callers re-rank the merged set before persisting or displaying it.
///
/// The merge is idempotent and never drops an identity that existed in
/// either input.
pub fn reconcile(
    fresh: Vec<ConsensusRecord>,
    persisted: Vec<ConsensusRecord>,
) -> Vec<ConsensusRecord> {
    if fresh.is_empty() {
        return persisted;
    }

    let mut seen: HashSet<(String, Position)> = HashSet::new();
    fresh
        .into_iter()
        .chain(persisted)
        .filter(|record| seen.insert((record.player.clone(), record.position)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player: &str, position: Position, points: f64) -> ConsensusRecord {
        ConsensusRecord {
            player: player.to_string(),
            team: "BUF".to_string(),
            position,
            opponent: String::new(),
            consensus: points,
            floor: points,
            ceiling: points,
            overall_rank: 1,
            pos_rank: 1,
        }
    }

    #[test]
    fn test_empty_fresh_falls_back_to_persisted() {
        let persisted = vec![
            record("Josh Allen", Position::Qb, 22.0),
            record("Bills DST", Position::Dst, 9.0),
        ];

        let merged = reconcile(Vec::new(), persisted.clone());
        assert_eq!(merged, persisted);
    }

    #[test]
    fn test_fresh_wins_for_shared_identity() {
        let fresh = vec![record("Josh Allen", Position::Qb, 25.0)];
        let persisted = vec![
            record("Josh Allen", Position::Qb, 22.0),
            record("Tyreek Hill", Position::Wr, 17.0),
        ];

        let merged = reconcile(fresh, persisted);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].player, "Josh Allen");
        assert_eq!(merged[0].consensus, 25.0);
        assert_eq!(merged[1].player, "Tyreek Hill");
    }

    #[test]
    fn test_duplicate_identities_within_fresh_are_collapsed() {
        let fresh = vec![
            record("Josh Allen", Position::Qb, 25.0),
            record("Josh Allen", Position::Qb, 19.0),
        ];

        let merged = reconcile(fresh, Vec::new());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].consensus, 25.0);
    }

    #[test]
    fn test_same_name_different_position_is_a_distinct_identity() {
        let fresh = vec![record("Taysom Hill", Position::Qb, 8.0)];
        let persisted = vec![record("Taysom Hill", Position::Te, 7.0)];

        let merged = reconcile(fresh, persisted);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let fresh = vec![
            record("Josh Allen", Position::Qb, 25.0),
            record("Josh Allen", Position::Qb, 19.0),
        ];
        let persisted = vec![
            record("Tyreek Hill", Position::Wr, 17.0),
            record("Josh Allen", Position::Qb, 22.0),
        ];

        let merged = reconcile(fresh, persisted);
        let remerged = reconcile(merged.clone(), Vec::new());
        assert_eq!(remerged, merged);

        let remerged_empty_fresh = reconcile(Vec::new(), merged.clone());
        assert_eq!(remerged_empty_fresh, merged);
    }
}
