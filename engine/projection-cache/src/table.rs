use chrono::{DateTime, Utc};
use consensus::ConsensusRecord;
use serde::{Deserialize, Serialize};

/// The durable consensus table from the most recent successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedTable {
    /// When this table was last written
    pub last_updated: DateTime<Utc>,
    /// One record per player identity, consensus descending
    pub records: Vec<ConsensusRecord>,
}

impl PersistedTable {
    /// Create a table stamped with the current time
    pub fn new(records: Vec<ConsensusRecord>) -> Self {
        Self { last_updated: Utc::now(), records }
    }

    /// The empty table used when no cache file exists yet
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
