//! File-backed storage handle for the persisted consensus table.

use crate::error::Result;
use crate::table::PersistedTable;
use std::path::{Path, PathBuf};
use tracing::info;

/// Explicit handle to the on-disk projection table.
///
/// The table is read wholesale at run start and rewritten wholesale after a
/// successful run; there are no row-level updates. Writes go through a temp
/// file in the same directory followed by a rename, so readers never observe
/// a partially written table.
pub struct ProjectionStore {
    path: PathBuf,
}

impl ProjectionStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted table. A missing file is an empty table, not an
    /// error; any other I/O or parse failure propagates.
    pub async fn load(&self) -> Result<PersistedTable> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => {
                let table: PersistedTable = serde_json::from_str(&json)?;
                info!("Loaded {} persisted projections from {:?}", table.len(), self.path);
                Ok(table)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No projection cache at {:?}, starting empty", self.path);
                Ok(PersistedTable::empty())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replace the persisted table with `table`.
    pub async fn save(&self, table: &PersistedTable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(table)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        info!("Saved {} projections to {:?}", table.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consensus::ConsensusRecord;
    use scoring::Position;
    use tempfile::TempDir;

    fn sample_table() -> PersistedTable {
        PersistedTable::new(vec![ConsensusRecord {
            player: "Lamar Jackson".to_string(),
            team: "BAL".to_string(),
            position: Position::Qb,
            opponent: "CIN".to_string(),
            consensus: 23.4,
            floor: 18.1,
            ceiling: 29.9,
            overall_rank: 1,
            pos_rank: 1,
        }])
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProjectionStore::new(temp_dir.path().join("projections.json"));

        let table = store.load().await.unwrap();
        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProjectionStore::new(temp_dir.path().join("projections.json"));

        let table = sample_table();
        store.save(&table).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, table);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProjectionStore::new(temp_dir.path().join("data/cache/projections.json"));

        store.save(&sample_table()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_table() {
        let temp_dir = TempDir::new().unwrap();
        let store = ProjectionStore::new(temp_dir.path().join("projections.json"));

        store.save(&sample_table()).await.unwrap();
        let replacement = PersistedTable::new(Vec::new());
        store.save(&replacement).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.is_empty());
    }
}
