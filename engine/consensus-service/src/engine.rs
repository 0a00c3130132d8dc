//! The fetch -> score -> aggregate -> reconcile pipeline.

use crate::source::ProjectionSource;
use anyhow::{Context, Result};
use consensus::{aggregate, rank, ConsensusRecord};
use projection_cache::{reconcile, PersistedTable, ProjectionStore};
use scoring::{score_line, ScoredLine};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

/// Terminal state of one engine run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The run produced a non-empty merged table; it has been persisted and
    /// is returned here for display.
    Completed(Vec<ConsensusRecord>),
    /// Every source came back empty and no persisted cache exists. Nothing
    /// was written.
    NoData,
}

/// The projection aggregation engine.
///
/// Owns its storage handle and source list; each `run` call works on its own
/// collections, so concurrent callers with separate engines never share
/// mutable state. The engine itself is synchronous computation between
/// awaited I/O boundaries; callers are expected to spawn `run` on a
/// background task and keep a foreground context responsive.
pub struct ConsensusEngine {
    store: ProjectionStore,
    sources: Vec<Box<dyn ProjectionSource>>,
}

impl ConsensusEngine {
    /// Create an engine over the given storage handle, with no sources yet
    pub fn new(store: ProjectionStore) -> Self {
        Self { store, sources: Vec::new() }
    }

    /// Register an upstream projection source
    pub fn add_source(&mut self, source: Box<dyn ProjectionSource>) {
        self.sources.push(source);
    }

    /// Load the persisted table without running a fetch. Used by the
    /// presentation layer for an instant view of the last known good data.
    pub async fn load_persisted(&self) -> Result<PersistedTable> {
        self.store.load().await.context("Failed to load persisted projections")
    }

    /// Run the full pipeline: fetch every source, score, aggregate,
    /// reconcile with the cache, and persist the merged table.
    ///
    /// Source failures are non-fatal; each one degrades to zero lines from
    /// that source. The cache is written only when the merged result is
    /// non-empty, and only after the whole computation succeeded, so a run
    /// commits once or not at all. Milestone strings are sent on `progress`;
    /// a dropped receiver is ignored.
    pub async fn run(&self, progress: UnboundedSender<String>) -> Result<RunOutcome> {
        let report = |msg: String| {
            let _ = progress.send(msg);
        };

        report("Loading cached projections...".to_string());
        let persisted = self.load_persisted().await?;

        report(format!("Fetching projections from {} sources...", self.sources.len()));
        let mut lines = Vec::new();
        let mut failed_sources = 0;
        for source in &self.sources {
            match source.fetch().await {
                Ok(batch) => {
                    info!("Source {} returned {} stat lines", source.name(), batch.len());
                    lines.extend(batch);
                }
                Err(e) => {
                    warn!("Source {} failed, continuing without it: {e:#}", source.name());
                    failed_sources += 1;
                }
            }
        }
        if failed_sources > 0 {
            report(format!("{failed_sources} source(s) failed; using remaining data"));
        }

        report(format!("Scoring {} stat lines...", lines.len()));
        let scored: Vec<ScoredLine> = lines.into_iter().map(score_line).collect();

        report("Computing consensus and ranks...".to_string());
        let fresh = aggregate(&scored);
        let merged = reconcile(fresh, persisted.records);

        if merged.is_empty() {
            report("No projection data available".to_string());
            return Ok(RunOutcome::NoData);
        }

        // Records carried over from the cache arrive with last-run ranks;
        // re-rank the merged set so the committed table is coherent.
        let table = PersistedTable::new(rank(merged));
        self.store.save(&table).await.context("Failed to persist merged projections")?;

        report(format!("Loaded {} consensus projections", table.len()));
        Ok(RunOutcome::Completed(table.records))
    }
}
