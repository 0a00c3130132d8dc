//! Boundary trait for upstream projection sources.

use anyhow::{Context, Result};
use async_trait::async_trait;
use scoring::StatLine;
use std::path::PathBuf;
use tracing::info;

/// One upstream supplier of raw projection stat lines.
///
/// Implementations live outside the engine (scrapers, API clients); the
/// engine only requires that a source yields an ordered batch of stat lines.
/// An error from `fetch` is not fatal to a run — the engine logs it and
/// proceeds with whatever other sources returned.
#[async_trait]
pub trait ProjectionSource: Send + Sync {
    /// Short human-readable source name for logs and progress messages
    fn name(&self) -> &str;

    /// Fetch one batch of stat lines for the upcoming scoring period
    async fn fetch(&self) -> Result<Vec<StatLine>>;
}

/// Projection source backed by a JSON file containing an array of stat
/// lines. This is the offline stand-in for a live scraper: exported scrape
/// results can be replayed through the full pipeline without network access.
pub struct JsonFileSource {
    name: String,
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

#[async_trait]
impl ProjectionSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<StatLine>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read projection file {:?}", self.path))?;

        let lines: Vec<StatLine> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse projection file {:?}", self.path))?;

        info!("Loaded {} stat lines from {:?}", lines.len(), self.path);
        Ok(lines)
    }
}
