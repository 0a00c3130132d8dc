//! # Consensus Service
//!
//! The entry point that ties the engine together: fetch stat lines from every
//! configured projection source, score them under the league rubric,
//! aggregate them into a consensus table, reconcile that table with the
//! persisted cache, and commit the result.
//!
//! The pipeline is designed to run on a background task. Progress is reported
//! as human-readable milestone strings over a channel, and completion is an
//! explicit [`RunOutcome`] so "no data anywhere" is distinguishable from a
//! successful run. A run commits its cache write exactly once or not at all;
//! an abandoned run never leaves a partially written table behind.

pub mod engine;
pub mod source;

pub use engine::{ConsensusEngine, RunOutcome};
pub use source::{JsonFileSource, ProjectionSource};
