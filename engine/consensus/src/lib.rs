//! # Consensus
//!
//! This crate reconciles scored projections contributed by multiple
//! independent sources into one consensus row per player: the mean point
//! value, a floor/ceiling band from the 10th and 90th percentiles of the
//! contributing samples, and overall plus positional ranks.
//!
//! Aggregation is a deterministic in-memory computation with no I/O and no
//! error path; an empty input simply yields an empty output.

pub mod aggregate;
pub mod types;

pub use aggregate::{aggregate, rank};
pub use types::ConsensusRecord;
