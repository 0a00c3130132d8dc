//! # Projection Cache
//!
//! Durable storage for the most recent consensus projection table, plus the
//! reconciliation policy that merges a fresh fetch with previously persisted
//! data.
//!
//! The policy is fresh-wins: a failed or empty fetch never destroys the
//! existing cache, and for any player identity present in both inputs the
//! freshly fetched record replaces the stale one. The table on disk is a
//! single JSON document, always rewritten wholesale via a temp-file rename so
//! a run either commits a complete table or leaves the old one untouched.

pub mod error;
pub mod reconcile;
pub mod store;
pub mod table;

pub use error::{CacheError, Result};
pub use reconcile::reconcile;
pub use store::ProjectionStore;
pub use table::PersistedTable;
