//! # Scoring
//!
//! This crate holds the league's fixed scoring rubric and the calculator that
//! turns one player's projected stat line into a single fantasy-point value.
//!
//! The rubric is a closed set of rules: flat per-unit coefficients plus a few
//! tiered bonuses where only the highest satisfied threshold counts. There is
//! no rule DSL and no configuration; the coefficients in [`rubric`] are the
//! league's scoring settings, reproduced verbatim.

pub mod calculator;
pub mod rubric;
pub mod types;

pub use calculator::{score, score_line};
pub use types::{DefenseStats, OffenseStats, Position, ScoredLine, StatLine, StatSheet};
