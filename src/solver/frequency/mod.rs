//! Positional frequency heuristic
//!
//! A cheap alternative to the entropy scan: score each candidate by how
//! common its digits are at their positions across the remaining set.

mod calculator;
mod selector;

pub use calculator::PositionHistogram;
pub use selector::{FrequencySelector, select_most_frequent};
