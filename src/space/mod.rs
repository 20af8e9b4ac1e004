//! Candidate space management
//!
//! Enumerating every code a configuration admits, memoizing that enumeration
//! across sessions, and pruning a candidate set against observed feedback.

mod cache;
mod filter;
mod generator;

pub use cache::SpaceCache;
pub use filter::filter_candidates;
pub use generator::generate;
