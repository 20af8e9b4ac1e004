//! Entropy-based guess selection
//!
//! Implements Shannon entropy calculation for strike/ball feedback
//! distributions. This is the information-theoretic strategy.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, feedback_distribution, shannon_entropy,
};
pub use selector::{DEFAULT_SCAN_THRESHOLD, EntropySelector, select_best_guess};
