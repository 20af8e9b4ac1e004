//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{
    BenchmarkResult, RULE_VARIANTS, ScenarioResult, benchmark_rng, random_secrets, run_all_rules,
    run_benchmark,
};
pub use simple::{MatchOutcome, run_simple};
pub use solve::{DEFAULT_MAX_TURNS, GuessStep, SolveConfig, SolveResult, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
