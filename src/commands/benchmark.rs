//! Benchmark command
//!
//! Tests solver performance across randomly drawn secrets, for one rule set or
//! for every four-digit rule variant.

use super::solve::DEFAULT_MAX_TURNS;
use crate::core::{Code, Configuration};
use crate::error::SolverError;
use crate::solver::{Selector, SelectorKind, Session};
use crate::space::SpaceCache;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// The four rule variants of the four-digit game, with display names
pub const RULE_VARIANTS: [(&str, bool, bool); 4] = [
    ("standard", false, false),
    ("leading zero", false, true),
    ("duplicates", true, false),
    ("duplicates + leading zero", true, true),
];

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Benchmark of one strategy under one rule variant
pub struct ScenarioResult {
    pub label: &'static str,
    pub config: Configuration,
    pub strategy: &'static str,
    pub result: BenchmarkResult,
}

/// Draw `count` secrets from `space`, with replacement
pub fn random_secrets<R: Rng + ?Sized>(space: &[Code], count: usize, rng: &mut R) -> Vec<Code> {
    (0..count)
        .filter_map(|_| space.choose(&mut *rng).copied())
        .collect()
}

/// Random number generator, reproducible when a seed is given
#[must_use]
pub fn benchmark_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Run benchmark on a set of secrets
///
/// Every secret gets a fresh session with a clone of `selector`, limited to
/// `max_turns` guesses; failures count towards the totals with the guesses
/// they used.
///
/// # Errors
/// Returns an error if a secret does not fit `config`.
pub fn run_benchmark<S: Selector + Clone>(
    config: Configuration,
    selector: &S,
    secrets: &[Code],
    max_turns: usize,
    cache: &SpaceCache,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for secret in secrets {
        let mut session = Session::with_cache(config, selector.clone(), cache)
            .with_turn_budget(max_turns);
        let state = session.solve(secret)?;
        let guesses = session.history().len();

        if state.is_solved() {
            solved += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    Ok(BenchmarkResult {
        total_secrets,
        solved,
        total_guesses,
        average_guesses: if total_secrets > 0 {
            total_guesses as f64 / total_secrets as f64
        } else {
            0.0
        },
        min_guesses: if total_secrets > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Benchmark both strategies under every four-digit rule variant
///
/// Each variant draws its own `count` secrets; both strategies play the same
/// secrets.
///
/// # Errors
/// Propagates configuration and session errors.
pub fn run_all_rules<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    cache: &SpaceCache,
) -> Result<Vec<ScenarioResult>, SolverError> {
    let mut scenarios = Vec::with_capacity(RULE_VARIANTS.len() * SelectorKind::NAMES.len());

    for (label, allow_duplicates, allow_leading_zero) in RULE_VARIANTS {
        let config = Configuration::new(4, allow_duplicates, allow_leading_zero)?;
        let secrets = random_secrets(&cache.get(config), count, rng);

        for name in SelectorKind::NAMES {
            let Some(selector) = SelectorKind::from_name(name, config) else {
                continue;
            };
            let result = run_benchmark(config, &selector, &secrets, DEFAULT_MAX_TURNS, cache)?;
            scenarios.push(ScenarioResult {
                label,
                config,
                strategy: selector.name(),
                result,
            });
        }
    }

    Ok(scenarios)
}
