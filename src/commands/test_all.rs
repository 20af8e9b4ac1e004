//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code the configuration admits and generates
//! statistics.

use crate::core::{Code, Configuration};
use crate::error::SolverError;
use crate::output::formatters::progress_bar;
use crate::solver::{Selector, Session};
use crate::space::SpaceCache;
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub config: Configuration,
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_secret: Option<(Code, usize)>,
    pub worst_secrets: Vec<(Code, usize)>,
    pub first_guess_used: FxHashMap<Code, usize>,
}

/// Run the solver on every secret of `config` (or the first `limit`)
///
/// # Errors
/// Propagates session errors; none occur for secrets drawn from the space.
pub fn run_test_all<S: Selector + Clone>(
    config: Configuration,
    selector: &S,
    limit: Option<usize>,
    max_turns: usize,
    cache: &SpaceCache,
) -> Result<TestAllStatistics, SolverError> {
    let space = cache.get(config);
    let secrets = &space[..limit.unwrap_or(space.len()).min(space.len())];

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = progress_bar(secrets.len() as u64);

    let mut results: Vec<SecretTestResult> = Vec::with_capacity(secrets.len());
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_guess_used: FxHashMap<Code, usize> = FxHashMap::default();

    let total_start = Instant::now();

    for (idx, secret) in secrets.iter().enumerate() {
        let secret_start = Instant::now();
        let mut session = Session::with_cache(config, selector.clone(), cache)
            .with_turn_budget(max_turns);
        let success = session.solve(secret)?.is_solved();
        let guesses: Vec<Code> = session.history().iter().map(|turn| turn.guess).collect();

        if let Some(&first) = guesses.first() {
            *first_guess_used.entry(first).or_insert(0) += 1;
        }
        if success {
            *guess_distribution.entry(guesses.len()).or_insert(0) += 1;
        }

        results.push(SecretTestResult {
            secret: *secret,
            guesses,
            success,
            duration: secret_start.elapsed(),
        });

        if idx % 50 == 0 {
            let avg = results.iter().map(|r| r.guesses.len()).sum::<usize>() as f64
                / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(
        config,
        &results,
        guess_distribution,
        first_guess_used,
        total_start.elapsed(),
    ))
}

fn summarize(
    config: Configuration,
    results: &[SecretTestResult],
    guess_distribution: FxHashMap<usize, usize>,
    first_guess_used: FxHashMap<Code, usize>,
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let total_guesses: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let max_guesses = solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0);

    let best_secret = solved
        .iter()
        .min_by_key(|r| r.guesses.len())
        .map(|r| (r.secret, r.guesses.len()));

    // Anything within one guess of the worst case
    let mut worst_secrets: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.guesses.len() + 1 >= max_guesses)
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    worst_secrets.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    worst_secrets.truncate(10);

    TestAllStatistics {
        config,
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        best_secret,
        worst_secrets,
        first_guess_used,
    }
}

/// Print test-all statistics
#[allow(clippy::too_many_lines)] // Comprehensive output formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({}) ", stats.config);
    println!("{}", "═".repeat(70));

    if stats.total_secrets == 0 {
        println!("\nNo secrets tested.");
        return;
    }

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / stats.total_secrets as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let distribution = &stats.guess_distribution;
    let max_count = distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    // Information theory metrics
    println!("\n🧮 Information Theory Metrics");
    let total_bits = (stats.config.space_size() as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Total information:    {total_bits:.2} bits");
    println!("  Bits per guess:       {bits_per_guess:.2} bits");

    // Best and worst cases
    if let Some((secret, guesses)) = &stats.best_secret {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            secret.to_string().bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({} guesses)", secret.to_string().yellow(), guesses);
        }
    }

    // First guess analysis
    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(Code, usize)> = stats
        .first_guess_used
        .iter()
        .map(|(&code, &count)| (code, count))
        .collect();
    first_guesses.sort_by_key(|&(code, count)| (std::cmp::Reverse(count), code));

    for (code, count) in first_guesses.iter().take(5) {
        let percentage = *count as f64 / stats.total_secrets as f64 * 100.0;
        println!("  {code}: {count} times ({percentage:.1}%)");
    }
}
