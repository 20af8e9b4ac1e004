//! Display functions for command results

use super::formatters::{colored_feedback, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, ScenarioResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let n = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.to_string().bold(),
            colored_feedback(step.feedback, n)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        ratio.log2(),
                        ratio
                    );
                }
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved after {} guesses ({})",
                result.guesses.len(),
                result.outcome
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let n = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, n, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);

    println!("\n📈 {}", "Feedback split:".bright_cyan().bold());
    for (feedback, count) in &result.buckets {
        let pct = *count as f64 / result.total_candidates as f64 * 100.0;
        println!(
            "   {:<16} {count:6} ({pct:5.1}%)",
            colored_feedback(*feedback, n).to_string()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_secrets).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    if result.total_secrets == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_secrets as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

/// Print a comparison table of strategies across rule variants
pub fn print_scenario_results(scenarios: &[ScenarioResult]) {
    println!("\n{}", "═".repeat(72).cyan());
    println!(" {} ", "RULE VARIANT COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(72).cyan());

    println!(
        "\n {:<26} {:<10} {:>8} {:>8} {:>6} {:>9}",
        "Rules", "Strategy", "Space", "Average", "Worst", "Time"
    );
    println!(" {}", "─".repeat(70).bright_black());

    for scenario in scenarios {
        let result = &scenario.result;
        println!(
            " {:<26} {:<10} {:>8} {:>8} {:>6} {:>8.2}s",
            scenario.label,
            scenario.strategy,
            scenario.config.space_size(),
            format!("{:.2}", result.average_guesses),
            result.max_guesses,
            result.duration.as_secs_f64()
        );
        if result.solved < result.total_secrets {
            println!(
                "   {}",
                format!(
                    "{} of {} secrets not solved",
                    result.total_secrets - result.solved,
                    result.total_secrets
                )
                .red()
            );
        }
    }
}
