//! Strike/Ball Solver - CLI
//!
//! Code-breaking solver with TUI and CLI modes using information theory.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use strikeball_solver::{
    commands::{
        DEFAULT_MAX_TURNS, SolveConfig, analyze_guess, benchmark_rng, print_test_all_statistics,
        random_secrets, run_all_rules, run_benchmark, run_simple, run_test_all, solve_secret,
    },
    core::{Code, Configuration},
    output::{
        print_analysis_result, print_benchmark_result, print_scenario_results, print_solve_result,
    },
    solver::{SelectorKind, Session},
    space::SpaceCache,
};

#[derive(Parser)]
#[command(
    name = "strikeball_solver",
    about = "Strike/ball code-breaking solver using entropy maximization",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in the code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Allow repeated digits
    #[arg(short, long, global = true)]
    duplicates: bool,

    /// Allow codes starting with 0
    #[arg(short = 'z', long, global = true)]
    leading_zero: bool,

    /// Strategy: entropy (default), frequency
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Console match against a human opponent
    Simple,

    /// Solve a specific secret (random if omitted)
    Solve {
        /// The secret to solve
        secret: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },

    /// Analyze the entropy of a specific guess against the full space
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,

        /// Compare both strategies across all four-digit rule variants
        #[arg(short, long)]
        all_rules: bool,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },
}

impl Cli {
    fn configuration(&self) -> Result<Configuration> {
        Ok(Configuration::new(self.length, self.duplicates, self.leading_zero)?)
    }

    fn selector(&self, config: Configuration) -> Result<SelectorKind> {
        SelectorKind::from_name(&self.strategy, config).ok_or_else(|| {
            anyhow!(
                "unknown strategy '{}' (expected one of: {})",
                self.strategy,
                SelectorKind::NAMES.join(", ")
            )
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.configuration()?;
    let selector = cli.selector(config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(Session::new(config, selector)),
        Commands::Simple => {
            run_simple(Session::new(config, selector))?;
            Ok(())
        }
        Commands::Solve {
            secret,
            verbose,
            max_turns,
        } => run_solve_command(config, selector, secret.as_deref(), verbose, max_turns),
        Commands::Analyze { guess } => run_analyze_command(config, &guess),
        Commands::Benchmark {
            count,
            seed,
            all_rules,
        } => {
            if all_rules {
                run_all_rules_command(count, seed)
            } else {
                run_benchmark_command(config, &selector, count, seed)
            }
        }
        Commands::TestAll { limit, max_turns } => {
            run_test_all_command(config, &selector, limit, max_turns)
        }
    }
}

fn run_solve_command(
    config: Configuration,
    selector: SelectorKind,
    secret: Option<&str>,
    verbose: bool,
    max_turns: usize,
) -> Result<()> {
    let secret = match secret {
        Some(text) => {
            let code = Code::parse(text)
                .with_context(|| format!("invalid secret '{text}'"))?;
            if !config.admits(&code) {
                return Err(anyhow!("secret {code} is not allowed under {config}"));
            }
            code
        }
        None => {
            let space = SpaceCache::global().get(config);
            random_secrets(&space, 1, &mut benchmark_rng(None))
                .pop()
                .context("no secrets to choose from")?
        }
    };

    let mut solve_config = SolveConfig::new(secret);
    solve_config.max_turns = max_turns;

    let result = solve_secret(solve_config, Session::new(config, selector))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: Configuration, guess: &str) -> Result<()> {
    let space = SpaceCache::global().get(config);
    let result = analyze_guess(guess, config, &space)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    config: Configuration,
    selector: &SelectorKind,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "Running {} benchmark on {count} random secrets ({config})...",
        selector.name()
    );

    let cache = SpaceCache::global();
    let secrets = random_secrets(&cache.get(config), count, &mut benchmark_rng(seed));

    let result = run_benchmark(config, selector, &secrets, DEFAULT_MAX_TURNS, cache)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_all_rules_command(count: usize, seed: Option<u64>) -> Result<()> {
    println!("Running {count} games per strategy under every four-digit rule variant...");

    let scenarios = run_all_rules(count, &mut benchmark_rng(seed), SpaceCache::global())?;
    print_scenario_results(&scenarios);
    Ok(())
}

fn run_test_all_command(
    config: Configuration,
    selector: &SelectorKind,
    limit: Option<usize>,
    max_turns: usize,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Strike/Ball Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets", config.space_size());
    println!("Rules: {config}");
    println!("Strategy: {}", selector.name());
    println!();

    let stats = run_test_all(config, selector, limit, max_turns, SpaceCache::global())?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(session: Session<SelectorKind>) -> Result<()> {
    use strikeball_solver::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
