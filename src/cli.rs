use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use countdown_solver::puzzle::{Puzzle, PuzzleConfig};
use countdown_solver::solver::constants::DEFAULT_MAX_CALLS;
use countdown_solver::utils::{validate_numbers, validate_target};
use countdown_solver::{SearchState, Solution, Solver, SolverConfig};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Reach a target by combining numbers with + - * /
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find a sequence of arithmetic operations combining numbers into a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers available for combination
    pub numbers: Vec<u64>,

    /// Target value to reach
    #[arg(
        short,
        long,
        required_unless_present = "random",
        conflicts_with_all = ["large", "seed"]
    )]
    pub target: Option<u64>,

    /// Draw a random puzzle instead of reading numbers and target
    #[arg(short, long, conflicts_with_all = ["numbers", "target"])]
    pub random: bool,

    /// Large numbers in a random puzzle (0-4, random 1-4 when omitted)
    #[arg(long)]
    pub large: Option<usize>,

    /// Seed for the random puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of operation attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_CALLS)]
    pub max_calls: u64,

    /// Explore top-level branches on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub puzzle: Puzzle,
    pub generated: bool,
    pub max_calls: u64,
    pub parallel: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let puzzle = if args.random {
        match args.seed {
            Some(seed) => random_puzzle(args.large, &mut StdRng::seed_from_u64(seed))?,
            None => random_puzzle(args.large, &mut rand::rng())?,
        }
    } else {
        let Some(target) = args.target else {
            bail!("A target is required unless --random is given");
        };
        validate_numbers(&args.numbers).context("Invalid numbers")?;
        validate_target(target).context("Invalid target")?;
        Puzzle {
            numbers: args.numbers,
            target,
        }
    };

    Ok(CliConfig {
        puzzle,
        generated: args.random,
        max_calls: args.max_calls,
        parallel: args.parallel,
        log_level: args.log_level,
    })
}

fn random_puzzle<R: Rng>(large: Option<usize>, rng: &mut R) -> Result<Puzzle> {
    let config = match large {
        Some(count) => PuzzleConfig::new(count).context("Invalid large number count")?,
        None => PuzzleConfig::random(rng),
    };
    Ok(Puzzle::generate(config, rng))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Write the operation trace and search statistics for `solution`.
pub fn write_report<W: Write>(out: &mut W, puzzle: &Puzzle, solution: &Solution) -> Result<()> {
    let node = &solution.node;

    if solution.found_exact() && node.steps().is_empty() {
        writeln!(
            out,
            "Trivial solution found: {} is in the numbers.",
            puzzle.target
        )?;
        writeln!(out, "Total operation calls: 0")?;
        return Ok(());
    }

    if solution.found_exact() {
        writeln!(out, "\nSolution found, with operations:")?;
    } else {
        writeln!(
            out,
            "\nClosest number found: {} with operations:",
            node.value()
        )?;
    }
    if !node.steps().is_empty() {
        writeln!(out, "{}", node)?;
    }
    if solution.state == SearchState::BudgetExhausted {
        writeln!(out, "Search stopped early: operation budget exhausted.")?;
    }

    let stats = &solution.stats;
    writeln!(out, "\nOperation calls: {}", stats.attempts)?;
    writeln!(
        out,
        "Search time: {:.3} seconds",
        stats.elapsed.as_secs_f64()
    )?;
    writeln!(out, "Cached operations: {}", stats.cache_size)?;
    writeln!(out, "Cache hits: {}", stats.cache_hits)?;
    if let Some((key, count)) = stats.most_common_operation {
        writeln!(out, "{} -> called {} times", key, count)?;
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let puzzle = &config.puzzle;
    if config.generated {
        println!("Numbers drawn: {:?}", puzzle.numbers);
        println!("Target number: {}", puzzle.target);
    }

    info!(
        "Solving {:?} -> {} ({})",
        puzzle.numbers,
        puzzle.target,
        if config.parallel {
            "parallel"
        } else {
            "sequential"
        }
    );

    let solver = Solver::new(SolverConfig::with_max_calls(config.max_calls));
    let solution = if config.parallel {
        solver.solve_parallel(&puzzle.numbers, puzzle.target)
    } else {
        solver.solve(&puzzle.numbers, puzzle.target)
    }
    .context("Failed to solve puzzle")?;

    if !solution.found_exact() {
        warn!("No exact solution found");
    }

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, puzzle, &solution).context("Failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("countdown").chain(argv.iter().copied()))
    }

    fn report(puzzle: &Puzzle, solution: &Solution) -> String {
        let mut buffer = Vec::new();
        assert!(write_report(&mut buffer, puzzle, solution).is_ok());
        String::from_utf8(buffer).unwrap_or_default()
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = args(&["100", "25", "1", "4", "2", "5", "--target", "950"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.numbers, vec![100, 25, 1, 4, 2, 5]);
            assert_eq!(parsed.target, Some(950));
            assert_eq!(parsed.max_calls, DEFAULT_MAX_CALLS);
            assert!(!parsed.parallel);
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_target_required_without_random() {
        assert!(args(&["1", "2"]).is_err());
        assert!(args(&["--random"]).is_ok());
        assert!(args(&["--random", "--target", "5"]).is_err());
        assert!(args(&["1", "2", "-t", "3", "--seed", "4"]).is_err());
    }

    #[test]
    fn test_puzzle_options_need_random() {
        assert!(args(&["1", "2", "-t", "3", "--large", "2"]).is_err());
        assert!(args(&["1", "2", "-t", "3", "--large", "9"]).is_err());
        assert!(args(&["1", "2", "--seed", "4"]).is_err());
        assert!(args(&["--random", "--large", "2", "--seed", "4"]).is_ok());
    }

    #[test]
    fn test_config_from_random_args_is_seeded() {
        let first = args(&["--random", "--large", "2", "--seed", "11"])
            .map_err(anyhow::Error::from)
            .and_then(config_from_args);
        let second = args(&["--random", "--large", "2", "--seed", "11"])
            .map_err(anyhow::Error::from)
            .and_then(config_from_args);
        assert!(first.is_ok());
        assert!(second.is_ok());
        if let (Ok(first), Ok(second)) = (first, second) {
            assert!(first.generated);
            assert_eq!(first.puzzle, second.puzzle);
            assert_eq!(first.puzzle.numbers.len(), 6);
        } else {
            panic!("seeded random puzzle failed");
        }
    }

    #[test]
    fn test_config_rejects_bad_input() {
        let zero = args(&["4", "0", "-t", "10"])
            .map_err(anyhow::Error::from)
            .and_then(config_from_args);
        assert!(zero.is_err());

        let large = args(&["--random", "--large", "5"])
            .map_err(anyhow::Error::from)
            .and_then(config_from_args);
        assert!(large.is_err());
    }

    #[test]
    fn test_report_trivial() {
        let puzzle = Puzzle {
            numbers: vec![25, 50, 75, 100, 3, 7],
            target: 50,
        };
        let solution = Solver::default().solve(&puzzle.numbers, puzzle.target);
        assert!(solution.is_ok());
        if let Ok(solution) = solution {
            let text = report(&puzzle, &solution);
            assert!(text.starts_with("Trivial solution found: 50 is in the numbers."));
        }
    }

    #[test]
    fn test_report_solution_and_stats() {
        let puzzle = Puzzle {
            numbers: vec![3, 9],
            target: 6,
        };
        let solution = Solver::default().solve(&puzzle.numbers, puzzle.target);
        assert!(solution.is_ok());
        if let Ok(solution) = solution {
            let text = report(&puzzle, &solution);
            assert!(text.contains("Solution found, with operations:"));
            assert!(text.contains("Step 1: 9 - 3 = 6"));
            assert!(text.contains("Operation calls: 3"));
            assert!(text.contains("Cached operations: 3"));
            assert!(text.contains("Cache hits: 0"));
            assert!(text.contains("9 * 3 -> called 1 times"));
        }
    }

    #[test]
    fn test_report_closest() {
        let puzzle = Puzzle {
            numbers: vec![2, 3, 5],
            target: 1000,
        };
        let solution = Solver::default().solve(&puzzle.numbers, puzzle.target);
        assert!(solution.is_ok());
        if let Ok(solution) = solution {
            let text = report(&puzzle, &solution);
            assert!(text.contains("Closest number found: 30 with operations:"));
            assert!(!text.contains("budget exhausted"));
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
