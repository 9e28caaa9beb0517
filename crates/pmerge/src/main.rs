//! pmerge - merge-insertion sort over two sequence realizations
//!
//! Usage:
//!   pmerge [options] <positive integer>...

mod input;
mod report;
mod timing;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use merge_insertion::{
    LinkedChain, Representation, SortStats, VecChain, merge_insertion_sort, representation_name,
};

#[derive(Parser, Debug)]
#[command(name = "pmerge")]
#[command(about = "Sort distinct unsigned integers with Ford–Johnson merge-insertion")]
struct Cli {
    /// Values to sort: distinct non-negative integers that fit in 64 bits
    #[arg(required = true, allow_hyphen_values = true, value_name = "VALUE")]
    values: Vec<String>,

    /// Which sequence realizations to run
    #[arg(long, value_enum, default_value_t = ReprChoice::Both)]
    repr: ReprChoice,

    /// Check that every realization produced the same non-decreasing output
    #[arg(long)]
    validate: bool,

    /// Print the number of element comparisons per realization
    #[arg(long)]
    stats: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReprChoice {
    Both,
    Vec,
    Linked,
}

impl ReprChoice {
    fn representations(self) -> &'static [Representation] {
        match self {
            Self::Both => merge_insertion::all_representations(),
            Self::Vec => &[Representation::Contiguous],
            Self::Linked => &[Representation::Linked],
        }
    }
}

struct Run {
    repr: Representation,
    sorted: Vec<u64>,
    stats: SortStats,
    elapsed: Duration,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let values = input::parse_values(&cli.values)?;
    println!("{}", report::values_line("Before: ", &values));

    let runs = cli
        .repr
        .representations()
        .iter()
        .map(|&repr| run_once(repr, &values))
        .collect::<Result<Vec<_>>>()?;

    if cli.validate {
        validate(&runs)?;
    }

    if let Some(first) = runs.first() {
        println!("{}", report::values_line("After:  ", &first.sorted));
    }
    for run in &runs {
        let name = representation_name(run.repr);
        println!("{}", report::timing_line(values.len(), name, run.elapsed));
        if cli.stats {
            println!("{}", report::comparisons_line(name, run.stats.comparisons));
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Loads `values` into the realization and times only the sort call itself.
fn run_once(repr: Representation, values: &[u64]) -> Result<Run> {
    let name = representation_name(repr);
    let (sorted, stats, elapsed) = match repr {
        Representation::Contiguous => {
            let mut chain = VecChain::from(values.to_vec());
            let (stats, elapsed) = timing::measure(|| merge_insertion_sort(&mut chain))
                .with_context(|| format!("failed to read the CPU clock around {name}"))?;
            (chain.into_vec(), stats, elapsed)
        }
        Representation::Linked => {
            let mut chain = LinkedChain::from(values);
            let (stats, elapsed) = timing::measure(|| merge_insertion_sort(&mut chain))
                .with_context(|| format!("failed to read the CPU clock around {name}"))?;
            (chain.to_vec(), stats, elapsed)
        }
    };
    info!(
        "{name}: {} elements, {} comparisons, {} reinserted units over {} levels",
        values.len(),
        stats.comparisons,
        stats.reinserted_units,
        stats.levels
    );
    Ok(Run {
        repr,
        sorted,
        stats,
        elapsed,
    })
}

fn validate(runs: &[Run]) -> Result<()> {
    let Some((first, rest)) = runs.split_first() else {
        return Ok(());
    };
    for run in runs {
        if let Some(pair) = run.sorted.windows(2).find(|w| w[0] > w[1]) {
            bail!(
                "{} failed ({} > {})",
                representation_name(run.repr),
                pair[0],
                pair[1]
            );
        }
    }
    for run in rest {
        if run.sorted != first.sorted {
            bail!(
                "{} and {} disagree",
                representation_name(first.repr),
                representation_name(run.repr)
            );
        }
    }
    info!("validated {} realization(s)", runs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn run(repr: Representation, sorted: Vec<u64>) -> Run {
        Run {
            repr,
            sorted,
            stats: SortStats::default(),
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_options_and_values() {
        let cli = Cli::try_parse_from(["pmerge", "--repr", "linked", "--stats", "-vv", "3", "1"])
            .unwrap();
        assert_eq!(cli.repr, ReprChoice::Linked);
        assert!(cli.stats);
        assert!(!cli.validate);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.values, vec!["3", "1"]);
    }

    #[test]
    fn requires_at_least_one_value() {
        assert!(Cli::try_parse_from(["pmerge"]).is_err());
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let cli = Cli::try_parse_from(["pmerge", "-5"]).unwrap();
        assert!(matches!(
            input::parse_values(&cli.values),
            Err(input::InputError::NotANumber(_))
        ));
    }

    #[test]
    fn both_realizations_sort_the_same() {
        let values = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let runs = ReprChoice::Both
            .representations()
            .iter()
            .map(|&repr| run_once(repr, &values).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(runs.len(), 2);
        for r in &runs {
            assert_eq!(r.sorted, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        }
        assert_eq!(runs[0].stats, runs[1].stats);
        assert!(validate(&runs).is_ok());
    }

    #[test]
    fn validate_reports_failures() {
        let unsorted = [run(Representation::Contiguous, vec![1, 3, 2])];
        assert!(validate(&unsorted).is_err());

        let disagree = [
            run(Representation::Contiguous, vec![1, 2, 3]),
            run(Representation::Linked, vec![1, 2, 4]),
        ];
        assert!(validate(&disagree).is_err());
        assert!(validate(&[]).is_ok());
    }
}
