mod logger;

use anyhow::Context as _;
use clap::Parser;
use owo_colors::OwoColorize;

use dice_odds_core::{self as core, DiceSpec, OutcomeTable, RankedList, Seed};

// above this many outcomes the exact calculation is noticeably slow
const SLOW_OUTCOMES: u64 = 50_000_000;

#[derive(Debug, Parser)]
#[command(about = "Probability of every sum when rolling dice")]
struct Args {
    /// Log more details to stderr, repeat for even more
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of decimals to print percentages with
    #[arg(long, short, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Calculate the exact probability of every sum
    Calc {
        /// The dice to throw, such as 3d6
        dice: DiceSpec,

        #[command(flatten)]
        ranking: RankingArgs,
    },

    /// Estimate the probability of every sum by simulating throws
    Est {
        /// The dice to throw, such as 3d6
        dice: DiceSpec,

        #[command(flatten)]
        sampling: SamplingArgs,

        #[command(flatten)]
        ranking: RankingArgs,
    },

    /// Probability of a sum between LOWER and UPPER (inclusive)
    Range {
        /// The dice to throw, such as 3d6
        dice: DiceSpec,

        lower: u32,

        upper: u32,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Expected (mean) sum
    Mean {
        /// The dice to throw, such as 3d6
        dice: DiceSpec,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Credit weighted average of grades
    Average {
        /// Grades, comma separated; entries that aren't whole numbers are skipped
        #[arg(long, required = true, value_delimiter = ',')]
        grades: Vec<String>,

        /// Credits for each of the grades, in the same order
        #[arg(long, required = true, value_delimiter = ',')]
        credits: Vec<String>,
    },
}

#[derive(Debug, clap::Args)]
struct RankingArgs {
    /// Only show this many of the most likely sums (least likely with --ascending)
    #[arg(long, short)]
    limit: Option<usize>,

    /// Show the lowest first
    #[arg(long, short)]
    ascending: bool,

    /// Order by sum instead of by probability
    #[arg(long, short)]
    by_sum: bool,
}

impl From<RankingArgs> for core::Selection {
    fn from(args: RankingArgs) -> Self {
        core::Selection {
            limit: args.limit,
            ascending: args.ascending,
            by_sum: args.by_sum,
        }
    }
}

#[derive(Debug, clap::Args)]
struct SamplingArgs {
    /// Number of throws to simulate
    #[arg(long, short, default_value_t = 1_000_000)]
    trials: u64,

    /// Seed for the simulation, random when omitted
    #[arg(long, short)]
    seed: Option<Seed>,
}

#[derive(Debug, clap::Args)]
struct SourceArgs {
    /// Simulate throws instead of calculating exactly
    #[arg(long, short)]
    estimate: bool,

    #[command(flatten)]
    sampling: SamplingArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose).context("Failed to set up logging")?;

    let out = Output {
        precision: args.precision,
    };

    match args.command {
        Command::Calc { dice, ranking } => {
            let table = exact(dice)?;
            out.heading(format_args!(
                "Here are the probabilities of getting each number when throwing {dice}:"
            ));
            out.ranked(&core::select(&table, ranking.into())?);
        }
        Command::Est {
            dice,
            sampling,
            ranking,
        } => {
            let trials = sampling.trials;
            let table = estimated(dice, sampling)?;
            out.heading(format_args!(
                "Having thrown {dice} {trials} times, here are the estimated probabilities of \
                 getting each number:"
            ));
            out.ranked(&core::select(&table, ranking.into())?);
        }
        Command::Range {
            dice,
            lower,
            upper,
            source,
        } => {
            if lower > upper {
                log::warn!("The range {lower} to {upper} is empty");
            }
            let table = source.table(dice)?;
            let probability = core::range_probability(&table, lower, upper);
            out.heading(format_args!(
                "The probability of getting a number between {lower} and {upper} by throwing \
                 {dice} is:"
            ));
            out.percentage(probability);
        }
        Command::Mean { dice, source } => {
            let table = source.table(dice)?;
            let mean = core::expected_value(&table);
            out.heading(format_args!("The expected sum when throwing {dice} is:"));
            out.number(mean);
        }
        Command::Average { grades, credits } => {
            let average = core::weighted_average(&grades, &credits)?;
            let earned = core::total_credits(&credits);
            println!(
                "You have taken {} courses and earned {earned} credit units so far.",
                grades.len()
            );
            out.heading(format_args!("Your overall weighted average is:"));
            out.number(average);
        }
    }

    Ok(())
}

impl SourceArgs {
    fn table(self, dice: DiceSpec) -> anyhow::Result<OutcomeTable> {
        if self.estimate {
            estimated(dice, self.sampling)
        } else {
            exact(dice)
        }
    }
}

fn exact(dice: DiceSpec) -> anyhow::Result<OutcomeTable> {
    let outcomes = dice.outcomes()?;
    if outcomes > SLOW_OUTCOMES {
        log::warn!("{dice} has {outcomes} outcomes to go through, consider `est` instead");
    } else {
        log::info!("{dice} has {outcomes} outcomes");
    }

    let mut progress = logger::ProgressLog::new("calculation");
    let table = core::enumerate_exact(dice, &mut progress)
        .with_context(|| format!("Failed to calculate the probabilities of {dice}"))?;
    Ok(table)
}

fn estimated(dice: DiceSpec, sampling: SamplingArgs) -> anyhow::Result<OutcomeTable> {
    let mut rng = core::Rng::with_seed(sampling.seed);
    log::info!("Simulating with seed {}", rng.initial_seed);

    let mut progress = logger::ProgressLog::new("simulation");
    let table = core::estimate(dice, sampling.trials, &mut rng, &mut progress)
        .with_context(|| format!("Failed to estimate the probabilities of {dice}"))?;
    Ok(table)
}

struct Output {
    precision: Option<usize>,
}

impl Output {
    fn heading(&self, text: std::fmt::Arguments) {
        println!("{}", text.bold());
    }

    fn ranked(&self, ranked: &RankedList<u32, f64>) {
        match self.precision {
            Some(precision) => print!("{ranked:.precision$}"),
            None => print!("{ranked}"),
        }
    }

    fn percentage(&self, value: f64) {
        match self.precision {
            Some(precision) => println!("{value:.precision$}%"),
            None => println!("{value}%"),
        }
    }

    fn number(&self, value: f64) {
        match self.precision {
            Some(precision) => println!("{value:.precision$}"),
            None => println!("{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("dice-odds").chain(args.iter().copied()))
    }

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn calc_with_ranking() {
        let args = parse(&["calc", "3d6", "--limit", "3", "--ascending", "--by-sum"]).unwrap();
        let Command::Calc { dice, ranking } = args.command else {
            panic!("expected calc");
        };
        assert_eq!(dice, DiceSpec::new(6, 3).unwrap());
        assert_eq!(
            core::Selection::from(ranking),
            core::Selection {
                limit: Some(3),
                ascending: true,
                by_sum: true,
            }
        );
    }

    #[test]
    fn est_defaults() {
        let args = parse(&["est", "2d6"]).unwrap();
        let Command::Est { sampling, ranking, .. } = args.command else {
            panic!("expected est");
        };
        assert_eq!(sampling.trials, 1_000_000);
        assert_eq!(sampling.seed, None);
        assert_eq!(core::Selection::from(ranking), core::Selection::default());
    }

    #[test]
    fn range_with_estimate() {
        let args = parse(&["range", "2d6", "7", "9", "-e", "-t", "500", "-s", "4"]).unwrap();
        let Command::Range {
            lower,
            upper,
            source,
            ..
        } = args.command
        else {
            panic!("expected range");
        };
        assert_eq!((lower, upper), (7, 9));
        assert!(source.estimate);
        assert_eq!(source.sampling.trials, 500);
        assert_eq!(source.sampling.seed, Some(4));
    }

    #[test]
    fn average_splits_on_commas() {
        let args = parse(&["average", "--grades", "80,90,P", "--credits", "3,6,3"]).unwrap();
        let Command::Average { grades, credits } = args.command else {
            panic!("expected average");
        };
        assert_eq!(grades, vec!["80", "90", "P"]);
        assert_eq!(credits, vec!["3", "6", "3"]);
    }

    #[test]
    fn verbosity_is_global() {
        let args = parse(&["mean", "1d20", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test_case(&["calc", "3x6"]; "bad notation")]
    #[test_case(&["calc", "0d6"]; "no dice")]
    #[test_case(&["calc"]; "missing dice")]
    #[test_case(&["range", "2d6", "7"]; "missing upper bound")]
    #[test_case(&["est", "2d6", "--trials", "-5"]; "negative trials")]
    #[test_case(&["average", "--grades", "80"]; "missing credits")]
    fn rejects(args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn range_on_exact_table() {
        let args = parse(&["range", "2d6", "7", "9"]).unwrap();
        let Command::Range {
            dice,
            lower,
            upper,
            source,
        } = args.command
        else {
            panic!("expected range");
        };
        let table = source.table(dice).unwrap();
        let probability = core::range_probability(&table, lower, upper);
        // 6 + 5 + 4 of the 36 outcomes
        assert!((probability - 15. / 36. * 100.).abs() < 1e-9);
    }
}
