//! Command line front end: load a file, stdin, typed text or a random
//! message, and print its entropy report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;

use shannon::analysis::{self, Analysis, InputMode};
use shannon::config::{AnalysisConfig, EntropyConfig};
use shannon::generate::Generator;
use shannon::logging;
use shannon::preprocess::TextFilter;

#[derive(Parser, Debug)]
#[command(
    name = "shannon",
    version,
    about = "Calculate the Shannon entropy of text or binary content",
    long_about = "Counts the letters of a message (typed text, a file, stdin or a random \
                  sequence) and reports its Shannon self-information. Files are decoded as \
                  text when a strict encoding check passes and counted as raw bytes otherwise."
)]
struct Cli {
    /// File to analyse; `-` or nothing reads stdin
    #[arg(value_name = "FILE", conflicts_with_all = ["text", "coins", "dice"])]
    file: Option<PathBuf>,

    /// Analyse this text instead of a file
    #[arg(long, short = 't', value_name = "TEXT", conflicts_with_all = ["coins", "dice"])]
    text: Option<String>,

    /// Analyse N random coin tosses (H/T)
    #[arg(long, value_name = "N", conflicts_with = "dice")]
    coins: Option<usize>,

    /// Analyse N random dice rolls (1-6)
    #[arg(long, value_name = "N")]
    dice: Option<usize>,

    /// Seed for --coins/--dice
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Count raw bytes even when the content is text
    #[arg(long, short = 'b')]
    binary: bool,

    /// Logarithm base; 1 or less means nats, values above 255 are clamped
    #[arg(long, value_name = "N", default_value_t = 2, allow_negative_numbers = true)]
    base: i32,

    /// Use the natural logarithm (overrides --base)
    #[arg(long)]
    nats: bool,

    /// Report metric entropy (entropy divided by message length)
    #[arg(long, short = 'm')]
    metric: bool,

    /// Lowercase text before counting
    #[arg(long, short = 'i')]
    ignore_case: bool,

    /// Drop all whitespace from text before counting
    #[arg(long, short = 's')]
    ignore_space: bool,

    /// Collapse whitespace runs in text to their first char
    #[arg(long, short = 'c')]
    collapse_space: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            entropy: EntropyConfig {
                log_base: if self.nats { 0 } else { self.base },
                metric_entropy: self.metric,
            },
            filter: TextFilter {
                ignore_case: self.ignore_case,
                ignore_whitespace: self.ignore_space,
                collapse_whitespace: self.collapse_space,
            },
            ..AnalysisConfig::default()
        }
    }

    fn mode(&self) -> InputMode {
        if self.binary {
            InputMode::Binary
        } else {
            InputMode::Text
        }
    }

    fn generator(&self) -> Option<(Generator, usize)> {
        match (self.coins, self.dice) {
            (Some(n), _) => Some((Generator::Coins, n)),
            (_, Some(n)) => Some((Generator::Dice, n)),
            _ => None,
        }
    }
}

fn run(cli: &Cli) -> Result<Analysis> {
    let cfg = cli.config();

    if let Some(text) = &cli.text {
        return Ok(analysis::analyze_message(text, "<text>", &cfg));
    }

    if let Some((generator, count)) = cli.generator() {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let message = generator.generate(count, &mut rng);
        let label = format!("<{} x{}>", generator, count);
        return Ok(analysis::analyze_message(&message, &label, &cfg));
    }

    match &cli.file {
        Some(path) if path.as_os_str() != "-" => analysis::analyze_path(path, cli.mode(), &cfg)
            .with_context(|| format!("Failed to analyse {}", path.display())),
        _ => {
            let stdin = std::io::stdin().lock();
            analysis::analyze_reader(stdin, "<stdin>", cli.mode(), &cfg)
                .context("Failed to read stdin")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    if cli.log_json {
        logging::init_tracing_json(level);
    } else {
        logging::init_tracing(level);
    }

    let analysis = run(&cli)?;

    if cli.json {
        println!("{}", analysis.to_json_string()?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}
