//! Spelling Bee - CLI
//!
//! Generate spelling bee puzzles and play them in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use spelling_bee::{
    commands::{analyze_letters, generate_puzzle, run_benchmark, run_play},
    config::Config,
    game::GameSession,
    generator::BackgroundGenerator,
    output::{print_analysis_result, print_benchmark_result, print_generate_result},
    wordlists::Dictionary,
};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling bee puzzle generator and player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: Config,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Generate one puzzle and describe it
    Generate {
        /// Include every answer
        #[arg(long)]
        reveal: bool,

        /// Print JSON instead of a formatted report
        #[arg(long)]
        json: bool,
    },

    /// Check whether a letter set makes an acceptable puzzle
    Analyze {
        /// The center letter
        center: String,

        /// The six surrounding letters, e.g. "artnos"
        letters: String,
    },

    /// Measure generation latency
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.config);

    let dictionary = cli
        .config
        .wordlist
        .load()
        .with_context(|| format!("cannot load word list '{}'", cli.config.wordlist))?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&cli.config, dictionary),
        Commands::Generate { reveal, json } => {
            run_generate_command(&cli.config, &dictionary, reveal, json)
        }
        Commands::Analyze { center, letters } => {
            run_analyze_command(&center, &letters, &dictionary)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.config, &dictionary, count);
            Ok(())
        }
    }
}

/// Log to stderr so gameplay on stdout stays clean
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_play_command(config: &Config, dictionary: Dictionary) -> Result<()> {
    let generator = BackgroundGenerator::new(Arc::new(dictionary), config.generator());
    let mut session = GameSession::new(generator, config.seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut session, stdin.lock(), &mut stdout).context("play session failed")?;
    Ok(())
}

fn run_generate_command(
    config: &Config,
    dictionary: &Dictionary,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let result = generate_puzzle(dictionary, config.generator(), config.seed, reveal)
        .context("puzzle generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        print_generate_result(&result, reveal);
    }
    Ok(())
}

fn run_analyze_command(center: &str, letters: &str, dictionary: &Dictionary) -> Result<()> {
    let result = analyze_letters(center, letters, dictionary).context("invalid letter set")?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &Config, dictionary: &Dictionary, count: usize) {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    println!(
        "Generating {} puzzles (base seed {})...",
        count.to_string().bright_yellow(),
        base_seed
    );

    let result = run_benchmark(dictionary, config.generator(), count, base_seed, true);
    print_benchmark_result(&result);
}
