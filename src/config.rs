//! Runtime configuration
//!
//! Options shared by every subcommand. Each can also come from the
//! environment, so a wrapper script can pin a dictionary or attempt cap.

use crate::generator::{DEFAULT_MAX_ATTEMPTS, GeneratorConfig};
use crate::wordlists::{Dictionary, EmbeddedWordSource, FileWordSource, LoadError, WordSource};
use clap::{ArgAction, Args};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistChoice {
    /// The word list compiled into the binary
    Embedded,
    /// One word per line, or CSV with the word first
    File(PathBuf),
}

impl WordlistChoice {
    #[must_use]
    pub fn source(&self) -> Box<dyn WordSource> {
        match self {
            Self::Embedded => Box::new(EmbeddedWordSource),
            Self::File(path) => Box::new(FileWordSource::new(path.clone())),
        }
    }

    /// Load the chosen dictionary
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read or has no usable words.
    pub fn load(&self) -> Result<Dictionary, LoadError> {
        self.source().load()
    }
}

impl FromStr for WordlistChoice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for WordlistChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Global options
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Dictionary: 'embedded' (default) or path to a word list
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "SPELLING_BEE_WORDLIST",
        default_value = "embedded"
    )]
    pub wordlist: WordlistChoice,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Letter sets to try before giving up on a puzzle
    #[arg(
        long,
        global = true,
        env = "SPELLING_BEE_MAX_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    #[must_use]
    pub const fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts: self.max_attempts,
        }
    }

    /// Default log filter for the verbosity level; `RUST_LOG` takes precedence
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
