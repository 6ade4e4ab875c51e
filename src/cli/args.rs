//! Command line argument parsing for the keyspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;

/// keyspell - keyboard-aware spelling suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "keyspell")]
#[command(about = "Keyboard-aware spelling suggestions ranked by edit distance and frequency")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeyspellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "KEYSPELL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary file: "word count" lines, a JSON vocabulary or a .bin snapshot
    #[arg(short, long, value_name = "DICTIONARY", env = "KEYSPELL_DICTIONARY", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Word counts (JSON object) for a JSON vocabulary
    #[arg(long, value_name = "COUNTS_FILE", global = true)]
    pub counts: Option<PathBuf>,

    /// Maximum number of suggestions to return
    #[arg(short = 'n', long, global = true)]
    pub top: Option<usize>,

    /// Number of ranking threads
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeyspellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Engine configuration from the config file with flags applied on top.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = self.resolved_config()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge the config file and flags without checking the result.
    pub fn resolved_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load_from_file(path)?,
            None => EngineConfig::default(),
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary = Some(dictionary.clone());
        }
        if let Some(counts) = &self.counts {
            config.counts = Some(counts.clone());
        }
        if let Some(top) = self.top {
            config.max_candidates = top;
            config.max_completions = top;
        }
        if let Some(threads) = self.threads {
            config.thread_pool_size = Some(threads);
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank vocabulary words as corrections for a word
    Rank(WordArgs),

    /// Correct a word to the most frequent known word within two edits
    Correct(WordArgs),

    /// Complete a prefix with the most frequent matching words
    Complete(CompleteArgs),

    /// Show the keyboard-weighted distance between two strings
    Distance(DistanceArgs),

    /// Show dictionary statistics
    Stats,

    /// Convert a dictionary into a binary snapshot
    Build(BuildArgs),
}

/// Arguments for commands taking a single word
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// The (possibly misspelled) word
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source string
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target string
    #[arg(value_name = "TO")]
    pub to: String,
}

/// Arguments for building a snapshot
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Input dictionary (frequency file, word list or JSON vocabulary)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output snapshot path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Treat the input as a plain word list (one word per line)
    #[arg(long)]
    pub word_list: bool,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
