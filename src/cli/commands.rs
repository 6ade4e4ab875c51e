//! Command implementations for the keyspell CLI.

use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{KeyspellError, Result};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::engine::SpellingEngine;
use crate::spelling::levenshtein::weighted_edit_distance;

/// Execute a CLI command.
pub fn execute_command(args: KeyspellArgs) -> Result<()> {
    match &args.command {
        Command::Rank(word_args) => rank_word(word_args, &args),
        Command::Correct(word_args) => correct_word(word_args, &args),
        Command::Complete(complete_args) => complete_prefix(complete_args, &args),
        Command::Distance(distance_args) => show_distance(distance_args, &args),
        Command::Stats => show_stats(&args),
        Command::Build(build_args) => build_snapshot(build_args, &args),
    }
}

/// Load the engine described by the configuration and flags.
fn load_engine(cli_args: &KeyspellArgs) -> Result<SpellingEngine> {
    let start_time = Instant::now();
    let engine = SpellingEngine::from_config(cli_args.engine_config()?)?;
    info!(
        "Engine ready with {} words in {:?}",
        engine.dictionary().word_count(),
        start_time.elapsed()
    );
    Ok(engine)
}

/// Rank candidates for a word.
fn rank_word(args: &WordArgs, cli_args: &KeyspellArgs) -> Result<()> {
    let engine = load_engine(cli_args)?;

    let start_time = Instant::now();
    let candidates = engine.rank(&args.word);
    let duration = start_time.elapsed();

    output_result(
        "Ranked candidates",
        &RankResult {
            input: args.word.clone(),
            candidates,
            duration_ms: duration.as_secs_f64() * 1000.0,
        },
        cli_args,
    )
}

/// Correct a word.
fn correct_word(args: &WordArgs, cli_args: &KeyspellArgs) -> Result<()> {
    let engine = load_engine(cli_args)?;
    output_result("Correction", &engine.correction(&args.word), cli_args)
}

/// Complete a prefix.
fn complete_prefix(args: &CompleteArgs, cli_args: &KeyspellArgs) -> Result<()> {
    let engine = load_engine(cli_args)?;
    output_result("Completions", &engine.completions(&args.prefix), cli_args)
}

/// Show the weighted distance between two strings.
fn show_distance(args: &DistanceArgs, cli_args: &KeyspellArgs) -> Result<()> {
    output_result(
        "Keyboard-weighted edit distance",
        &DistanceResult {
            from: args.from.clone(),
            to: args.to.clone(),
            distance: weighted_edit_distance(&args.from, &args.to),
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(cli_args: &KeyspellArgs) -> Result<()> {
    let engine = load_engine(cli_args)?;
    output_result("Dictionary statistics", &engine.stats(), cli_args)
}

/// Convert a dictionary into a binary snapshot.
fn build_snapshot(args: &BuildArgs, cli_args: &KeyspellArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(KeyspellError::invalid_argument(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    let counts = cli_args.resolved_config()?.counts;

    let start_time = Instant::now();
    let dictionary = if args.word_list {
        SpellingDictionary::load_from_word_list(&args.input)?
    } else {
        SpellingDictionary::load(&args.input, counts.as_deref())?
    };
    debug!("Writing snapshot to {}", args.output.display());
    dictionary.save_snapshot(&args.output)?;

    output_result(
        "Snapshot written",
        &BuildResult {
            output: args.output.to_string_lossy().to_string(),
            words: dictionary.word_count(),
            total_frequency: dictionary.total_frequency(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}
