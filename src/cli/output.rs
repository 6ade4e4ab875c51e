//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KeyspellArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::ranker::Candidate;

/// Result structure for the rank command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankResult {
    pub input: String,
    pub candidates: Vec<Candidate>,
    pub duration_ms: f64,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Result structure for the build command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub output: String,
    pub words: usize,
    pub total_frequency: u64,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &KeyspellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &KeyspellArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    print!("{}", render_human(&value));
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KeyspellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render a result value as plain text.
///
/// Candidate lists become a numbered table, other arrays one item per line
/// and remaining fields `key: value` lines.
pub fn render_human(value: &serde_json::Value) -> String {
    let mut out = String::new();

    if let Some(obj) = value.as_object() {
        for (key, field) in obj {
            match field {
                serde_json::Value::Array(items) if key == "candidates" => {
                    out.push_str(&format!("{key}:\n"));
                    for (i, item) in items.iter().enumerate() {
                        out.push_str(&format!(
                            "  {:>2}. {:<20} score {:>8.4}  distance {:.4}\n",
                            i + 1,
                            item["word"].as_str().unwrap_or(""),
                            item["score"].as_f64().unwrap_or(f64::NAN),
                            item["distance"].as_f64().unwrap_or(f64::NAN),
                        ));
                    }
                }
                serde_json::Value::Array(items) => {
                    out.push_str(&format!("{key}:\n"));
                    for (i, item) in items.iter().enumerate() {
                        out.push_str(&format!("  {:>2}. {}\n", i + 1, plain(item)));
                    }
                }
                _ => out.push_str(&format!("{key}: {}\n", plain(field))),
            }
        }
    } else {
        out.push_str(&format!("{}\n", plain(value)));
    }

    out
}

/// A JSON scalar without quotes around strings.
fn plain(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
