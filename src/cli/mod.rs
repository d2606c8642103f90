//! Command-line interface for the checker and merger binaries

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::discovery::{discover_all, DEFAULT_MAX_DEPTH};
use crate::error::CollectionResult;
use crate::merge::inputs::resolve_collection_files;
use crate::merge::{default_output_path, load_collections, merge_collections, write_collection};
use crate::report::{Report, ReportMode};
use crate::validation::validate_collection_file;

/// Validate Postman collection files
#[derive(Parser, Debug, Clone)]
#[command(name = "collection-checker")]
#[command(about = "Validate Postman collection files")]
#[command(version)]
pub struct CheckerArgs {
    /// Files or directories to check
    #[arg(short, long, num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Write results to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only list the paths of valid collections
    #[arg(short, long)]
    pub discover: bool,

    /// Maximum directory depth to search
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,

    /// Print a count of valid and invalid files at the end
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Merge multiple Postman collections into one
#[derive(Parser, Debug, Clone)]
#[command(name = "collection-merger")]
#[command(about = "Merge multiple Postman collections into one")]
#[command(version)]
pub struct MergerArgs {
    /// Collection files, or directories containing them
    #[arg(short, long, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// File listing collection paths, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output file (default: derived from the merged name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime settings for a checker run
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub mode: ReportMode,
    /// Always at least 1
    pub max_depth: usize,
    pub summary: bool,
}

impl CheckerConfig {
    pub fn from_args(args: &CheckerArgs) -> Self {
        Self {
            inputs: args.input.clone(),
            output: args.output.clone(),
            mode: if args.discover {
                ReportMode::Discover
            } else {
                ReportMode::Normal
            },
            max_depth: args.depth.max(1),
            summary: args.summary,
        }
    }
}

/// Runtime settings for a merger run
#[derive(Debug, Clone)]
pub struct MergerConfig {
    pub inputs: Vec<PathBuf>,
    pub list_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl MergerConfig {
    pub fn from_args(args: &MergerArgs) -> Self {
        Self {
            inputs: args.input.clone(),
            list_file: args.file.clone(),
            output: args.output.clone(),
        }
    }
}

/// Send log events to stderr so stdout only carries results.
///
/// `RUST_LOG` takes precedence over the verbose flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when running under tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Check every discovered file and report on `out`.
///
/// Per-file problems are part of the report. Only failures to write to
/// `out` itself are returned as errors.
pub fn run_checker<W: Write>(config: &CheckerConfig, out: &mut W) -> Result<Report> {
    let mut report = Report::new(config.mode);

    let files = discover_all(&config.inputs, config.max_depth);
    if files.is_empty() {
        writeln!(out, "No files found to check!")?;
        return Ok(report);
    }
    tracing::debug!(count = files.len(), "checking files");

    for file in files {
        let verdict = validate_collection_file(&file);
        if let Some(line) = report.render_entry(&file, &verdict) {
            writeln!(out, "{}", line)?;
        }
        report.push(file, verdict);
    }

    if config.summary && report.mode() == ReportMode::Normal {
        writeln!(out, "{}", report.summary())?;
    }

    if let Some(output) = &config.output {
        match report.persist(output) {
            Ok(()) => writeln!(out, "\nResults written to {}", output.display())?,
            Err(e) => writeln!(out, "Error writing to output file: {}", e)?,
        }
    }

    Ok(report)
}

/// Resolve, load, merge and write collections. Returns the output path.
pub fn run_merger(config: &MergerConfig) -> CollectionResult<PathBuf> {
    let files = resolve_collection_files(&config.inputs, config.list_file.as_deref())?;
    let collections = load_collections(&files)?;
    let merged = merge_collections(&collections)?;

    let output_path = match &config.output {
        Some(path) => path.clone(),
        None => {
            // merge_collections always writes a string name
            let name = merged["info"]["name"].as_str().unwrap_or_default();
            default_output_path(name)
        }
    };

    write_collection(&output_path, &merged)?;
    tracing::debug!(
        collections = collections.len(),
        output = %output_path.display(),
        "merge written"
    );
    Ok(output_path)
}
