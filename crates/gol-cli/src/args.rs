//! Command-line arguments.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use gol::codec::Format;
use gol::engine::BatchConfig;

/// Batched Conway's Game of Life in the terminal.
///
/// Grid numbers on the command line and in interactive commands start
/// at 1.
#[derive(Parser, Debug)]
#[command(name = "gol", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a batch of random grids.
    New(NewArgs),
    /// Resume a batch from a save file.
    Load(LoadArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Rows per grid
    #[arg(short, long, default_value_t = 10)]
    pub rows: i32,

    /// Columns per grid
    #[arg(short, long, default_value_t = 10)]
    pub columns: i32,

    /// Number of grids
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for a reproducible batch. When omitted, OS entropy is used.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub run: RunArgs,
}

impl NewArgs {
    pub fn config(&self) -> BatchConfig {
        BatchConfig {
            rows: self.rows,
            columns: self.columns,
            count: self.count,
            seed: self.seed,
            ..BatchConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Save file to read
    pub file: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Grids to display, e.g. `1,3,5` (at most 8). Defaults to the first grids.
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Stop after this many generations
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Write the batch here when the run ends and on interactive `s`
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Save file format (`text` or `json`). Defaults to the file extension.
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Read pause/continue/save/select/quit commands from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Keep ticking after every grid has stopped changing
    #[arg(long)]
    pub keep_running: bool,
}

impl RunArgs {
    /// Format for `path`: the explicit `--format`, else by extension.
    pub fn format_for(&self, path: &Path) -> Format {
        self.format.unwrap_or_else(|| format_from_extension(path))
    }

    /// `--select` converted to 0-based indices.
    pub fn selection(&self) -> Result<Vec<usize>> {
        to_zero_based(&self.select)
    }
}

fn format_from_extension(path: &Path) -> Format {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
        _ => Format::Text,
    }
}

/// Convert user-facing grid numbers to engine indices.
pub fn to_zero_based(numbers: &[usize]) -> Result<Vec<usize>> {
    numbers
        .iter()
        .map(|&n| match n.checked_sub(1) {
            Some(index) => Ok(index),
            None => bail!("grid numbers start at 1"),
        })
        .collect()
}
