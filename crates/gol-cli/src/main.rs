//! gol: run batched Game of Life simulations in the terminal.
//!
//! ```bash
//! # Twelve random 10×20 grids, show grids 1 and 3, one generation per 200ms
//! gol new --rows 10 --columns 20 --count 12 --select 1,3 --interval-ms 200
//!
//! # Resume a save and pause/save/quit from the keyboard
//! gol load batch.json --interactive --save batch.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` (default `warn`) to see more.

mod args;
mod input;
mod render;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{never, select, tick};
use gol::engine::{load, save, Event, Outcome, Session, SessionError, SimulationBatch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command, RunArgs};
use crate::input::{parse_command, spawn_stdin_reader, PAUSE_MENU};
use crate::render::render_batch;

/// Interactive saves go here when `--save` is not given.
const DEFAULT_SAVE_FILE: &str = "gol-save.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let (batch, run) = match cli.command {
        Command::New(args) => {
            let config = args.config();
            let batch = SimulationBatch::from_config(&config)
                .context("invalid batch parameters")?;
            (batch, args.run)
        }
        Command::Load(args) => {
            let text = fs::read_to_string(&args.file)
                .with_context(|| format!("failed to read {}", args.file.display()))?;
            let format = args.run.format_for(&args.file);
            let batch = load(&text, format)
                .with_context(|| format!("failed to load {} as {format}", args.file.display()))?;
            (batch, args.run)
        }
    };

    run_session(batch, &run)
}

fn run_session(mut batch: SimulationBatch, run: &RunArgs) -> Result<()> {
    let selection = if run.select.is_empty() {
        (0..batch.len().min(batch.max_selectable())).collect()
    } else {
        run.selection()?
    };
    if selection.is_empty() {
        warn!("batch has no grids to display");
    } else {
        batch
            .set_selection(&selection)
            .context("invalid --select")?;
    }

    info!(
        grids = batch.len(),
        interval_ms = run.interval_ms,
        generations = ?run.generations,
        interactive = run.interactive,
        "starting run"
    );

    let mut session = Session::new(batch);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_batch(&mut out, session.batch())?;

    let ticker = tick(Duration::from_millis(run.interval_ms.max(1)));
    let mut commands = if run.interactive {
        writeln!(out, "Type p and Enter to pause.")?;
        spawn_stdin_reader()
    } else {
        never()
    };
    let save_path = run
        .save
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE));

    let mut generations = 0u64;
    while run.generations.is_none_or(|limit| generations < limit) {
        let received = select! {
            recv(ticker) -> _ => None,
            recv(commands) -> line => Some(line),
        };
        let event = match received {
            None => Event::Tick,
            Some(Ok(line)) => match parse_command(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    continue;
                }
            },
            Some(Err(_)) => {
                // End of input: keep ticking without commands.
                commands = never();
                continue;
            }
        };

        match session.handle(event) {
            Ok(Outcome::Stepped(stats)) => {
                generations += 1;
                render_batch(&mut out, session.batch())?;
                if stats.is_quiescent() && !run.keep_running {
                    writeln!(out, "All games are stable.")?;
                    break;
                }
            }
            Ok(Outcome::Paused) => writeln!(out, "{PAUSE_MENU}")?,
            Ok(Outcome::Resumed | Outcome::SelectionChanged) => {
                render_batch(&mut out, session.batch())?
            }
            Ok(Outcome::Save(snapshot)) => {
                let format = run.format_for(&save_path);
                let text = format.encode(&snapshot)?;
                write_save(&save_path, &text)?;
                writeln!(out, "Saved {} games to {}.", snapshot.len(), save_path.display())?;
            }
            Ok(Outcome::Exited) => {
                writeln!(out, "Exiting...")?;
                break;
            }
            Ok(Outcome::Ignored) => {}
            Err(e @ (SessionError::Selection(_) | SessionError::InvalidTransition { .. })) => {
                writeln!(out, "{e}")?;
            }
            Err(SessionError::Exited) => break,
        }
    }

    if let Some(path) = &run.save {
        let text = save(session.batch(), run.format_for(path))?;
        write_save(path, &text)?;
    }
    Ok(())
}

fn write_save(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "wrote save file");
    Ok(())
}

