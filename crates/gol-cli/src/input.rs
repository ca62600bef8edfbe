//! Interactive commands read from stdin.
//!
//! A background thread forwards stdin lines over a channel so the main
//! loop can wait on input and the tick clock together. The channel
//! disconnects at end of input.

use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use gol::engine::Event;
use thiserror::Error;
use tracing::debug;

use crate::args::to_zero_based;

/// Shown when the session pauses.
pub const PAUSE_MENU: &str = "\
Paused.
  c        continue
  s        save
  g 1 3 5  change displayed grids and continue
  q        quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?} (p, c, s, g <grids...>, q)")]
    Unknown(String),
    #[error("`g` needs at least one grid number")]
    MissingGrids,
    #[error("{0:?} is not a grid number (grid numbers start at 1)")]
    BadGrid(String),
}

/// Parse one input line into a session event.
///
/// `p` pause, `c` continue, `s` save, `g <n>...` select grids (1-based),
/// `q` quit. Blank lines are `None`.
pub fn parse_command(line: &str) -> Result<Option<Event>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let event = match head.to_ascii_lowercase().as_str() {
        "p" | "pause" => Event::Pause,
        "c" | "continue" => Event::Resume,
        "s" | "save" => Event::Save,
        "q" | "quit" | "exit" => Event::Exit,
        "g" | "games" => {
            let numbers = words
                .map(|w| w.parse::<usize>().map_err(|_| CommandError::BadGrid(w.into())))
                .collect::<Result<Vec<_>, _>>()?;
            if numbers.is_empty() {
                return Err(CommandError::MissingGrids);
            }
            let indices =
                to_zero_based(&numbers).map_err(|_| CommandError::BadGrid("0".into()))?;
            Event::Select(indices)
        }
        _ => return Err(CommandError::Unknown(head.into())),
    };
    Ok(Some(event))
}

/// Forward stdin lines to the returned channel from a background thread.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("stdin closed");
    });
    rx
}
