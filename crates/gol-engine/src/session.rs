//! Pause/resume state machine around a [`SimulationBatch`].
//!
//! A host (CLI loop, GUI, test) owns the clock and the input devices; it
//! turns them into [`Event`]s and feeds them to [`Session::handle`]. The
//! session decides what each event means in the current state and returns
//! an [`Outcome`] describing what happened. Nothing here blocks or reads
//! the wall clock.
//!
//! ```text
//! state     Tick      Pause    Resume    Save       Select       Exit
//! Running   step      Paused   ignored   error      error        Exited
//! Paused    ignored   ignored  Running   snapshot   Running(ok)  Exited
//! Exited    error     error    error     error      error        error
//! ```

use std::fmt;

use gol_codec::Snapshot;
use thiserror::Error;
use tracing::{debug, info};

use crate::batch::{BatchStats, SelectionError, SimulationBatch};
use crate::persist;

// ── State and events ────────────────────────────────────────────

/// Lifecycle state of a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Ticks advance the batch.
    Running,
    /// Ticks are ignored; save and selection changes are allowed.
    Paused,
    /// Terminal. Every further event is an error.
    Exited,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Exited => "exited",
        })
    }
}

/// Input to [`Session::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// One tick of the host's clock.
    Tick,
    /// Stop advancing on ticks.
    Pause,
    /// Resume advancing on ticks.
    Resume,
    /// Request a snapshot of the batch.
    Save,
    /// Replace the display selection (0-based indices) and resume.
    Select(Vec<usize>),
    /// End the session.
    Exit,
}

impl Event {
    /// Short lower-case name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Save => "save",
            Self::Select(_) => "select",
            Self::Exit => "exit",
        }
    }
}

/// Result of a handled [`Event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The batch advanced one generation.
    Stepped(BatchStats),
    /// The session is now paused.
    Paused,
    /// The session is running again.
    Resumed,
    /// Snapshot of the batch, for the host to write out.
    Save(Snapshot),
    /// The selection was replaced and the session resumed.
    SelectionChanged,
    /// The event had no effect in the current state.
    Ignored,
    /// The session has ended.
    Exited,
}

// ── Errors ──────────────────────────────────────────────────────

/// A rejected [`Event`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session has already ended.
    #[error("session has exited")]
    Exited,
    /// The event is not accepted in the current state.
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        /// State at the time of the event.
        state: SessionState,
        /// Name of the rejected event.
        event: &'static str,
    },
    /// The requested selection was rejected; the session stays paused.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

// ── Session ─────────────────────────────────────────────────────

/// A batch plus its pause/resume state. Starts [`Running`].
///
/// [`Running`]: SessionState::Running
#[derive(Debug)]
pub struct Session {
    batch: SimulationBatch,
    state: SessionState,
}

impl Session {
    /// Start a running session over `batch`.
    pub fn new(batch: SimulationBatch) -> Self {
        Self {
            batch,
            state: SessionState::Running,
        }
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// [`SessionError::Exited`] after [`Event::Exit`];
    /// [`SessionError::InvalidTransition`] for `Save` or `Select` while
    /// running; [`SessionError::Selection`] for a rejected selection.
    /// A failed event never changes the state.
    pub fn handle(&mut self, event: Event) -> Result<Outcome, SessionError> {
        use SessionState::{Exited, Paused, Running};

        let outcome = match (self.state, event) {
            (Exited, _) => return Err(SessionError::Exited),
            (_, Event::Exit) => {
                self.state = Exited;
                Outcome::Exited
            }
            (Running, Event::Tick) => Outcome::Stepped(self.batch.step_all()),
            (Running, Event::Pause) => {
                self.state = Paused;
                Outcome::Paused
            }
            (Paused, Event::Resume) => {
                self.state = Running;
                Outcome::Resumed
            }
            (Paused, Event::Save) => Outcome::Save(persist::encode(&self.batch)),
            (Paused, Event::Select(indices)) => {
                self.batch.set_selection(&indices)?;
                self.state = Running;
                Outcome::SelectionChanged
            }
            (Paused, Event::Tick | Event::Pause) | (Running, Event::Resume) => Outcome::Ignored,
            (state @ Running, event @ (Event::Save | Event::Select(_))) => {
                return Err(SessionError::InvalidTransition {
                    state,
                    event: event.name(),
                })
            }
        };

        match &outcome {
            Outcome::Stepped(_) | Outcome::Ignored => {}
            other => debug!(state = %self.state, outcome = ?other, "session transition"),
        }
        if self.state == Exited {
            info!(grids = self.batch.len(), "session exited");
        }
        Ok(outcome)
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The underlying batch.
    pub fn batch(&self) -> &SimulationBatch {
        &self.batch
    }

    /// End the session and take the batch.
    pub fn into_batch(self) -> SimulationBatch {
        self.batch
    }
}
