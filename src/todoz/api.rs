//! # Dispatcher
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every todoz operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! [`Dispatcher`]:
//! - **Owns** the [`TodoState`] for the whole session; nothing else holds it mutably
//! - **Routes** each [`Command`] to its handler with an exhaustive match on [`Action`]
//! - **Persists** after every successful mutating command, exactly once
//! - **Returns** an [`Outcome`] for every input, including unknown ones
//!
//! ## What the Dispatcher Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: outcomes are handed to a [`Presenter`], never formatted here
//!
//! ## Persistence Failures
//!
//! By the time `save` runs the in-memory mutation has already happened. A failed save is
//! logged at `warn` and surfaced as a warning message on an otherwise successful outcome;
//! nothing is rolled back and the session keeps going.
//!
//! ## Generic Over SnapshotStore
//!
//! - Production: `Dispatcher<FileStore>`
//! - Testing: `Dispatcher<InMemoryStore>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{ErrorKind, Result, TodozError};
use crate::grammar::{self, Action, Command, CommandKind};
use crate::state::TodoState;
use crate::store::SnapshotStore;
use tracing::{debug, warn};

/// The uniform result of dispatching one command.
#[derive(Debug)]
pub struct Outcome {
    pub kind: CommandKind,
    pub result: Result<CmdResult>,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.result.as_ref().err().map(TodozError::kind)
    }

    pub fn is_exit(&self) -> bool {
        self.kind == CommandKind::Exit
    }
}

/// Receives each outcome as it is produced.
pub trait Presenter {
    fn present(&mut self, outcome: &Outcome);
}

impl<F: FnMut(&Outcome)> Presenter for F {
    fn present(&mut self, outcome: &Outcome) {
        self(outcome)
    }
}

pub struct Dispatcher<S: SnapshotStore> {
    state: TodoState,
    store: S,
}

impl<S: SnapshotStore> Dispatcher<S> {
    /// Builds a dispatcher from whatever the store holds. A store that cannot be read
    /// yields an empty list rather than an error.
    pub fn new(store: S) -> Self {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "could not load todos, starting with an empty list");
                Default::default()
            }
        };
        Self::with_state(TodoState::from_snapshot(snapshot), store)
    }

    pub fn with_state(state: TodoState, store: S) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&mut self, command: &Command) -> Outcome {
        let kind = command.kind();
        debug!(%kind, raw = %command.raw, "dispatching");

        let mut result = self.route(&command.action);

        if kind.is_mutating() {
            if let Ok(cmd_result) = result.as_mut() {
                if let Err(e) = self.persist() {
                    warn!(error = %e, %kind, "failed to save todos");
                    cmd_result.add_message(CmdMessage::warning(format!(
                        "Changes kept in memory but not saved: {}",
                        e
                    )));
                }
            }
        }

        Outcome { kind, result }
    }

    /// Parses a line as a batch and dispatches each command in order, presenting every
    /// outcome. Stops after an exit command; returns false when the session should end.
    pub fn run_line<P: Presenter + ?Sized>(&mut self, input: &str, presenter: &mut P) -> bool {
        for command in grammar::parse_batch(input) {
            let outcome = self.dispatch(&command);
            presenter.present(&outcome);
            if outcome.is_exit() {
                return false;
            }
        }
        true
    }

    /// Like [`Dispatcher::run_line`] but collects outcomes instead of presenting them.
    pub fn execute(&mut self, input: &str) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        for command in grammar::parse_batch(input) {
            let outcome = self.dispatch(&command);
            let stop = outcome.is_exit();
            outcomes.push(outcome);
            if stop {
                break;
            }
        }
        outcomes
    }

    fn route(&mut self, action: &Action) -> Result<CmdResult> {
        let state = &mut self.state;
        match action {
            Action::Add { title } => commands::add::run(state, title),
            Action::Complete { id } => commands::status::complete(state, *id),
            Action::Incomplete { id } => commands::status::incomplete(state, *id),
            Action::Toggle { id } => commands::status::toggle(state, *id),
            Action::Delete { id } => commands::delete::run(state, *id),
            Action::Edit { id, title } => commands::edit::run(state, *id, title),
            Action::List(request) => commands::list::run(state, request),
            Action::ClearCompleted => commands::clear::run(state),
            Action::Filter { view } => commands::filter::run(state, view),
            Action::Help => commands::help::help(),
            Action::Exit => commands::help::exit(),
            Action::Unknown { input } => commands::help::unknown(input),
        }
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = self.state.to_snapshot();
        self.store.save(&snapshot)
    }
}
