//! # Command Layer
//!
//! One module per command kind. Every handler takes the [`TodoState`](crate::state::TodoState)
//! plus typed arguments, mutates the state in place and returns a [`CmdResult`]. Handlers
//! never persist and never print; the dispatcher in `api.rs` does the former and the CLI
//! renderer the latter.

use crate::model::{Stats, Todo, View};

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod help;
pub mod list;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A usage line shown by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Todos created, changed or removed by the command.
    pub affected_todos: Vec<Todo>,
    /// Todos to display, already filtered, searched and sorted.
    pub listed_todos: Vec<Todo>,
    /// The view the listing was taken from, when the command listed anything.
    pub view: Option<View>,
    pub stats: Option<Stats>,
    pub help: Vec<HelpEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, view: View, todos: Vec<Todo>) -> Self {
        self.view = Some(view);
        self.listed_todos = todos;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_help(mut self, entries: Vec<HelpEntry>) -> Self {
        self.help = entries;
        self
    }
}
