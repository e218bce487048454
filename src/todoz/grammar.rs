//! # Command Grammar
//!
//! Turns one line of user text into exactly one [`Command`]. Parsing never fails:
//! anything that is not recognised becomes [`Action::Unknown`] carrying the text, and the
//! dispatcher reports it like any other failed command.
//!
//! ## Matching Order
//!
//! 1. **Bare aliases** ([`ALIASES`]) are compared case-insensitively against the whole
//!    trimmed line. They take no arguments, so `l` lists but `l active` goes through the
//!    patterns.
//! 2. **Patterns** ([`PATTERNS`]) are tried in declaration order, first match wins. Every
//!    pattern is case-insensitive and anchored to the full line.
//!
//! The order matters. Several patterns overlap (`filter` is both a standalone command and
//! an optional word inside `list filter active`, `c 1` must reach complete before anything
//! else sees a `c`), so reordering the table changes behaviour.
//!
//! ## Arguments
//!
//! - Ids are `[0-9]+`. A token that is not a number, or does not fit in a `u64`, means the
//!   pattern does not apply and the line ends up as `Unknown`.
//! - Titles and search terms lose one pair of surrounding double quotes via
//!   [`strip_quotes`]. This happens here and only here; titles already stored are never
//!   unquoted again, so a todo literally titled `"draft"` keeps its quotes across edits,
//!   saves and reloads.
//! - Search, stats and sort are all [`Action::List`] with the matching [`ListRequest`]
//!   field set, so every read goes through one handler.

use crate::model::SortDirection;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

/// One parsed user instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    /// The trimmed input this command was parsed from.
    pub raw: String,
    pub issued_at: DateTime<Utc>,
}

impl Command {
    pub fn new(action: Action, raw: impl Into<String>) -> Self {
        Self {
            action,
            raw: raw.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.action.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { title: String },
    Complete { id: u64 },
    Incomplete { id: u64 },
    Toggle { id: u64 },
    Delete { id: u64 },
    Edit { id: u64, title: String },
    List(ListRequest),
    ClearCompleted,
    Filter { view: String },
    Help,
    Exit,
    Unknown { input: String },
}

impl Action {
    pub fn kind(&self) -> CommandKind {
        match self {
            Action::Add { .. } => CommandKind::Add,
            Action::Complete { .. } => CommandKind::Complete,
            Action::Incomplete { .. } => CommandKind::Incomplete,
            Action::Toggle { .. } => CommandKind::Toggle,
            Action::Delete { .. } => CommandKind::Delete,
            Action::Edit { .. } => CommandKind::Edit,
            Action::List(_) => CommandKind::List,
            Action::ClearCompleted => CommandKind::ClearCompleted,
            Action::Filter { .. } => CommandKind::Filter,
            Action::Help => CommandKind::Help,
            Action::Exit => CommandKind::Exit,
            Action::Unknown { .. } => CommandKind::Unknown,
        }
    }
}

/// The closed set of command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Complete,
    Incomplete,
    Toggle,
    Delete,
    Edit,
    List,
    ClearCompleted,
    Filter,
    Help,
    Exit,
    Unknown,
}

impl CommandKind {
    /// Whether a successful command of this kind changes state and must be saved.
    pub fn is_mutating(&self) -> bool {
        match self {
            CommandKind::Add
            | CommandKind::Complete
            | CommandKind::Incomplete
            | CommandKind::Toggle
            | CommandKind::Delete
            | CommandKind::Edit
            | CommandKind::ClearCompleted
            | CommandKind::Filter => true,
            CommandKind::List | CommandKind::Help | CommandKind::Exit | CommandKind::Unknown => {
                false
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Complete => "complete",
            CommandKind::Incomplete => "incomplete",
            CommandKind::Toggle => "toggle",
            CommandKind::Delete => "delete",
            CommandKind::Edit => "edit",
            CommandKind::List => "list",
            CommandKind::ClearCompleted => "clear-completed",
            CommandKind::Filter => "filter",
            CommandKind::Help => "help",
            CommandKind::Exit => "exit",
            CommandKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a read. `view` is validated by the list handler, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub view: String,
    pub search: Option<String>,
    pub sort: Option<SortRequest>,
    pub stats: bool,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            view: "all".to_string(),
            search: None,
            sort: None,
            stats: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub key: String,
    pub direction: SortDirection,
}

type Extractor = fn(&Captures) -> Option<Action>;

/// Whole-line shorthands, checked before any pattern.
pub static ALIASES: &[(&str, fn() -> Action)] = &[
    ("a", || Action::Add {
        title: String::new(),
    }),
    ("l", || Action::List(ListRequest::default())),
    ("ls", || Action::List(ListRequest::default())),
    ("cc", || Action::ClearCompleted),
    ("h", || Action::Help),
    ("?", || Action::Help),
    ("q", || Action::Exit),
];

const PATTERN_SOURCES: &[(&str, Extractor)] = &[
    (r"^(?:add|create|new|a)\s+(.+)$", |c| {
        Some(Action::Add {
            title: quoted_arg(c, 1),
        })
    }),
    (r"^(?:complete|done|finish|check|c)\s+([0-9]+)$", |c| {
        Some(Action::Complete { id: id_arg(c, 1)? })
    }),
    (
        r"^(?:incomplete|uncomplete|uncheck|undone|reopen|u)\s+([0-9]+)$",
        |c| Some(Action::Incomplete { id: id_arg(c, 1)? }),
    ),
    (r"^(?:toggle|switch|t)\s+([0-9]+)$", |c| {
        Some(Action::Toggle { id: id_arg(c, 1)? })
    }),
    (r"^(?:delete|remove|del|rm|d)\s+([0-9]+)$", |c| {
        Some(Action::Delete { id: id_arg(c, 1)? })
    }),
    (
        r"^(?:edit|update|change|rename|e)\s+([0-9]+)\s+(.+)$",
        |c| {
            Some(Action::Edit {
                id: id_arg(c, 1)?,
                title: quoted_arg(c, 2),
            })
        },
    ),
    (r"^(?:list|show|view|ls|l)(?:\s+(?:filter\s+)?(\S+))?$", |c| {
        let mut request = ListRequest::default();
        if let Some(view) = c.get(1) {
            request.view = view.as_str().to_lowercase();
        }
        Some(Action::List(request))
    }),
    (r"^(?:clear|clean)(?:[\s_-]*(?:completed|done))?$", |_| {
        Some(Action::ClearCompleted)
    }),
    (r"^(?:filter|f)\s+(\S+)$", |c| {
        Some(Action::Filter {
            view: c[1].to_lowercase(),
        })
    }),
    (r"^(?:help|h|\?)$", |_| Some(Action::Help)),
    (r"^(?:exit|quit|q|bye)$", |_| Some(Action::Exit)),
    (r"^(?:search|find)\s+(.+)$", |c| {
        Some(Action::List(ListRequest {
            search: Some(quoted_arg(c, 1)),
            ..ListRequest::default()
        }))
    }),
    (r"^(?:stats|statistics|count)$", |_| {
        Some(Action::List(ListRequest {
            stats: true,
            ..ListRequest::default()
        }))
    }),
    (
        r"^sort(?:\s+by)?\s+(\S+)(?:\s+(asc|ascending|desc|descending))?$",
        |c| {
            let direction = match c.get(2).map(|m| m.as_str().to_lowercase()) {
                Some(d) if d.starts_with("desc") => SortDirection::Descending,
                _ => SortDirection::Ascending,
            };
            Some(Action::List(ListRequest {
                sort: Some(SortRequest {
                    key: c[1].to_lowercase(),
                    direction,
                }),
                ..ListRequest::default()
            }))
        },
    ),
];

/// Compiled patterns, in matching order.
pub static PATTERNS: Lazy<Vec<(Regex, Extractor)>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|(source, extract)| {
            let regex = Regex::new(&format!("(?i){}", source)).expect("valid command pattern");
            (regex, *extract)
        })
        .collect()
});

fn id_arg(caps: &Captures, group: usize) -> Option<u64> {
    caps.get(group)?.as_str().parse().ok()
}

fn quoted_arg(caps: &Captures, group: usize) -> String {
    caps.get(group)
        .map(|m| strip_quotes(m.as_str()).to_string())
        .unwrap_or_default()
}

/// Removes one pair of double quotes when they wrap the entire text and nothing else
/// inside is a quote. Anything else is returned unchanged, which makes the function
/// idempotent.
pub fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        let inner = &text[1..text.len() - 1];
        if !inner.contains('"') {
            return inner;
        }
    }
    text
}

/// Parses one line into a command.
pub fn parse(input: &str) -> Command {
    let line = input.trim();
    Command::new(parse_action(line), line)
}

fn parse_action(line: &str) -> Action {
    if let Some((_, build)) = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(line))
    {
        return build();
    }

    for (regex, extract) in PATTERNS.iter() {
        if let Some(caps) = regex.captures(line) {
            if let Some(action) = extract(&caps) {
                return action;
            }
        }
    }

    Action::Unknown {
        input: line.to_string(),
    }
}

/// Splits on `;` and newlines and parses each non-empty segment, left to right.
pub fn parse_batch(input: &str) -> Vec<Command> {
    input
        .split([';', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse)
        .collect()
}
