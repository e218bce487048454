//! # Storage Layer
//!
//! The [`SnapshotStore`] trait is the only thing the dispatcher knows about persistence.
//! Whatever is on the other side receives a complete [`Snapshot`] after every successful
//! mutation and hands one back at startup.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file (`todos.json` by default)
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "todos": [
//!     { "id": 1, "title": "Buy milk", "completed": false,
//!       "createdAt": "2024-05-01T09:00:00Z", "updatedAt": "2024-05-01T09:00:00Z" }
//!   ],
//!   "nextId": 2,
//!   "currentView": "all",
//!   "version": "0.3.2"
//! }
//! ```
//!
//! ## Lenient Loading
//!
//! Snapshots are written by us but edited by humans, so loading never rejects a file
//! wholesale. [`Snapshot::from_value`] coerces each field on its own: a bad `currentView`
//! becomes `all`, a bad timestamp becomes "now", and a todo whose id or title cannot be
//! recovered is dropped. Every coercion is logged at `warn`.

use crate::error::Result;
use crate::model::{validate_title, Todo, View, MAX_TITLE_CHARS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The persisted form of the state container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    pub next_id: u64,
    pub current_view: View,
    pub version: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
            current_view: View::All,
            version: SNAPSHOT_VERSION.to_string(),
        }
    }
}

impl Snapshot {
    /// Parses snapshot text. Malformed JSON yields the default snapshot.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!(error = %e, "snapshot is not valid JSON, starting from an empty list");
                Self::default()
            }
        }
    }

    /// Builds a snapshot from arbitrary JSON, defaulting each field independently.
    pub fn from_value(value: &Value) -> Self {
        let mut snapshot = Self::default();
        let Some(obj) = value.as_object() else {
            warn!("snapshot root is not an object, starting from an empty list");
            return snapshot;
        };

        if let Some(raw) = obj.get("todos") {
            match raw.as_array() {
                Some(entries) => snapshot.todos = coerce_todos(entries),
                None => warn!("snapshot field 'todos' is not an array, ignoring it"),
            }
        }

        match obj.get("nextId").map(|v| v.as_u64()) {
            Some(Some(n)) if (1..u64::MAX).contains(&n) => snapshot.next_id = n,
            Some(_) => warn!("snapshot field 'nextId' is invalid, recomputing it"),
            None => {}
        }

        match obj.get("currentView") {
            Some(Value::String(s)) => match s.parse::<View>() {
                Ok(view) => snapshot.current_view = view,
                Err(_) => warn!(view = %s, "snapshot field 'currentView' is invalid, using 'all'"),
            },
            Some(_) => warn!("snapshot field 'currentView' is not a string, using 'all'"),
            None => {}
        }

        if let Some(Value::String(v)) = obj.get("version") {
            snapshot.version = v.clone();
        }

        let floor = snapshot
            .todos
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        snapshot.next_id = snapshot.next_id.max(floor);
        snapshot
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn coerce_todos(entries: &[Value]) -> Vec<Todo> {
    let mut seen = HashSet::new();
    let mut todos = Vec::with_capacity(entries.len());

    for (position, entry) in entries.iter().enumerate() {
        let Some(todo) = coerce_todo(entry) else {
            warn!(position, "dropping unreadable todo entry from snapshot");
            continue;
        };
        if !seen.insert(todo.id) {
            warn!(id = todo.id, "dropping duplicate todo id from snapshot");
            continue;
        }
        todos.push(todo);
    }

    todos
}

fn coerce_todo(entry: &Value) -> Option<Todo> {
    let obj = entry.as_object()?;
    let id = obj
        .get("id")
        .and_then(Value::as_u64)
        .filter(|id| (1..u64::MAX).contains(id))?;
    let title = coerce_title(id, obj.get("title")?.as_str()?)?;
    let completed = obj
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let now = Utc::now();
    let created_at = parse_timestamp(obj.get("createdAt")).unwrap_or(now);
    let updated_at = parse_timestamp(obj.get("updatedAt"))
        .unwrap_or(created_at)
        .max(created_at);

    Some(Todo {
        id,
        title,
        completed,
        created_at,
        updated_at,
    })
}

/// Over-long titles are cut to [`MAX_TITLE_CHARS`]; blank ones make the todo unusable.
fn coerce_title(id: u64, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        warn!(id, "truncating over-long todo title from snapshot");
        let cut: String = trimmed.chars().take(MAX_TITLE_CHARS).collect();
        return validate_title(&cut).ok();
    }
    validate_title(trimmed).ok()
}

fn parse_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Load the last saved snapshot, or the default one if nothing was saved yet.
    fn load(&self) -> Result<Snapshot>;

    /// Persist a complete snapshot, replacing the previous one.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}
