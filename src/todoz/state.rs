//! # State Container
//!
//! [`TodoState`] owns every [`Todo`] in the session, the id allocator and the active view.
//! Command handlers reach todos only through it.
//!
//! ## Id Allocation
//!
//! `next_id` always stays strictly above the largest id present. [`TodoState::insert`]
//! enforces this by bumping `next_id` whenever an inserted id reaches it. Ids are never
//! reused within a list, even after the highest todo is deleted, because `next_id` only
//! moves forward. The largest id is `u64::MAX - 1`, so `next_id` itself always fits; once
//! it is reached, inserting fails with [`TodozError::InvalidArgument`].
//!
//! Inserting does not check for duplicate ids; the add handler allocates from
//! [`TodoState::next_id`] and is trusted to do so.

use crate::error::{Result, TodozError};
use crate::model::{Todo, View};
use crate::store::Snapshot;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    items: Vec<Todo>,
    next_id: u64,
    active_filter: View,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            active_filter: View::All,
        }
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut state = Self {
            items: Vec::with_capacity(snapshot.todos.len()),
            next_id: snapshot.next_id.max(1),
            active_filter: snapshot.current_view,
        };
        for todo in snapshot.todos {
            let id = todo.id;
            if let Err(e) = state.insert(todo) {
                warn!(id, error = %e, "dropping todo that cannot be inserted");
            }
        }
        state
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.items.clone(),
            next_id: self.next_id,
            current_view: self.active_filter,
            ..Snapshot::default()
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn active_filter(&self) -> View {
        self.active_filter
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, todo: Todo) -> Result<()> {
        let after = todo.id.checked_add(1).ok_or_else(|| {
            TodozError::InvalidArgument("No more todo ids available".to_string())
        })?;
        if after > self.next_id {
            self.next_id = after;
        }
        self.items.push(todo);
        Ok(())
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.items.iter_mut().find(|t| t.id == id)
    }

    /// Overwrites the todo with the same id. Returns false when no such todo exists.
    pub fn replace(&mut self, todo: Todo) -> bool {
        match self.find_by_id_mut(todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Removes the first todo with this id, handing it back.
    pub fn remove(&mut self, id: u64) -> Option<Todo> {
        let pos = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Removes every todo matching `pred`, preserving the order of the rest.
    pub fn remove_where<F: Fn(&Todo) -> bool>(&mut self, pred: F) -> Vec<Todo> {
        let (removed, kept): (Vec<Todo>, Vec<Todo>) =
            std::mem::take(&mut self.items).into_iter().partition(pred);
        self.items = kept;
        removed
    }

    pub fn set_filter(&mut self, view: &str) -> Result<()> {
        self.active_filter = view.parse()?;
        Ok(())
    }

    /// Todos visible under the active view, in insertion order.
    pub fn filtered(&self) -> Vec<&Todo> {
        self.filtered_by(self.active_filter)
    }

    pub fn filtered_by(&self, view: View) -> Vec<&Todo> {
        self.items.iter().filter(|t| view.includes(t)).collect()
    }
}
