use super::{Snapshot, SnapshotStore};
use crate::error::{Result, TodozError};

/// Keeps the last saved snapshot in memory. Can be told to fail saves so tests can
/// exercise the dispatcher's persistence-failure path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Snapshot>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn last_saved(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.fail_saves {
            return Err(TodozError::Store("in-memory store is read-only".to_string()));
        }
        self.snapshot = Some(snapshot.clone());
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Todo;

    /// Builds a store preloaded with todos, ids assigned from 1 in insertion order.
    pub struct StoreFixture {
        snapshot: Snapshot,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                snapshot: Snapshot::default(),
            }
        }

        pub fn with_todo(mut self, title: &str) -> Self {
            let id = self.snapshot.next_id;
            let todo = Todo::new(id, title).unwrap();
            self.snapshot.todos.push(todo);
            self.snapshot.next_id = id + 1;
            self
        }

        pub fn with_completed_todo(mut self, title: &str) -> Self {
            self = self.with_todo(title);
            if let Some(todo) = self.snapshot.todos.last_mut() {
                todo.complete();
            }
            self
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_todo(&format!("Test Todo {}", i + 1));
            }
            self
        }

        pub fn snapshot(&self) -> Snapshot {
            self.snapshot.clone()
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_snapshot(self.snapshot)
        }
    }
}
