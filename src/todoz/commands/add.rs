use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Todo;
use crate::state::TodoState;

pub fn run(state: &mut TodoState, title: &str) -> Result<CmdResult> {
    let todo = Todo::new(state.next_id(), title)?;
    state.insert(todo.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Todo added ({}): {}",
            todo.id, todo.title
        )))
        .with_affected_todos(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodozError;

    #[test]
    fn adds_first_todo_with_id_one() {
        let mut state = TodoState::new();
        let result = run(&mut state, "Buy milk").unwrap();

        let added = &result.affected_todos[0];
        assert_eq!(added.id, 1);
        assert_eq!(added.title, "Buy milk");
        assert!(!added.completed);
        assert_eq!(state.next_id(), 2);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn ids_are_monotonic_across_adds() {
        let mut state = TodoState::new();
        for i in 0..10 {
            run(&mut state, &format!("Task {}", i)).unwrap();
        }
        let ids: Vec<u64> = state.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
        assert_eq!(state.next_id(), 11);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut state = TodoState::new();
        run(&mut state, "a").unwrap();
        run(&mut state, "b").unwrap();
        state.remove(2);
        let result = run(&mut state, "c").unwrap();
        assert_eq!(result.affected_todos[0].id, 3);
    }

    #[test]
    fn empty_title_is_rejected_without_side_effects() {
        let mut state = TodoState::new();
        let err = run(&mut state, "   ").unwrap_err();
        assert!(matches!(err, TodozError::InvalidTitle(_)));
        assert!(state.is_empty());
        assert_eq!(state.next_id(), 1);
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let snapshot = crate::store::Snapshot {
            next_id: u64::MAX,
            ..Default::default()
        };
        let mut state = TodoState::from_snapshot(snapshot);

        let err = run(&mut state, "one too many").unwrap_err();
        assert!(matches!(err, TodozError::InvalidArgument(_)));
        assert!(state.is_empty());
        assert_eq!(state.next_id(), u64::MAX);
    }

    #[test]
    fn message_names_the_todo() {
        let mut state = TodoState::new();
        let result = run(&mut state, "Walk dog").unwrap();
        assert!(result.messages[0].content.contains("Walk dog"));
    }
}
