use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::state::TodoState;

pub fn complete(state: &mut TodoState, id: u64) -> Result<CmdResult> {
    set_status(state, id, Todo::complete)
}

pub fn incomplete(state: &mut TodoState, id: u64) -> Result<CmdResult> {
    set_status(state, id, Todo::uncomplete)
}

pub fn toggle(state: &mut TodoState, id: u64) -> Result<CmdResult> {
    set_status(state, id, Todo::toggle)
}

fn set_status(state: &mut TodoState, id: u64, apply: fn(&mut Todo)) -> Result<CmdResult> {
    let todo = state.find_by_id_mut(id).ok_or(TodozError::NotFound(id))?;
    apply(todo);

    let state_word = if todo.completed {
        "complete"
    } else {
        "incomplete"
    };
    let message = CmdMessage::success(format!(
        "Todo {} marked as {}: {}",
        todo.id, state_word, todo.title
    ));

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_todos(vec![todo.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn state_with_aged_todo() -> TodoState {
        let mut state = TodoState::new();
        let mut todo = Todo::new(1, "Buy milk").unwrap();
        todo.created_at = todo.created_at - Duration::minutes(10);
        todo.updated_at = todo.created_at;
        state.insert(todo).unwrap();
        state
    }

    #[test]
    fn complete_marks_todo_and_names_it() {
        let mut state = state_with_aged_todo();
        let before = state.find_by_id(1).unwrap().updated_at;

        let result = complete(&mut state, 1).unwrap();

        let todo = state.find_by_id(1).unwrap();
        assert!(todo.completed);
        assert!(todo.updated_at > before);
        assert!(result.messages[0].content.contains("Buy milk"));
        assert!(result.messages[0].content.contains("marked as complete"));
    }

    #[test]
    fn incomplete_reports_resulting_state() {
        let mut state = state_with_aged_todo();
        complete(&mut state, 1).unwrap();
        let result = incomplete(&mut state, 1).unwrap();
        assert!(!state.find_by_id(1).unwrap().completed);
        assert!(result.messages[0].content.contains("marked as incomplete"));
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut state = state_with_aged_todo();
        let result = toggle(&mut state, 1).unwrap();
        assert!(result.affected_todos[0].completed);
        assert!(result.messages[0].content.contains("marked as complete"));

        let result = toggle(&mut state, 1).unwrap();
        assert!(!result.affected_todos[0].completed);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut state = state_with_aged_todo();
        for op in [complete, incomplete, toggle] {
            let err = op(&mut state, 7).unwrap_err();
            assert!(matches!(err, TodozError::NotFound(7)));
        }
        assert!(!state.find_by_id(1).unwrap().completed);
    }
}
