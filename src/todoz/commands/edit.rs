use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::state::TodoState;

/// Retitles a todo. The title arrives already unquoted by the grammar and is stored as is.
pub fn run(state: &mut TodoState, id: u64, title: &str) -> Result<CmdResult> {
    let todo = state.find_by_id_mut(id).ok_or(TodozError::NotFound(id))?;
    let old_title = todo.title.clone();
    todo.retitle(title)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Todo {} renamed: \"{}\" -> \"{}\"",
            todo.id, old_title, todo.title
        )))
        .with_affected_todos(vec![todo.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn retitles_in_place() {
        let mut state = TodoState::new();
        add::run(&mut state, "Old").unwrap();

        let result = run(&mut state, 1, "  New  ").unwrap();
        assert_eq!(state.find_by_id(1).unwrap().title, "New");
        let message = &result.messages[0].content;
        assert!(message.contains("Old"));
        assert!(message.contains("New"));
    }

    #[test]
    fn missing_todo_is_not_found() {
        let mut state = TodoState::new();
        let err = run(&mut state, 3, "x").unwrap_err();
        assert!(matches!(err, TodozError::NotFound(3)));
    }

    #[test]
    fn invalid_title_keeps_old_one() {
        let mut state = TodoState::new();
        add::run(&mut state, "Keep").unwrap();
        let err = run(&mut state, 1, " ").unwrap_err();
        assert!(matches!(err, TodozError::InvalidTitle(_)));
        assert_eq!(state.find_by_id(1).unwrap().title, "Keep");
    }

    #[test]
    fn stored_quotes_are_not_stripped_again() {
        let mut state = TodoState::new();
        add::run(&mut state, "\"draft\"").unwrap();
        run(&mut state, 1, "\"draft\" v2").unwrap();
        assert_eq!(state.find_by_id(1).unwrap().title, "\"draft\" v2");
    }
}
