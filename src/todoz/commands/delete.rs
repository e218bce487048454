use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::state::TodoState;

pub fn run(state: &mut TodoState, id: u64) -> Result<CmdResult> {
    let removed = state.remove(id).ok_or(TodozError::NotFound(id))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Todo deleted ({}): {}",
            removed.id, removed.title
        )))
        .with_affected_todos(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn removes_and_returns_the_todo() {
        let mut state = TodoState::new();
        add::run(&mut state, "A").unwrap();
        add::run(&mut state, "B").unwrap();

        let result = run(&mut state, 1).unwrap();
        assert_eq!(result.affected_todos[0].title, "A");
        assert_eq!(state.len(), 1);
        assert!(state.find_by_id(1).is_none());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut state = TodoState::new();
        add::run(&mut state, "A").unwrap();
        let err = run(&mut state, 99).unwrap_err();
        assert!(matches!(err, TodozError::NotFound(99)));
        assert_eq!(state.len(), 1);
    }
}
