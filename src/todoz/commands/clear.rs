use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::TodoState;

pub fn run(state: &mut TodoState) -> Result<CmdResult> {
    let removed = state.remove_where(|t| t.completed);

    let message = match removed.len() {
        0 => CmdMessage::info("No completed todos to clear"),
        1 => CmdMessage::success("Cleared 1 completed todo"),
        n => CmdMessage::success(format!("Cleared {} completed todos", n)),
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_todos(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, status};

    #[test]
    fn removes_only_completed() {
        let mut state = TodoState::new();
        for title in ["a", "b", "c"] {
            add::run(&mut state, title).unwrap();
        }
        status::complete(&mut state, 1).unwrap();
        status::complete(&mut state, 3).unwrap();

        let result = run(&mut state).unwrap();
        assert_eq!(result.affected_todos.len(), 2);
        assert!(result.messages[0].content.contains('2'));
        let left: Vec<&str> = state.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(left, vec!["b"]);
    }

    #[test]
    fn nothing_to_clear_is_not_an_error() {
        let mut state = TodoState::new();
        add::run(&mut state, "a").unwrap();
        let result = run(&mut state).unwrap();
        assert!(result.affected_todos.is_empty());
        assert_eq!(state.len(), 1);
        assert!(result.messages[0].content.contains("No completed"));
    }
}
