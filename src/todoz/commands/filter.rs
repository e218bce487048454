use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::TodoState;

/// Sets the persistent view and lists what it shows.
pub fn run(state: &mut TodoState, view: &str) -> Result<CmdResult> {
    state.set_filter(view)?;
    let active = state.active_filter();
    let todos = state.filtered().into_iter().cloned().collect();

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!("Showing {} todos", active)))
        .with_listed_todos(active, todos))
}
