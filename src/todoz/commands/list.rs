//! The read path. Plain listing, search, sort and stats all arrive here as a
//! [`ListRequest`]; the requested view applies to this call only and never changes the
//! state's active filter.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::grammar::ListRequest;
use crate::model::{SortDirection, SortKey, Stats, Todo, View};
use crate::state::TodoState;
use std::cmp::Ordering;

pub fn run(state: &TodoState, request: &ListRequest) -> Result<CmdResult> {
    let view: View = request.view.parse()?;
    let sort = match &request.sort {
        Some(s) => Some((s.key.parse::<SortKey>()?, s.direction)),
        None => None,
    };

    let visible = state.filtered_by(view);

    if request.stats {
        return Ok(CmdResult::default().with_stats(Stats::from_todos(visible)));
    }

    let mut todos: Vec<Todo> = visible.into_iter().cloned().collect();

    if let Some(term) = &request.search {
        todos = search(todos, term);
    }

    if let Some((key, direction)) = sort {
        sort_todos(&mut todos, key, direction);
    }

    let mut result = CmdResult::default();
    if let Some(term) = &request.search {
        if todos.is_empty() {
            result.add_message(CmdMessage::info(format!("No todos match \"{}\"", term)));
        }
    }
    Ok(result.with_listed_todos(view, todos))
}

/// Case-insensitive substring match on titles, keeping list order.
pub fn search(todos: Vec<Todo>, term: &str) -> Vec<Todo> {
    let needle = term.to_lowercase();
    todos
        .into_iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort: todos that compare equal keep their relative order in both directions.
pub fn sort_todos(todos: &mut [Todo], key: SortKey, direction: SortDirection) {
    todos.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare(a: &Todo, b: &Todo, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
        SortKey::Status => a.completed.cmp(&b.completed),
    }
}
