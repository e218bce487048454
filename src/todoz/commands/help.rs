use crate::commands::{CmdMessage, CmdResult, HelpEntry};
use crate::error::{Result, TodozError};

pub const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        usage: "add <title>",
        description: "Add a todo (also: create, new, a)",
    },
    HelpEntry {
        usage: "complete <id>",
        description: "Mark a todo as done (also: done, finish, check, c)",
    },
    HelpEntry {
        usage: "incomplete <id>",
        description: "Mark a todo as not done (also: uncheck, reopen, u)",
    },
    HelpEntry {
        usage: "toggle <id>",
        description: "Flip a todo's status (also: switch, t)",
    },
    HelpEntry {
        usage: "edit <id> <title>",
        description: "Rename a todo (also: update, change, e)",
    },
    HelpEntry {
        usage: "delete <id>",
        description: "Remove a todo (also: remove, del, rm, d)",
    },
    HelpEntry {
        usage: "list [all|active|completed]",
        description: "Show todos (also: show, view, ls, l)",
    },
    HelpEntry {
        usage: "filter <all|active|completed>",
        description: "Set the default view",
    },
    HelpEntry {
        usage: "search <text>",
        description: "Find todos by title (also: find)",
    },
    HelpEntry {
        usage: "sort <id|title|date|updated|status> [asc|desc]",
        description: "Show todos in order",
    },
    HelpEntry {
        usage: "stats",
        description: "Show totals and completion rate (also: count)",
    },
    HelpEntry {
        usage: "clear completed",
        description: "Remove all completed todos (also: cc)",
    },
    HelpEntry {
        usage: "help",
        description: "Show this help (also: h, ?)",
    },
    HelpEntry {
        usage: "exit",
        description: "Leave todoz (also: quit, q)",
    },
];

pub fn help() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_help(HELP_ENTRIES.to_vec())
        .with_message(CmdMessage::info(
            "Separate several commands with ';' to run them in one go.",
        )))
}

pub fn exit() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info("Goodbye!")))
}

pub fn unknown(input: &str) -> Result<CmdResult> {
    Err(TodozError::UnknownCommand(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let result = help().unwrap();
        let usages: Vec<&str> = result.help.iter().map(|e| e.usage).collect();
        for word in ["add", "complete", "delete", "edit", "list", "sort", "stats", "exit"] {
            assert!(
                usages.iter().any(|u| u.starts_with(word)),
                "missing {}",
                word
            );
        }
    }

    #[test]
    fn unknown_always_fails_with_input() {
        let err = unknown("frobnicate 3").unwrap_err();
        assert!(err.to_string().contains("frobnicate 3"));
    }
}
