//! # Rendering Module
//!
//! Turns [`Outcome`]s into terminal text through the minijinja templates in `templates/`.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they need
//! Unicode-aware processing. Templates only choose where values go and which named style
//! applies; the `style` filter looks names up in [`TODOZ_THEME`] and drops ANSI codes when
//! colour is off.

use super::styles::{Theme, TODOZ_THEME};
use super::templates::{HELP_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;
use todoz::api::Outcome;
use todoz::commands::{CmdMessage, CmdResult, HelpEntry, MessageLevel};
use todoz::error::{Result, TodozError};
use todoz::model::{Stats, Todo, View};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 24;
const CHECKBOX_DONE: &str = "[x]";
const CHECKBOX_OPEN: &str = "[ ]";

#[derive(Serialize)]
struct TodoLineData {
    checkbox: &'static str,
    check_style: &'static str,
    id: String,
    title: String,
    title_style: &'static str,
    padding: String,
    time_ago: String,
}

#[derive(Serialize)]
struct ListData {
    heading: String,
    empty: bool,
    empty_message: &'static str,
    todos: Vec<TodoLineData>,
}

#[derive(Serialize)]
struct StatsRow {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct StatsData {
    heading: &'static str,
    rows: Vec<StatsRow>,
}

#[derive(Serialize)]
struct HelpLine {
    usage: &'static str,
    padding: String,
    description: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<HelpLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

const TEMPLATES: &[(&str, &str)] = &[
    ("list", LIST_TEMPLATE),
    ("stats", STATS_TEMPLATE),
    ("help", HELP_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
];

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        Self::with_templates(use_color, TEMPLATES)
    }

    /// Compiles every template up front so a broken one fails here, not on first render.
    fn with_templates(
        use_color: bool,
        templates: &[(&'static str, &'static str)],
    ) -> Result<Self> {
        let mut env = Environment::new();
        register_style_filter(&mut env, TODOZ_THEME.clone(), use_color);
        for &(name, source) in templates {
            env.add_template(name, source)
                .map_err(|e| TodozError::Template(format!("{}: {}", name, e)))?;
        }
        Ok(Self { env })
    }

    /// Renders a whole outcome. Failed outcomes render their error in the error style.
    pub fn render_outcome(&self, outcome: &Outcome) -> String {
        match &outcome.result {
            Ok(result) => self.render_result(result),
            Err(e) => self.render_error(e),
        }
    }

    pub fn render_result(&self, result: &CmdResult) -> String {
        let mut out = String::new();
        if !result.help.is_empty() {
            out.push_str(&self.render_help(&result.help));
        }
        if let Some(stats) = &result.stats {
            out.push_str(&self.render_stats(stats));
        }
        if let Some(view) = result.view {
            // A listing that came back empty with its own explanation needs no placeholder.
            let quiet_empty = result.listed_todos.is_empty() && !result.messages.is_empty();
            if !quiet_empty {
                out.push_str(&self.render_todo_list(view, &result.listed_todos));
            }
        }
        out.push_str(&self.render_messages(&result.messages));
        out
    }

    pub fn render_error(&self, error: &TodozError) -> String {
        self.render_messages(&[CmdMessage::error(error.to_string())])
    }

    pub fn render_todo_list(&self, view: View, todos: &[Todo]) -> String {
        let id_width = todos
            .iter()
            .map(|t| t.id.to_string().len() + 1)
            .max()
            .unwrap_or(0);
        // "[x] " + id + " " + title + padding + time
        let fixed = CHECKBOX_DONE.len() + 1 + id_width + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let lines = todos
            .iter()
            .map(|todo| {
                let title = truncate_to_width(&todo.title, available);
                let padding = " ".repeat(available.saturating_sub(title.width()));
                TodoLineData {
                    checkbox: if todo.completed {
                        CHECKBOX_DONE
                    } else {
                        CHECKBOX_OPEN
                    },
                    check_style: if todo.completed {
                        "check_done"
                    } else {
                        "check_open"
                    },
                    id: format!("{:>width$}", format!("{}.", todo.id), width = id_width),
                    title,
                    title_style: if todo.completed {
                        "title_done"
                    } else {
                        "title_open"
                    },
                    padding,
                    time_ago: format_time_ago(todo.updated_at),
                }
            })
            .collect();

        let data = ListData {
            heading: format!("Todos [{}]", view),
            empty: todos.is_empty(),
            empty_message: "No todos to show.",
            todos: lines,
        };
        self.render_template("list", &data)
    }

    pub fn render_stats(&self, stats: &Stats) -> String {
        let rows = [
            ("Total:", stats.total.to_string()),
            ("Active:", stats.active.to_string()),
            ("Completed:", stats.completed.to_string()),
            ("Progress:", format!("{}%", stats.percent)),
        ]
        .into_iter()
        .map(|(label, value)| StatsRow {
            label: format!("{:<11}", label),
            value,
        })
        .collect();

        let data = StatsData {
            heading: "Statistics",
            rows,
        };
        self.render_template("stats", &data)
    }

    pub fn render_help(&self, entries: &[HelpEntry]) -> String {
        let usage_width = entries.iter().map(|e| e.usage.width()).max().unwrap_or(0);
        let data = HelpData {
            entries: entries
                .iter()
                .map(|e| HelpLine {
                    usage: e.usage,
                    padding: " ".repeat(usage_width - e.usage.width() + 2),
                    description: e.description,
                })
                .collect(),
        };
        self.render_template("help", &data)
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: match m.level {
                        MessageLevel::Info => "info",
                        MessageLevel::Success => "success",
                        MessageLevel::Warning => "warning",
                        MessageLevel::Error => "error",
                    },
                })
                .collect(),
        };
        self.render_template("messages", &data)
    }

    fn render_template<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = format!(
        "updated {}",
        formatter.convert(duration.to_std().unwrap_or_default())
    );
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
