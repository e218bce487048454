use crate::error::{Result, TodozError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_TITLE_CHARS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: u64, title: &str) -> Result<Self> {
        let title = validate_title(title)?;
        let now = Utc::now();
        Ok(Self {
            id,
            title,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn complete(&mut self) {
        self.completed = true;
        self.touch();
    }

    pub fn uncomplete(&mut self) {
        self.completed = false;
        self.touch();
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.touch();
    }

    /// Replaces the title. On a rejected title the todo is left untouched.
    pub fn retitle(&mut self, title: &str) -> Result<()> {
        self.title = validate_title(title)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// Trims a title and checks it is non-empty and within [`MAX_TITLE_CHARS`].
pub fn validate_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TodozError::InvalidTitle("Title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(TodozError::InvalidTitle(format!(
            "Title cannot be longer than {} characters",
            MAX_TITLE_CHARS
        )));
    }
    Ok(title.to_string())
}

/// Which slice of the list is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    All,
    Active,
    Completed,
}

impl View {
    pub fn includes(&self, todo: &Todo) -> bool {
        match self {
            View::All => true,
            View::Active => !todo.completed,
            View::Completed => todo.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::All => "all",
            View::Active => "active",
            View::Completed => "completed",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(View::All),
            "active" => Ok(View::Active),
            "completed" => Ok(View::Completed),
            _ => Err(TodozError::InvalidFilter(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    Created,
    Updated,
    Status,
}

impl FromStr for SortKey {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "title" | "name" => Ok(SortKey::Title),
            "date" | "created" => Ok(SortKey::Created),
            "updated" | "modified" => Ok(SortKey::Updated),
            "status" | "completed" => Ok(SortKey::Status),
            _ => Err(TodozError::InvalidArgument(format!(
                "Unknown sort key '{}' (expected one of: id, title, date, updated, status)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Aggregate counts over the whole list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub percent: u8,
}

impl Stats {
    pub fn from_todos<'a, I: IntoIterator<Item = &'a Todo>>(todos: I) -> Self {
        let (mut total, mut completed) = (0usize, 0usize);
        for todo in todos {
            total += 1;
            if todo.completed {
                completed += 1;
            }
        }
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            total,
            active: total - completed,
            completed,
            percent,
        }
    }
}
