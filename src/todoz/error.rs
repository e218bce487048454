use thiserror::Error;

/// Coarse classification of a [`TodozError`], used by callers that only care
/// about what kind of thing went wrong (renderers, tests, exit codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    ValidationFailed,
    UnknownCommand,
    PersistenceFailure,
}

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Todo not found: {0}")]
    NotFound(u64),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid filter '{0}' (expected one of: all, active, completed)")]
    InvalidFilter(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown command: '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl TodozError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodozError::NotFound(_) => ErrorKind::NotFound,
            TodozError::InvalidTitle(_) => ErrorKind::ValidationFailed,
            TodozError::InvalidFilter(_) | TodozError::InvalidArgument(_) => {
                ErrorKind::InvalidArgument
            }
            TodozError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            TodozError::Io(_)
            | TodozError::Serialization(_)
            | TodozError::Store(_)
            | TodozError::Template(_) => ErrorKind::PersistenceFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodozError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_user_errors() {
        assert_eq!(TodozError::NotFound(3).kind(), ErrorKind::NotFound);
        assert_eq!(
            TodozError::InvalidTitle("empty".into()).kind(),
            ErrorKind::ValidationFailed
        );
        assert_eq!(
            TodozError::InvalidFilter("soon".into()).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn classifies_storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(TodozError::from(io).kind(), ErrorKind::PersistenceFailure);
    }

    #[test]
    fn unknown_command_message_echoes_input() {
        let err = TodozError::UnknownCommand("bogus command".into());
        let text = err.to_string();
        assert!(text.contains("bogus command"));
        assert!(text.contains("help"));
    }
}
