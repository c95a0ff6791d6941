//! Error kinds of the roster library.

use std::num::ParseIntError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Файла данных нет ни в одном из мест поиска.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Нечисловой балл в строке успеваемости.
    #[error("invalid score '{token}' in grade of '{name}': {source}")]
    Grade {
        name: String,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot determine home directory (set STUDENTS_HOME or HOME)")]
    NoHomeDir,
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound { .. })
    }
}
