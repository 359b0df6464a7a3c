use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("film number {number} is out of range (roster has {len} films)")]
    OutOfRange { number: i64, len: usize },

    #[error("film name is empty")]
    EmptyName,

    #[error("search term is empty")]
    EmptyQuery,

    #[error("score {0} is outside the 0-20 range")]
    InvalidScore(f64),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid score '{value}'")]
    Parse { line: usize, value: String },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }
}
