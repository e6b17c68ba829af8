//! Service error type

use crate::backend::BackendError;
use crate::nlq::NlqError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmGraphError {
    /// The requested work, creator or topic does not exist
    #[error("{kind} not found.")]
    NotFound { kind: &'static str, key: String },

    /// A request parameter is out of range or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Generated query text failed the read-only check
    #[error("{0}")]
    UnsafeQuery(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl FilmGraphError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound { kind, key: key.into() }
    }
}

impl From<NlqError> for FilmGraphError {
    fn from(err: NlqError) -> Self {
        match err {
            NlqError::Unsafe => Self::UnsafeQuery(err.to_string()),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

pub type FilmGraphResult<T> = Result<T, FilmGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FilmGraphError::not_found("Film", "Q1").to_string(), "Film not found.");
        let err: FilmGraphError = NlqError::MissingWorkId.into();
        assert!(matches!(err, FilmGraphError::InvalidInput(ref m) if m == "Provide a film wikidata id like Q19303."));
        let err: FilmGraphError = NlqError::Unsafe.into();
        assert!(matches!(err, FilmGraphError::UnsafeQuery(_)));
    }
}
