//! Natural-language questions to graph queries
//!
//! A rule-based translator recognises three question shapes and maps each to
//! a query template. No language model is involved; anything outside the
//! recognised shapes is rejected with a hint.

pub mod intent;

use thiserror::Error;

pub use intent::{Intent, IntentTranslator, TranslatedQuery};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NlqError {
    #[error("Provide a director wikidata id like Q12345.")]
    MissingCreatorId,

    #[error("Provide a film wikidata id like Q19303.")]
    MissingWorkId,

    #[error("Unsupported question. Try: top genres / related films Q... / films by director Q...")]
    Unsupported,

    #[error("Generated Cypher rejected (not read-only).")]
    Unsafe,
}

pub type NlqResult<T> = Result<T, NlqError>;
