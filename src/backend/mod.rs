//! Graph backends
//!
//! Provides two implementations of [`GraphBackend`]:
//!
//! - **`EmbeddedBackend`**: in-process, evaluates templates against a
//!   [`GraphStore`](crate::graph::GraphStore). Used by tests and for
//!   single-binary deployments.
//! - **`Neo4jHttpBackend`**: sends the Cypher text and bound parameters to a
//!   Neo4j server over its transactional HTTP API.

pub mod embedded;
pub mod neo4j;

use crate::query::{CypherQuery, QueryError, RowSet};
use async_trait::async_trait;
use thiserror::Error;

pub use embedded::EmbeddedBackend;
pub use neo4j::Neo4jHttpBackend;

/// Errors raised while executing a query
#[derive(Error, Debug)]
pub enum BackendError {
    /// The engine could not be reached
    #[error("Graph backend unavailable: {0}")]
    Unavailable(String),

    /// The engine rejected or failed the query
    #[error("Query failed: {0}")]
    Query(String),

    /// Template/parameter mismatch
    #[error("Invalid query: {0}")]
    Invalid(#[from] QueryError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Query-execution capability of a graph engine.
///
/// Every call is independent and read-only; an implementation acquires
/// whatever session or lock it needs for the duration of one call.
#[async_trait]
pub trait GraphBackend: Send + Sync {
    /// Execute a template with its bound parameters
    async fn run(&self, query: &CypherQuery) -> BackendResult<RowSet>;

    /// Backend name for logs and health output
    fn name(&self) -> &'static str;
}
