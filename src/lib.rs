//! Filmgraph
//!
//! A read-only query and scoring layer over a knowledge graph of films,
//! directors and genres.
//!
//! # Architecture
//!
//! - [`graph`]: embedded property graph and fixture loading
//! - [`query`]: the fixed set of Cypher templates, bound parameters and the
//!   native evaluator used by the embedded store
//! - [`backend`]: the [`GraphBackend`] trait with embedded and Neo4j HTTP
//!   implementations
//! - [`nlq`] and [`safety`]: rule-based question translation and the
//!   read-only guard applied to its output
//! - [`mapper`] and [`models`]: rows to public entity shapes
//! - [`service`]: the [`FilmGraph`] facade
//! - [`http`]: the axum API
//!
//! ## Example Usage
//!
//! ```rust
//! use filmgraph::graph::{CreatorRecord, Dataset, WorkRecord};
//! use filmgraph::query::{execute, library};
//!
//! let mann = CreatorRecord { id: "Q9".into(), name: Some("Michael Mann".into()) };
//! let dataset = Dataset {
//!     works: vec![
//!         WorkRecord {
//!             id: "Q1".into(),
//!             title: "Heat".into(),
//!             year: Some(1995),
//!             creators: vec![mann.clone()],
//!             topics: vec!["Crime".into()],
//!         },
//!         WorkRecord {
//!             id: "Q2".into(),
//!             title: "Collateral".into(),
//!             year: Some(2004),
//!             creators: vec![mann],
//!             topics: vec!["Crime".into()],
//!         },
//!     ],
//! };
//! let store = dataset.into_store().unwrap();
//!
//! // one shared director (2.0) and one shared genre (1.0)
//! let rows = execute(&store, &library::related_works("Q1", 10)).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows.rows[0].get("score").and_then(|s| s.as_float()), Some(3.0));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod graph;
pub mod http;
pub mod mapper;
pub mod models;
pub mod nlq;
pub mod query;
pub mod safety;
pub mod service;

// Re-export main types for convenience
pub use backend::{BackendError, BackendResult, EmbeddedBackend, GraphBackend, Neo4jHttpBackend};
pub use config::{AppConfig, BackendConfig, ConfigError, Neo4jConfig, ServerConfig};
pub use error::{FilmGraphError, FilmGraphResult};
pub use graph::{Dataset, GraphError, GraphStore, PropertyValue};
pub use models::{
    Creator, CreatorContributions, GraphStatus, Health, NlQueryResponse, RelatedWorks, ScoredTopic,
    ScoredWork, SearchResults, Topic, TopicGraph, Work, WorkWithContext,
};
pub use query::{CypherQuery, Depth, Template};
pub use service::FilmGraph;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
