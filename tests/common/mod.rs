#![allow(dead_code)]

use async_trait::async_trait;
use filmgraph::backend::{BackendError, BackendResult, GraphBackend};
use filmgraph::query::{CypherQuery, RowSet};
use filmgraph::{Dataset, EmbeddedBackend, FilmGraph, GraphStore};
use std::sync::Arc;

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/films.yaml");

pub fn store() -> GraphStore {
    Dataset::from_path(FIXTURE).unwrap().into_store().unwrap()
}

pub fn graph() -> FilmGraph {
    FilmGraph::new(Arc::new(EmbeddedBackend::from_store(store())))
}

pub fn ids<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

/// Backend whose every query fails
pub struct FailingBackend;

#[async_trait]
impl GraphBackend for FailingBackend {
    async fn run(&self, _query: &CypherQuery) -> BackendResult<RowSet> {
        Err(BackendError::Unavailable("connection refused".into()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub fn failing_graph() -> FilmGraph {
    FilmGraph::new(Arc::new(FailingBackend))
}
