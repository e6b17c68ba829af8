//! EmbeddedBackend: in-process graph store, no network

use super::{BackendResult, GraphBackend};
use crate::graph::GraphStore;
use crate::query::{self, CypherQuery, RowSet};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process backend that wraps a [`GraphStore`] directly.
pub struct EmbeddedBackend {
    store: Arc<RwLock<GraphStore>>,
}

impl EmbeddedBackend {
    /// Backend over a fresh empty store
    pub fn new() -> Self {
        Self::from_store(GraphStore::new())
    }

    /// Backend that takes ownership of a populated store
    pub fn from_store(store: GraphStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for EmbeddedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphBackend for EmbeddedBackend {
    async fn run(&self, query: &CypherQuery) -> BackendResult<RowSet> {
        // The read guard is the per-query session; it is released on every
        // return path when it drops.
        let store = self.store.read().await;
        let rows = query::execute(&store, query)?;
        tracing::debug!(template = query.template.name(), rows = rows.len(), "embedded query");
        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}
