use anyhow::Context;
use filmgraph::http::{AppState, HttpServer};
use filmgraph::{
    AppConfig, BackendConfig, Dataset, EmbeddedBackend, FilmGraph, GraphBackend, GraphStore,
    Neo4jHttpBackend,
};
use std::sync::Arc;
use tracing::info;

fn build_backend(config: &BackendConfig) -> anyhow::Result<Arc<dyn GraphBackend>> {
    match config {
        BackendConfig::Embedded { dataset } => {
            let store = match dataset {
                Some(path) => Dataset::from_path(path)
                    .and_then(|d| d.into_store())
                    .with_context(|| format!("loading dataset {}", path.display()))?,
                None => GraphStore::new(),
            };
            info!(
                nodes = store.node_count(),
                edges = store.edge_count(),
                "embedded graph ready"
            );
            Ok(Arc::new(EmbeddedBackend::from_store(store)))
        }
        BackendConfig::Neo4j(neo4j) => {
            info!(url = %neo4j.url, database = %neo4j.database, "using Neo4j backend");
            Ok(Arc::new(Neo4jHttpBackend::new(neo4j)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("filmgraph v{}", filmgraph::version());

    let config = AppConfig::load().context("loading configuration")?;
    if config.api_key.is_none() {
        tracing::warn!("API_KEY is not set; protected routes will refuse every request");
    }

    let backend = build_backend(&config.backend)?;
    let state = AppState::new(FilmGraph::new(backend), config.api_key.clone());
    HttpServer::new(state, config.server.clone())
        .start()
        .await
        .context("HTTP server failed")?;
    Ok(())
}
