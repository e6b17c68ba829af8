//! HTTP server and routing

use super::{auth, handler};
use crate::config::ServerConfig;
use crate::service::FilmGraph;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state of every handler
#[derive(Clone)]
pub struct AppState {
    pub graph: FilmGraph,
    /// Key for protected routes; `None` makes them refuse every request
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(graph: FilmGraph, api_key: Option<String>) -> Self {
        Self { graph, api_key: api_key.map(Arc::from) }
    }
}

/// All API routes with permissive CORS
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/articles/:id/related", get(handler::related_works))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_api_key));

    Router::new()
        .route("/health", get(handler::health))
        .route("/api/search", get(handler::search))
        .route("/api/authors/:id/contributions", get(handler::creator_contributions))
        .route("/api/topics/:name/graph", get(handler::topic_graph))
        .route("/api/llm/query", post(handler::ask))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct HttpServer {
    state: AppState,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { state, config }
    }

    /// Bind and serve until the listener fails
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let app = router(self.state.clone());
        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            backend = self.state.graph.backend().name(),
            protected = self.state.api_key.is_some(),
            "filmgraph API listening on http://{}",
            addr
        );
        axum::serve(listener, app).await
    }
}
