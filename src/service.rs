//! FilmGraph: the query facade used by the HTTP layer
//!
//! Each operation validates its inputs, checks that the anchor entity
//! exists, runs one template and maps the rows. Nothing is cached between
//! calls.

use crate::backend::GraphBackend;
use crate::error::{FilmGraphError, FilmGraphResult};
use crate::mapper;
use crate::models::{
    Creator, CreatorContributions, GraphStatus, Health, NlQueryResponse, RelatedWorks,
    SearchResults, TopicGraph,
};
use crate::nlq::IntentTranslator;
use crate::query::{library, Bounds, CypherQuery, Depth, Row, RowSet, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct FilmGraph {
    backend: Arc<dyn GraphBackend>,
    translator: IntentTranslator,
}

impl FilmGraph {
    pub fn new(backend: Arc<dyn GraphBackend>) -> Self {
        Self { backend, translator: IntentTranslator::new() }
    }

    pub fn backend(&self) -> &Arc<dyn GraphBackend> {
        &self.backend
    }

    async fn run(&self, query: &CypherQuery) -> FilmGraphResult<RowSet> {
        self.backend.run(query).await.map_err(|e| {
            tracing::error!(
                backend = self.backend.name(),
                template = query.template.name(),
                error = %e,
                "query failed"
            );
            FilmGraphError::Backend(e)
        })
    }

    /// The single `n` cell of a lookup, or NotFound
    async fn require(&self, query: CypherQuery, kind: &'static str, key: &str) -> FilmGraphResult<Value> {
        self.run(&query)
            .await?
            .single()
            .and_then(|row| row.get("n").filter(|n| !n.is_null()).cloned())
            .ok_or_else(|| FilmGraphError::not_found(kind, key))
    }

    fn limit(bounds: Bounds, value: Option<usize>) -> FilmGraphResult<usize> {
        bounds.resolve("limit", value).map_err(FilmGraphError::InvalidInput)
    }

    /// Works ranked by shared creators, shared topics and release-year proximity
    pub async fn related_works(&self, work_id: &str, limit: Option<usize>) -> FilmGraphResult<RelatedWorks> {
        let limit = Self::limit(Bounds::RELATED_WORKS, limit)?;
        self.require(library::work_by_id(work_id), "Film", work_id).await?;

        let rows = self.run(&library::related_works(work_id, limit)).await?;
        let related = rows.iter().filter_map(mapper::scored_work_from).collect();
        Ok(RelatedWorks { work_id: work_id.to_string(), related })
    }

    /// Works directed by a creator and the union of their topics
    pub async fn creator_contributions(
        &self,
        creator_id: &str,
        limit: Option<usize>,
    ) -> FilmGraphResult<CreatorContributions> {
        let limit = Self::limit(Bounds::CONTRIBUTIONS, limit)?;
        let node = self.require(library::creator_by_id(creator_id), "Director", creator_id).await?;
        let creator = mapper::creator_from(&node).unwrap_or_else(|| Creator {
            id: creator_id.to_string(),
            name: String::new(),
        });

        let row = self
            .run(&library::creator_contributions(creator_id, limit))
            .await?
            .single();
        Ok(mapper::contributions_from(creator, row.as_ref()))
    }

    /// A topic, its works and creators, and up to ten related topics
    pub async fn topic_subgraph(
        &self,
        name: &str,
        depth: Depth,
        limit: Option<usize>,
    ) -> FilmGraphResult<TopicGraph> {
        let limit = Self::limit(Bounds::TOPIC_WORKS, limit)?;
        self.require(library::topic_by_name(name), "Topic (genre)", name).await?;

        self.run(&library::topic_subgraph(name, depth, limit))
            .await?
            .single()
            .as_ref()
            .and_then(mapper::topic_graph_from)
            .ok_or_else(|| FilmGraphError::not_found("Topic (genre)", name))
    }

    /// Works whose title, creator name or topic name contains `q`
    pub async fn search_works(&self, q: &str, limit: Option<usize>) -> FilmGraphResult<SearchResults> {
        if q.trim().is_empty() {
            return Err(FilmGraphError::InvalidInput("Query 'q' must not be empty.".into()));
        }
        let limit = Self::limit(Bounds::SEARCH, limit)?;

        let rows = self.run(&library::search_works(q, limit)).await?;
        let results = rows.iter().filter_map(mapper::work_with_context_from).collect();
        Ok(SearchResults { query: q.to_string(), results })
    }

    /// Answer a natural-language question
    pub async fn ask(&self, question: &str, limit: Option<usize>) -> FilmGraphResult<NlQueryResponse> {
        let limit = Self::limit(Bounds::NL_QUERY, limit)?;
        let translated = self.translator.translate(question, limit)?;

        let rows = self.run(&translated.query).await?;
        Ok(NlQueryResponse {
            question: question.to_string(),
            generated_query: translated.rendered,
            rows: rows.iter().map(mapper::json_row).collect(),
        })
    }

    /// Probe the backend; failures report the graph as down
    pub async fn health(&self) -> Health {
        let graph = match self.backend.run(&library::ping()).await {
            Ok(rows) => {
                let ok = rows
                    .single()
                    .as_ref()
                    .and_then(|row: &Row| row.get("ok"))
                    .and_then(Value::as_float);
                if ok == Some(1.0) { GraphStatus::Up } else { GraphStatus::Down }
            }
            Err(e) => {
                tracing::error!(backend = self.backend.name(), error = %e, "health probe failed");
                GraphStatus::Down
            }
        };
        Health { status: "ok".to_string(), graph }
    }
}
