//! HTTP handlers

use super::AppState;
use crate::error::FilmGraphError;
use crate::models::{CreatorContributions, Health, NlQueryResponse, RelatedWorks, SearchResults, TopicGraph};
use crate::query::Depth;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

/// Error response: status code plus a `detail` message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }
}

impl From<FilmGraphError> for ApiError {
    fn from(err: FilmGraphError) -> Self {
        match err {
            FilmGraphError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            FilmGraphError::InvalidInput(detail) | FilmGraphError::UnsafeQuery(detail) => {
                Self::bad_request(detail)
            }
            FilmGraphError::Backend(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopicParams {
    pub depth: Option<u8>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(state.graph.health().await)
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<SearchResults> {
    let Query(params) = params?;
    Ok(Json(state.graph.search_works(&params.q, params.limit).await?))
}

pub async fn related_works(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> ApiResult<RelatedWorks> {
    let Query(params) = params?;
    Ok(Json(state.graph.related_works(&id, params.limit).await?))
}

pub async fn creator_contributions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> ApiResult<CreatorContributions> {
    let Query(params) = params?;
    Ok(Json(state.graph.creator_contributions(&id, params.limit).await?))
}

pub async fn topic_graph(
    State(state): State<AppState>,
    Path(name): Path<String>,
    params: Result<Query<TopicParams>, QueryRejection>,
) -> ApiResult<TopicGraph> {
    let Query(params) = params?;
    let depth = match params.depth {
        None => Depth::default(),
        Some(d) => Depth::try_from(d).map_err(ApiError::bad_request)?,
    };
    Ok(Json(state.graph.topic_subgraph(&name, depth, params.limit).await?))
}

pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> ApiResult<NlQueryResponse> {
    let Json(request) = payload?;
    Ok(Json(state.graph.ask(&request.question, request.limit).await?))
}
