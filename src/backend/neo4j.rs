//! Neo4jHttpBackend: Cypher over the Neo4j transactional HTTP API
//!
//! Each query is a single auto-commit transaction:
//! `POST {url}/db/{database}/tx/commit` with one statement in `row` format.
//! Nodes come back as property maps, which the result mapper reads the same
//! way as embedded nodes.

use super::{BackendError, BackendResult, GraphBackend};
use crate::config::Neo4jConfig;
use crate::query::{CypherQuery, Row, RowSet, Value};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Statement<'a> {
    statement: &'a str,
    parameters: serde_json::Value,
    #[serde(rename = "resultDataContents")]
    result_data_contents: [&'static str; 1],
}

#[derive(Serialize)]
struct TxRequest<'a> {
    statements: [Statement<'a>; 1],
}

#[derive(Debug, Deserialize)]
pub(crate) struct TxResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    #[serde(default)]
    errors: Vec<TxError>,
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<DataRow>,
}

#[derive(Debug, Deserialize)]
struct DataRow {
    #[serde(default)]
    row: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TxError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Network backend talking to a Neo4j server.
pub struct Neo4jHttpBackend {
    commit_url: String,
    user: String,
    password: String,
    http_client: Client,
}

impl Neo4jHttpBackend {
    /// Create a backend for the server and database in `config`.
    ///
    /// No connection is made until the first query.
    pub fn new(config: &Neo4jConfig) -> Self {
        Self {
            commit_url: format!(
                "{}/db/{}/tx/commit",
                config.url.trim_end_matches('/'),
                config.database
            ),
            user: config.user.clone(),
            password: config.password.clone(),
            http_client: Client::new(),
        }
    }

    /// Transaction commit endpoint this backend posts to
    pub fn commit_url(&self) -> &str {
        &self.commit_url
    }
}

/// Convert a transactional API response into rows
pub(crate) fn decode_response(response: TxResponse) -> BackendResult<RowSet> {
    if let Some(err) = response.errors.first() {
        return Err(BackendError::Query(format!("{}: {}", err.code, err.message)));
    }
    let Some(result) = response.results.into_iter().next() else {
        return Ok(RowSet::default());
    };

    let rows = result
        .data
        .iter()
        .map(|data| {
            let mut row = Row::new();
            for (i, column) in result.columns.iter().enumerate() {
                let value = data.row.get(i).map(Value::from_json).unwrap_or(Value::Null);
                row.bind(column.clone(), value);
            }
            row
        })
        .collect();
    Ok(RowSet::new(result.columns, rows))
}

#[async_trait]
impl GraphBackend for Neo4jHttpBackend {
    async fn run(&self, query: &CypherQuery) -> BackendResult<RowSet> {
        let body = TxRequest {
            statements: [Statement {
                statement: query.text(),
                parameters: query.params.to_json(),
                result_data_contents: ["row"],
            }],
        };

        let response = self
            .http_client
            .post(&self.commit_url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    BackendError::Unavailable(e.to_string())
                } else {
                    BackendError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(template = query.template.name(), %status, "graph server rejected request");
            return Err(BackendError::Unavailable(format!("graph server returned {}", status)));
        }

        let tx: TxResponse = response.json().await?;
        let rows = decode_response(tx)?;
        tracing::debug!(template = query.template.name(), rows = rows.len(), "neo4j query");
        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "neo4j"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: serde_json::Value) -> BackendResult<RowSet> {
        decode_response(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn test_commit_url() {
        let backend = Neo4jHttpBackend::new(&Neo4jConfig {
            url: "http://localhost:7474/".into(),
            database: "films".into(),
            user: "neo4j".into(),
            password: "secret".into(),
        });
        assert_eq!(backend.commit_url(), "http://localhost:7474/db/films/tx/commit");
    }

    #[test]
    fn test_decode_rows() {
        let rows = decode(serde_json::json!({
            "results": [{
                "columns": ["other", "score"],
                "data": [
                    {"row": [{"wikidata_id": "Q2", "title": "Heat", "year": 1995}, 3.5], "meta": [{"id": 4, "type": "node"}, null]},
                    {"row": [{"wikidata_id": "Q3", "title": "Ronin"}, 1.0], "meta": []}
                ]
            }],
            "errors": []
        }))
        .unwrap();

        assert_eq!(rows.columns, vec!["other", "score"]);
        assert_eq!(rows.len(), 2);
        let first = &rows.rows[0];
        assert_eq!(first.get("other").unwrap().str_property("title"), Some("Heat"));
        assert_eq!(first.get("score").unwrap().as_float(), Some(3.5));
        assert_eq!(rows.rows[1].get("other").unwrap().int_property("year"), None);
    }

    #[test]
    fn test_decode_error() {
        let err = decode(serde_json::json!({
            "results": [],
            "errors": [{"code": "Neo.ClientError.Statement.SyntaxError", "message": "bad"}]
        }))
        .unwrap_err();
        assert!(matches!(err, BackendError::Query(msg) if msg.contains("SyntaxError")));
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(serde_json::json!({"results": [], "errors": []})).unwrap().is_empty());
    }

    #[test]
    fn test_request_shape() {
        let query = crate::query::library::topic_by_name("Drama");
        let body = TxRequest {
            statements: [Statement {
                statement: query.text(),
                parameters: query.params.to_json(),
                result_data_contents: ["row"],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statements"][0]["parameters"]["name"], "Drama");
        assert_eq!(json["statements"][0]["resultDataContents"][0], "row");
    }
}
