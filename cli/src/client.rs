//! Minimal HTTP client for the filmgraph API

use reqwest::{Client, Method, Url};
use serde_json::Value;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

pub struct ApiClient {
    base: Url,
    api_key: Option<String>,
    http_client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> CliResult<Self> {
        Ok(Self {
            base: Url::parse(base_url)?,
            api_key,
            http_client: Client::new(),
        })
    }

    /// `base` with `segments` appended (each percent-encoded) and a query string
    fn url(&self, segments: &[&str], query: &[(&str, String)]) -> CliResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| format!("{} cannot be used as a base URL", self.base))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url, body: Option<Value>) -> CliResult<Value> {
        let mut request = self.http_client.request(method, url);
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let json: Value = response.json().await.unwrap_or(Value::Null);
        if !status.is_success() {
            let detail = json
                .get("detail")
                .and_then(Value::as_str)
                .unwrap_or("no detail");
            return Err(format!("{} ({})", detail, status).into());
        }
        Ok(json)
    }

    pub async fn health(&self) -> CliResult<Value> {
        let url = self.url(&["health"], &[])?;
        self.send(Method::GET, url, None).await
    }

    pub async fn search(&self, q: &str, limit: Option<usize>) -> CliResult<Value> {
        let mut query = vec![("q", q.to_string())];
        query.extend(limit.map(|l| ("limit", l.to_string())));
        let url = self.url(&["api", "search"], &query)?;
        self.send(Method::GET, url, None).await
    }

    pub async fn related(&self, work_id: &str, limit: Option<usize>) -> CliResult<Value> {
        let query: Vec<_> = limit.map(|l| ("limit", l.to_string())).into_iter().collect();
        let url = self.url(&["api", "articles", work_id, "related"], &query)?;
        self.send(Method::GET, url, None).await
    }

    pub async fn contributions(&self, creator_id: &str, limit: Option<usize>) -> CliResult<Value> {
        let query: Vec<_> = limit.map(|l| ("limit", l.to_string())).into_iter().collect();
        let url = self.url(&["api", "authors", creator_id, "contributions"], &query)?;
        self.send(Method::GET, url, None).await
    }

    pub async fn topic(&self, name: &str, depth: Option<u8>, limit: Option<usize>) -> CliResult<Value> {
        let mut query = Vec::new();
        query.extend(depth.map(|d| ("depth", d.to_string())));
        query.extend(limit.map(|l| ("limit", l.to_string())));
        let url = self.url(&["api", "topics", name, "graph"], &query)?;
        self.send(Method::GET, url, None).await
    }

    pub async fn ask(&self, question: &str, limit: Option<usize>) -> CliResult<Value> {
        let mut body = serde_json::json!({ "question": question });
        if let Some(limit) = limit {
            body["limit"] = limit.into();
        }
        let url = self.url(&["api", "llm", "query"], &[])?;
        self.send(Method::POST, url, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_segments() {
        let client = ApiClient::new("http://localhost:8000/", None).unwrap();
        let url = client
            .url(&["api", "topics", "science fiction", "graph"], &[("depth", "2".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/topics/science%20fiction/graph?depth=2");
    }
}
