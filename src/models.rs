//! Public entity shapes
//!
//! These are the JSON documents the HTTP API returns. Optional fields are
//! omitted when absent.

use serde::{Deserialize, Serialize};

/// A film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

/// A director
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
}

/// A genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWork {
    pub work: Work,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTopic {
    pub topic: Topic,
    pub score: f64,
}

/// A work together with its creators and topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkWithContext {
    #[serde(flatten)]
    pub work: Work,
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Neighbourhood of a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicGraph {
    pub topic: Topic,
    #[serde(default)]
    pub related_topics: Vec<ScoredTopic>,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub creators: Vec<Creator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorContributions {
    pub creator: Creator,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedWorks {
    pub work_id: String,
    pub related: Vec<ScoredWork>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<WorkWithContext>,
}

/// Answer to a natural-language question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NlQueryResponse {
    pub question: String,
    /// The Cypher that was run, with values substituted
    pub generated_query: String,
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Graph connectivity as seen by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub graph: GraphStatus,
}
