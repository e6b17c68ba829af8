//! Core type definitions for the embedded graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Labels, relationship types and property keys of the films graph.
///
/// These mirror the schema the ingestion job writes into the graph engine,
/// so the Cypher templates and the embedded store agree on names.
pub mod schema {
    /// Work node label
    pub const ARTICLE: &str = "Article";
    /// Creator node label
    pub const AUTHOR: &str = "Author";
    /// Topic node label
    pub const TOPIC: &str = "Topic";

    /// `(:Author)-[:DIRECTED]->(:Article)`
    pub const DIRECTED: &str = "DIRECTED";
    /// `(:Article)-[:HAS_TOPIC]->(:Topic)`
    pub const HAS_TOPIC: &str = "HAS_TOPIC";

    /// Identity key of works and creators
    pub const WIKIDATA_ID: &str = "wikidata_id";
    /// Identity key of topics, display name of creators
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
}

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// Node label (e.g., "Article", "Topic")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

/// Relationship type (e.g., "DIRECTED", "HAS_TOPIC")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeType(String);

impl EdgeType {
    pub fn new(edge_type: impl Into<String>) -> Self {
        EdgeType(edge_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeType {
    fn from(s: &str) -> Self {
        EdgeType(s.to_string())
    }
}
