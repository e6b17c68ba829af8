//! Directed, typed edge between two nodes

use super::types::{EdgeId, EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// A directed edge in the property graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Relationship type (e.g., "DIRECTED")
    pub edge_type: EdgeType,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, edge_type: impl Into<EdgeType>) -> Self {
        Edge {
            id,
            source,
            target,
            edge_type: edge_type.into(),
        }
    }

    /// Check whether this edge has the given relationship type
    pub fn is_type(&self, edge_type: &str) -> bool {
        self.edge_type.as_str() == edge_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_check() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), "DIRECTED");
        assert!(edge.is_type("DIRECTED"));
        assert!(!edge.is_type("HAS_TOPIC"));
        assert_eq!(edge.source, NodeId::new(1));
    }
}
