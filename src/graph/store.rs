//! In-memory graph storage
//!
//! Arena-style storage with adjacency lists. Node and edge ids are dense and
//! assigned in insertion order, which gives every traversal a stable
//! "collection order" that the query executor relies on for determinism.

use super::edge::Edge;
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{schema, EdgeId, EdgeType, Label, NodeId};
use rustc_hash::FxHashSet;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("{label} node is missing its identity property '{key}'")]
    MissingIdentity { label: String, key: &'static str },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Identity property for nodes of a given label, if the label has one.
pub fn identity_key(label: &str) -> Option<&'static str> {
    match label {
        schema::ARTICLE | schema::AUTHOR => Some(schema::WIKIDATA_ID),
        schema::TOPIC => Some(schema::NAME),
        _ => None,
    }
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (dense arena, id = index + 1)
/// - edges: EdgeId -> Edge (dense arena, id = index + 1)
/// - outgoing / incoming: adjacency lists in insertion order
/// - label_index: Label -> nodes in insertion order
/// - key_index: (Label, identity value) -> NodeId
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    label_index: HashMap<Label, Vec<NodeId>>,
    key_index: HashMap<(Label, String), NodeId>,
    edge_keys: FxHashSet<(NodeId, NodeId, EdgeType)>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with a label and properties
    pub fn create_node(&mut self, label: impl Into<Label>, properties: PropertyMap) -> NodeId {
        let label = label.into();
        let node_id = NodeId::new(self.nodes.len() as u64 + 1);
        let node = Node::new_with_properties(node_id, properties);

        if let Some(key) = identity_key(label.as_str()) {
            if let Some(value) = node.str_property(key) {
                self.key_index.insert((label.clone(), value.to_string()), node_id);
            }
        }
        self.label_index.entry(label).or_default().push(node_id);

        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        node_id
    }

    /// Create-or-update a node keyed on its label's identity property.
    ///
    /// Properties of an existing node are overwritten, never removed.
    pub fn merge_node(&mut self, label: &str, properties: PropertyMap) -> GraphResult<NodeId> {
        let key = identity_key(label).ok_or(GraphError::MissingIdentity {
            label: label.to_string(),
            key: "<none>",
        })?;
        let identity = properties
            .get(key)
            .and_then(PropertyValue::as_string)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| GraphError::MissingIdentity {
                label: label.to_string(),
                key,
            })?;

        let existing = self.key_index.get(&(Label::new(label), identity)).copied();
        match existing {
            Some(existing) => {
                let node = self.node_mut(existing)?;
                for (k, v) in properties {
                    if !v.is_null() {
                        node.set_property(k, v);
                    }
                }
                Ok(existing)
            }
            None => Ok(self.create_node(label, properties)),
        }
    }

    /// Create a directed edge between two existing nodes
    pub fn create_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
    ) -> GraphResult<EdgeId> {
        if self.get_node(source).is_none() {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if self.get_node(target).is_none() {
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let edge_type = edge_type.into();
        let edge_id = EdgeId::new(self.edges.len() as u64 + 1);
        self.edge_keys.insert((source, target, edge_type.clone()));
        self.edges.push(Edge::new(edge_id, source, target, edge_type));
        self.outgoing[Self::slot(source)].push(edge_id);
        self.incoming[Self::slot(target)].push(edge_id);
        Ok(edge_id)
    }

    /// Create an edge unless one of the same type already joins the pair
    pub fn merge_edge(&mut self, source: NodeId, target: NodeId, edge_type: &str) -> GraphResult<()> {
        if self.edge_keys.contains(&(source, target, EdgeType::from(edge_type))) {
            return Ok(());
        }
        self.create_edge(source, target, edge_type).map(|_| ())
    }

    /// Get a node by id
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        let slot = usize::try_from(id.as_u64()).ok()?.checked_sub(1)?;
        self.nodes.get(slot)
    }

    fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node> {
        self.nodes
            .get_mut(Self::slot(id))
            .ok_or(GraphError::NodeNotFound(id))
    }

    fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        let slot = usize::try_from(id.as_u64()).ok()?.checked_sub(1)?;
        self.edges.get(slot)
    }

    /// Arena slot of a node id; id 0 maps past the end
    fn slot(id: NodeId) -> usize {
        (id.as_u64() as usize).wrapping_sub(1)
    }

    /// Look a node up by its label's identity property
    pub fn find_node(&self, label: &str, identity: &str) -> Option<&Node> {
        self.key_index
            .get(&(Label::new(label), identity.to_string()))
            .and_then(|id| self.get_node(*id))
    }

    /// Get all nodes with a label, in insertion order
    pub fn get_nodes_by_label(&self, label: &str) -> Vec<&Node> {
        self.label_index
            .get(&Label::new(label))
            .map(|ids| ids.iter().filter_map(|id| self.get_node(*id)).collect())
            .unwrap_or_default()
    }

    /// Distinct targets of `node`'s outgoing edges of a type, in edge order
    pub fn out_neighbors(&self, node: NodeId, edge_type: &str) -> Vec<NodeId> {
        self.neighbors(self.outgoing.get(Self::slot(node)), edge_type, |e| e.target)
    }

    /// Distinct sources of `node`'s incoming edges of a type, in edge order
    pub fn in_neighbors(&self, node: NodeId, edge_type: &str) -> Vec<NodeId> {
        self.neighbors(self.incoming.get(Self::slot(node)), edge_type, |e| e.source)
    }

    fn neighbors(
        &self,
        adjacency: Option<&Vec<EdgeId>>,
        edge_type: &str,
        endpoint: impl Fn(&Edge) -> NodeId,
    ) -> Vec<NodeId> {
        let mut seen = FxHashSet::default();
        adjacency
            .into_iter()
            .flatten()
            .filter_map(|id| self.get_edge(*id))
            .filter(|edge| edge.is_type(edge_type))
            .map(endpoint)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, PropertyValue)]) -> PropertyMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_create_and_find_node() {
        let mut store = GraphStore::new();
        let id = store.create_node(
            schema::ARTICLE,
            props(&[("wikidata_id", "Q1".into()), ("title", "Alien".into())]),
        );

        assert_eq!(store.node_count(), 1);
        let node = store.find_node(schema::ARTICLE, "Q1").unwrap();
        assert_eq!(node.id, id);
        assert!(store.find_node(schema::AUTHOR, "Q1").is_none());
    }

    #[test]
    fn test_merge_node_is_idempotent() {
        let mut store = GraphStore::new();
        let first = store
            .merge_node(schema::TOPIC, props(&[("name", "Drama".into())]))
            .unwrap();
        let second = store
            .merge_node(schema::TOPIC, props(&[("name", "Drama".into())]))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_merge_node_requires_identity() {
        let mut store = GraphStore::new();
        let err = store
            .merge_node(schema::ARTICLE, props(&[("title", "No id".into())]))
            .unwrap_err();
        assert!(matches!(err, GraphError::MissingIdentity { key: "wikidata_id", .. }));
    }

    #[test]
    fn test_edges_and_neighbors() {
        let mut store = GraphStore::new();
        let director = store.create_node(schema::AUTHOR, props(&[("wikidata_id", "Q10".into())]));
        let a = store.create_node(schema::ARTICLE, props(&[("wikidata_id", "Q1".into())]));
        let b = store.create_node(schema::ARTICLE, props(&[("wikidata_id", "Q2".into())]));

        store.create_edge(director, a, schema::DIRECTED).unwrap();
        store.create_edge(director, b, schema::DIRECTED).unwrap();
        store.merge_edge(director, a, schema::DIRECTED).unwrap();

        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.out_neighbors(director, schema::DIRECTED), vec![a, b]);
        assert_eq!(store.in_neighbors(b, schema::DIRECTED), vec![director]);
        assert!(store.out_neighbors(director, schema::HAS_TOPIC).is_empty());
    }

    #[test]
    fn test_edge_to_missing_node() {
        let mut store = GraphStore::new();
        let a = store.create_node(schema::ARTICLE, props(&[("wikidata_id", "Q1".into())]));
        let err = store.create_edge(a, NodeId::new(99), schema::HAS_TOPIC).unwrap_err();
        assert_eq!(err, GraphError::InvalidEdgeTarget(NodeId::new(99)));
    }

    #[test]
    fn test_label_index_order() {
        let mut store = GraphStore::new();
        for name in ["Drama", "Comedy", "Horror"] {
            store.create_node(schema::TOPIC, props(&[("name", name.into())]));
        }
        let names: Vec<_> = store
            .get_nodes_by_label(schema::TOPIC)
            .iter()
            .filter_map(|n| n.str_property("name"))
            .collect();
        assert_eq!(names, vec!["Drama", "Comedy", "Horror"]);
    }
}
