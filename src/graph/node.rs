//! Node implementation for the embedded property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A node in the property graph.
///
/// Labels live in the store's label and identity indices, not on the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Properties associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node without properties
    pub fn new(id: NodeId) -> Self {
        Self::new_with_properties(id, PropertyMap::new())
    }

    /// Create a new node with properties
    pub fn new_with_properties(id: NodeId, properties: PropertyMap) -> Self {
        Node { id, properties }
    }

    /// Set a property value, returning the previous one
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// String property, `None` when absent or not a string
    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.get_property(key).and_then(PropertyValue::as_string)
    }

    /// Integer property, `None` when absent or null
    pub fn int_property(&self, key: &str) -> Option<i64> {
        self.get_property(key).and_then(PropertyValue::as_integer)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_properties() {
        let mut node = Node::new(NodeId::new(1));
        assert!(node.set_property("title", "Alien").is_none());
        node.set_property("year", 1979i64);
        assert_eq!(node.str_property("title"), Some("Alien"));
        assert_eq!(node.int_property("year"), Some(1979));
        assert_eq!(node.int_property("title"), None);
    }

    #[test]
    fn test_node_equality_by_id() {
        let a = Node::new(NodeId::new(3));
        let mut b = Node::new(NodeId::new(3));
        b.set_property("name", "Horror");
        assert_eq!(a, b);
    }
}
