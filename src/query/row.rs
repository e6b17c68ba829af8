//! Result rows returned by a graph backend
//!
//! Rows are loosely typed: a cell may be a node, a map, a list or a scalar,
//! and any of them may be null or missing. Accessors return `Option` or an
//! empty slice instead of failing.

use crate::graph::{Node, PropertyValue};
use indexmap::IndexMap;

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A node materialised by the embedded store
    Node(Node),
    /// A map: a map literal, or a node's property bag from a remote engine
    Map(IndexMap<String, Value>),
    /// A list of values
    List(Vec<Value>),
    /// A scalar
    Property(PropertyValue),
    /// Null
    Null,
}

impl Value {
    /// Check if this is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Property(PropertyValue::Null))
    }

    /// Get as property if this is a scalar value
    pub fn as_property(&self) -> Option<&PropertyValue> {
        match self {
            Value::Property(prop) => Some(prop),
            _ => None,
        }
    }

    /// Elements of a list; empty for null or any non-list value
    pub fn as_list(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            _ => &[],
        }
    }

    /// Field of a map value
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Scalar property of a node-like value (a node or a property map)
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        let prop = match self {
            Value::Node(node) => node.get_property(key),
            Value::Map(map) => map.get(key).and_then(Value::as_property),
            _ => None,
        };
        prop.filter(|p| !p.is_null())
    }

    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(PropertyValue::as_string)
    }

    pub fn int_property(&self, key: &str) -> Option<i64> {
        self.property(key).and_then(PropertyValue::as_integer)
    }

    /// Numeric scalar as f64
    pub fn as_float(&self) -> Option<f64> {
        self.as_property().and_then(PropertyValue::as_float)
    }

    /// Convert from a JSON value; objects become maps
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from_json).collect()),
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
            scalar => PropertyValue::from_json(scalar)
                .map(Value::Property)
                .unwrap_or(Value::Null),
        }
    }

    /// Convert to JSON; nodes render as their property map
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Node(node) => serde_json::Value::Object(
                node.properties
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Property(prop) => prop.to_json(),
            Value::Null => serde_json::Value::Null,
        }
    }
}

impl From<PropertyValue> for Value {
    fn from(prop: PropertyValue) -> Self {
        Value::Property(prop)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

/// A single result row: column name -> value, in column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style bind
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bind(column, value);
        self
    }

    /// Bind a column to a value
    pub fn bind(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// List cell; empty when the column is missing, null or not a list
    pub fn list(&self, column: &str) -> &[Value] {
        self.get(column).map(Value::as_list).unwrap_or(&[])
    }

    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// An ordered sequence of rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Rows built in code; columns are taken from the first row
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|r| r.columns().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// At most one row. Extra rows are dropped with a warning.
    pub fn single(self) -> Option<Row> {
        if self.rows.len() > 1 {
            tracing::warn!(rows = self.rows.len(), "expected at most one row, using the first");
        }
        self.rows.into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl IntoIterator for RowSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    #[test]
    fn test_node_and_map_property_access() {
        let mut node = Node::new(NodeId::new(1));
        node.set_property("title", "Alien");
        node.set_property("year", PropertyValue::Null);
        let node = Value::Node(node);
        assert_eq!(node.str_property("title"), Some("Alien"));
        assert_eq!(node.int_property("year"), None);

        let map = Value::from_json(&serde_json::json!({"title": "Heat", "year": 1995}));
        assert_eq!(map.str_property("title"), Some("Heat"));
        assert_eq!(map.int_property("year"), Some(1995));
    }

    #[test]
    fn test_missing_and_null_lists_are_empty() {
        let row = Row::new().with("works", Value::Null);
        assert!(row.list("works").is_empty());
        assert!(row.list("absent").is_empty());
    }

    #[test]
    fn test_single() {
        let set = RowSet::from_rows(vec![
            Row::new().with("n", PropertyValue::Integer(1)),
            Row::new().with("n", PropertyValue::Integer(2)),
        ]);
        assert_eq!(set.columns, vec!["n".to_string()]);
        let row = set.single().unwrap();
        assert_eq!(row.get("n").and_then(Value::as_float), Some(1.0));

        assert!(RowSet::default().single().is_none());
    }

    #[test]
    fn test_json_round_shape() {
        let json = serde_json::json!({"topic": {"name": "Drama"}, "score": 3});
        let value = Value::from_json(&json);
        assert_eq!(value.field("score").and_then(Value::as_float), Some(3.0));
        assert_eq!(value.to_json(), json);
    }
}
