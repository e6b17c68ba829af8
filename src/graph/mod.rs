//! Embedded property graph
//!
//! An in-process stand-in for the external graph engine:
//! - Nodes with labels and properties (`Article`, `Author`, `Topic`)
//! - Directed, typed edges (`DIRECTED`, `HAS_TOPIC`)
//! - Label and identity-key indices for O(1) lookups
//! - Idempotent fixture loading from a [`Dataset`]

pub mod dataset;
pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use dataset::{CreatorRecord, Dataset, DatasetError, WorkRecord};
pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{schema, EdgeId, EdgeType, Label, NodeId};
