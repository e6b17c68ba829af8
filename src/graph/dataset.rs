//! Fixture datasets for the embedded store
//!
//! A dataset lists works together with their creators and topics. Loading is
//! a merge keyed on identity properties, so loading the same file twice
//! leaves the graph unchanged.

use super::property::{PropertyMap, PropertyValue};
use super::store::{GraphError, GraphStore};
use super::types::schema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// A creator credited on a work.
///
/// `name` may be omitted on repeat mentions; an absent name never clears a
/// name merged earlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A work with its creators and topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub creators: Vec<CreatorRecord>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub works: Vec<WorkRecord>,
}

impl Dataset {
    /// Read a dataset file; `.yaml`/`.yml` are parsed as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
            _ => Ok(serde_json::from_str(&text)?),
        }
    }

    /// Merge every work, creator, topic and relationship into `store`
    pub fn load_into(&self, store: &mut GraphStore) -> Result<(), DatasetError> {
        for work in &self.works {
            let mut props = PropertyMap::new();
            props.insert(schema::WIKIDATA_ID.to_string(), work.id.as_str().into());
            props.insert(schema::TITLE.to_string(), work.title.as_str().into());
            props.insert(schema::YEAR.to_string(), PropertyValue::from(work.year));
            let work_id = store.merge_node(schema::ARTICLE, props)?;

            for creator in &work.creators {
                let mut props = PropertyMap::new();
                props.insert(schema::WIKIDATA_ID.to_string(), creator.id.as_str().into());
                props.insert(schema::NAME.to_string(), PropertyValue::from(creator.name.as_deref()));
                let creator_id = store.merge_node(schema::AUTHOR, props)?;
                store.merge_edge(creator_id, work_id, schema::DIRECTED)?;
            }

            for topic in &work.topics {
                let mut props = PropertyMap::new();
                props.insert(schema::NAME.to_string(), topic.as_str().into());
                let topic_id = store.merge_node(schema::TOPIC, props)?;
                store.merge_edge(work_id, topic_id, schema::HAS_TOPIC)?;
            }
        }
        tracing::debug!(works = self.works.len(), nodes = store.node_count(), "dataset loaded");
        Ok(())
    }

    /// Build a fresh store from this dataset
    pub fn into_store(&self) -> Result<GraphStore, DatasetError> {
        let mut store = GraphStore::new();
        self.load_into(&mut store)?;
        Ok(store)
    }
}
