//! Native evaluation of query templates against the embedded store
//!
//! Each template is evaluated with the same semantics as its Cypher text and
//! produces rows with the same columns, so the result mapper cannot tell the
//! embedded store from a remote engine.

pub mod cooccurrence;
pub mod scoring;

use super::{CypherQuery, QueryResult, Row, RowSet, Template, Value};
use crate::graph::{schema, GraphStore, Node, NodeId, PropertyValue};
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Evaluate `query` against `store`
pub fn execute(store: &GraphStore, query: &CypherQuery) -> QueryResult<RowSet> {
    QueryExecutor::new(store).execute(query)
}

/// Read-only template evaluator
pub struct QueryExecutor<'a> {
    store: &'a GraphStore,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    pub fn execute(&self, query: &CypherQuery) -> QueryResult<RowSet> {
        let params = &query.params;
        let rows = match query.template {
            Template::Ping => vec![Row::new().with("ok", PropertyValue::Integer(1))],
            Template::WorkById => self.lookup(schema::ARTICLE, params.string("id")?),
            Template::CreatorById => self.lookup(schema::AUTHOR, params.string("id")?),
            Template::TopicByName => self.lookup(schema::TOPIC, params.string("name")?),
            Template::RelatedWorks => {
                self.related_works(params.string("id")?, params.count("limit")?)
            }
            Template::CreatorContributions => {
                self.contributions(params.string("id")?, params.count("limit")?)
            }
            Template::TopicSubgraph => {
                self.topic_subgraph(params.string("name")?, params.count("limit")?, false)
            }
            Template::TopicSubgraphTwoHop => {
                self.topic_subgraph(params.string("name")?, params.count("limit")?, true)
            }
            Template::SearchWorks => self.search(params.string("q")?, params.count("limit")?),
            Template::WorksByCreator => {
                self.works_by_creator(params.string("id")?, params.count("limit")?)
            }
            Template::RelatedWorksStructural => {
                self.related_works_structural(params.string("id")?, params.count("limit")?)
            }
            Template::TopicFrequency => self.topic_frequency(params.count("limit")?),
        };
        Ok(RowSet::from_rows(rows))
    }

    fn node_value(&self, id: NodeId) -> Value {
        self.store
            .get_node(id)
            .map(|n| Value::Node(n.clone()))
            .unwrap_or(Value::Null)
    }

    fn node_list<I: IntoIterator<Item = NodeId>>(&self, ids: I) -> Value {
        Value::List(ids.into_iter().map(|id| self.node_value(id)).collect())
    }

    /// Distinct creators of `works`, in first-seen order
    fn creators_of(&self, works: &[NodeId]) -> IndexSet<NodeId> {
        works
            .iter()
            .flat_map(|w| self.store.in_neighbors(*w, schema::DIRECTED))
            .collect()
    }

    /// Distinct topics of `works`, in first-seen order
    fn topics_of(&self, works: &[NodeId]) -> IndexSet<NodeId> {
        works
            .iter()
            .flat_map(|w| self.store.out_neighbors(*w, schema::HAS_TOPIC))
            .collect()
    }

    fn lookup(&self, label: &str, identity: &str) -> Vec<Row> {
        self.store
            .find_node(label, identity)
            .map(|n| Row::new().with("n", n.clone()))
            .into_iter()
            .collect()
    }

    fn related_works(&self, work_id: &str, limit: usize) -> Vec<Row> {
        let Some(target) = self.store.find_node(schema::ARTICLE, work_id) else {
            return Vec::new();
        };
        scoring::score_related(self.store, target, true)
            .into_iter()
            .take(limit)
            .map(|c| {
                Row::new()
                    .with("other", c.node.clone())
                    .with("score", PropertyValue::Float(c.score))
            })
            .collect()
    }

    fn related_works_structural(&self, work_id: &str, limit: usize) -> Vec<Row> {
        let Some(target) = self.store.find_node(schema::ARTICLE, work_id) else {
            return Vec::new();
        };
        scoring::score_related(self.store, target, false)
            .into_iter()
            .take(limit)
            .map(|c| flat_work_row(c.node).with("score", PropertyValue::Float(c.score)))
            .collect()
    }

    fn contributions(&self, creator_id: &str, limit: usize) -> Vec<Row> {
        let Some(creator) = self.store.find_node(schema::AUTHOR, creator_id) else {
            return Vec::new();
        };
        let works: Vec<NodeId> = self
            .store
            .out_neighbors(creator.id, schema::DIRECTED)
            .into_iter()
            .take(limit)
            .collect();
        let topics = self.topics_of(&works);

        vec![Row::new()
            .with("works", self.node_list(works.iter().copied()))
            .with("topics", self.node_list(topics))]
    }

    fn topic_subgraph(&self, name: &str, limit: usize, two_hop: bool) -> Vec<Row> {
        let Some(topic) = self.store.find_node(schema::TOPIC, name) else {
            return Vec::new();
        };
        let works: Vec<NodeId> = self
            .store
            .in_neighbors(topic.id, schema::HAS_TOPIC)
            .into_iter()
            .take(limit)
            .collect();
        let creators = self.creators_of(&works);

        let ranked = if two_hop {
            cooccurrence::related_two_hop(self.store, topic.id)
        } else {
            cooccurrence::related_one_hop(self.store, topic.id)
        };
        let related = ranked
            .into_iter()
            .map(|(id, score)| {
                let mut entry = IndexMap::new();
                entry.insert("topic".to_string(), self.node_value(id));
                entry.insert("score".to_string(), Value::Property(PropertyValue::from(score)));
                Value::Map(entry)
            })
            .collect();

        vec![Row::new()
            .with("t", topic.clone())
            .with("works", self.node_list(works.iter().copied()))
            .with("creators", self.node_list(creators))
            .with("related", Value::List(related))]
    }

    fn search(&self, q: &str, limit: usize) -> Vec<Row> {
        let needle = q.to_lowercase();
        let matches = |node: &Node, key: &str| {
            node.str_property(key)
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        };

        let mut hits: IndexSet<NodeId> = IndexSet::new();
        for work in self.store.get_nodes_by_label(schema::ARTICLE) {
            if matches(work, schema::TITLE) {
                hits.insert(work.id);
            }
        }
        for creator in self.store.get_nodes_by_label(schema::AUTHOR) {
            if matches(creator, schema::NAME) {
                hits.extend(self.store.out_neighbors(creator.id, schema::DIRECTED));
            }
        }
        for topic in self.store.get_nodes_by_label(schema::TOPIC) {
            if matches(topic, schema::NAME) {
                hits.extend(self.store.in_neighbors(topic.id, schema::HAS_TOPIC));
            }
        }

        hits.into_iter()
            .take(limit)
            .map(|work| {
                Row::new()
                    .with("w", self.node_value(work))
                    .with("creators", self.node_list(self.creators_of(&[work])))
                    .with("topics", self.node_list(self.topics_of(&[work])))
            })
            .collect()
    }

    fn works_by_creator(&self, creator_id: &str, limit: usize) -> Vec<Row> {
        let Some(creator) = self.store.find_node(schema::AUTHOR, creator_id) else {
            return Vec::new();
        };
        let mut works: Vec<&Node> = self
            .store
            .out_neighbors(creator.id, schema::DIRECTED)
            .into_iter()
            .filter_map(|id| self.store.get_node(id))
            .collect();
        works.sort_by(|a, b| {
            b.int_property(schema::YEAR)
                .cmp(&a.int_property(schema::YEAR))
                .then_with(|| {
                    a.str_property(schema::WIKIDATA_ID)
                        .cmp(&b.str_property(schema::WIKIDATA_ID))
                })
        });
        works.into_iter().take(limit).map(flat_work_row).collect()
    }

    fn topic_frequency(&self, limit: usize) -> Vec<Row> {
        cooccurrence::topic_frequency(self.store)
            .into_iter()
            .take(limit)
            .map(|(id, count)| {
                let name = self
                    .store
                    .get_node(id)
                    .and_then(|n| n.get_property(schema::NAME).cloned())
                    .unwrap_or(PropertyValue::Null);
                Row::new()
                    .with("genre", name)
                    .with("n", PropertyValue::from(count))
            })
            .collect()
    }
}

/// `wikidata_id`, `title`, `year` columns of a work
fn flat_work_row(work: &Node) -> Row {
    let prop = |key: &str| work.get_property(key).cloned().unwrap_or(PropertyValue::Null);
    Row::new()
        .with("wikidata_id", prop(schema::WIKIDATA_ID))
        .with("title", prop(schema::TITLE))
        .with("year", prop(schema::YEAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CreatorRecord, Dataset, WorkRecord};
    use crate::query::library;

    fn work(id: &str, year: Option<i64>, creators: &[&str], topics: &[&str]) -> WorkRecord {
        WorkRecord {
            id: id.into(),
            title: format!("Film {}", id),
            year,
            creators: creators
                .iter()
                .map(|c| CreatorRecord { id: c.to_string(), name: Some(format!("Director {}", c)) })
                .collect(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn store() -> GraphStore {
        Dataset {
            works: vec![
                work("Q1", Some(2000), &["Q90"], &["Drama", "War"]),
                work("Q2", Some(2001), &["Q90"], &["Drama"]),
                work("Q3", None, &["Q91"], &["War", "History"]),
                work("Q4", Some(1990), &["Q91"], &["Comedy"]),
            ],
        }
        .into_store()
        .unwrap()
    }

    #[test]
    fn test_missing_parameter() {
        let store = store();
        let query = CypherQuery::new(Template::RelatedWorks, crate::query::Params::new());
        assert!(execute(&store, &query).is_err());
    }

    #[test]
    fn test_ping() {
        let rows = execute(&store(), &library::ping()).unwrap();
        let row = rows.single().unwrap();
        assert_eq!(row.get("ok").and_then(Value::as_float), Some(1.0));
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let store = store();
        assert!(execute(&store, &library::work_by_id("Q404")).unwrap().is_empty());
        assert_eq!(execute(&store, &library::topic_by_name("War")).unwrap().len(), 1);
    }

    #[test]
    fn test_works_by_creator_orders_missing_year_last() {
        let store = store();
        let rows = execute(&store, &library::works_by_creator("Q91", 10)).unwrap();
        let ids: Vec<_> = rows
            .iter()
            .filter_map(|r| r.get("wikidata_id").and_then(|v| v.as_property()).cloned())
            .collect();
        assert_eq!(ids, vec![PropertyValue::from("Q4"), PropertyValue::from("Q3")]);
    }

    #[test]
    fn test_topic_frequency() {
        let rows = execute(&store(), &library::topic_frequency(2)).unwrap();
        let top: Vec<_> = rows
            .iter()
            .map(|r| r.get("genre").unwrap().to_json())
            .collect();
        // Drama and War both have two works; ties broken by name
        assert_eq!(top, vec![serde_json::json!("Drama"), serde_json::json!("War")]);
    }

    #[test]
    fn test_search_orders_title_then_creator_then_topic() {
        let store = store();
        let rows = execute(&store, &library::search_works("history", 10)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows[0].get("w").unwrap().str_property("wikidata_id"), Some("Q3"));
        assert_eq!(rows.rows[0].list("topics").len(), 2);
    }
}
