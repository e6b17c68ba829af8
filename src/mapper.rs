//! Row-to-entity mapping
//!
//! Every function here is total: missing or null cells become empty lists or
//! `None`, and node-like values without their identity property are skipped.
//! Lists are deduplicated by identity, keeping the first occurrence.

use crate::graph::schema;
use crate::models::{
    Creator, CreatorContributions, ScoredTopic, ScoredWork, Topic, TopicGraph, Work,
    WorkWithContext,
};
use crate::query::{Row, Value};
use std::collections::HashSet;

pub fn work_from(value: &Value) -> Option<Work> {
    let id = value.str_property(schema::WIKIDATA_ID)?;
    Some(Work {
        id: id.to_string(),
        title: value.str_property(schema::TITLE).unwrap_or_default().to_string(),
        year: value.int_property(schema::YEAR),
    })
}

pub fn creator_from(value: &Value) -> Option<Creator> {
    let id = value.str_property(schema::WIKIDATA_ID)?;
    Some(Creator {
        id: id.to_string(),
        name: value.str_property(schema::NAME).unwrap_or_default().to_string(),
    })
}

pub fn topic_from(value: &Value) -> Option<Topic> {
    value.str_property(schema::NAME).map(|name| Topic { name: name.to_string() })
}

/// Map each value, drop failures, keep the first entity per key
fn distinct<T, K, M, F>(values: &[Value], map: M, key: F) -> Vec<T>
where
    M: Fn(&Value) -> Option<T>,
    F: Fn(&T) -> K,
    K: Eq + std::hash::Hash,
{
    let mut seen = HashSet::new();
    values
        .iter()
        .filter_map(map)
        .filter(|item| seen.insert(key(item)))
        .collect()
}

pub fn works_from(values: &[Value]) -> Vec<Work> {
    distinct(values, work_from, |w| w.id.clone())
}

pub fn creators_from(values: &[Value]) -> Vec<Creator> {
    distinct(values, creator_from, |c| c.id.clone())
}

pub fn topics_from(values: &[Value]) -> Vec<Topic> {
    distinct(values, topic_from, |t| t.name.clone())
}

/// Numeric cell as a score; integers are widened, anything else is 0.0
pub fn score_from(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_float).unwrap_or(0.0)
}

/// `{topic, score}` maps, in order
pub fn scored_topics_from(values: &[Value]) -> Vec<ScoredTopic> {
    distinct(
        values,
        |entry| {
            let topic = topic_from(entry.field("topic")?)?;
            Some(ScoredTopic { topic, score: score_from(entry.field("score")) })
        },
        |st| st.topic.name.clone(),
    )
}

/// Row with `other` and `score` columns
pub fn scored_work_from(row: &Row) -> Option<ScoredWork> {
    let work = work_from(row.get("other")?)?;
    Some(ScoredWork { work, score: score_from(row.get("score")) })
}

/// Row with `w`, `creators` and `topics` columns
pub fn work_with_context_from(row: &Row) -> Option<WorkWithContext> {
    let work = work_from(row.get("w")?)?;
    Some(WorkWithContext {
        work,
        creators: creators_from(row.list("creators")),
        topics: topics_from(row.list("topics")),
    })
}

/// Row with `t`, `works`, `creators` and `related` columns
pub fn topic_graph_from(row: &Row) -> Option<TopicGraph> {
    let topic = topic_from(row.get("t")?)?;
    Some(TopicGraph {
        topic,
        related_topics: scored_topics_from(row.list("related")),
        works: works_from(row.list("works")),
        creators: creators_from(row.list("creators")),
    })
}

/// Contributions of `creator` from a row with `works` and `topics` columns.
/// A missing row means no works.
pub fn contributions_from(creator: Creator, row: Option<&Row>) -> CreatorContributions {
    let (works, topics) = match row {
        Some(row) => (works_from(row.list("works")), topics_from(row.list("topics"))),
        None => (Vec::new(), Vec::new()),
    };
    CreatorContributions { creator, works, topics }
}

/// Free-form row as a JSON object
pub fn json_row(row: &Row) -> serde_json::Map<String, serde_json::Value> {
    row.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyValue;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from_json(&json)
    }

    #[test]
    fn test_work_without_identity_is_skipped() {
        assert!(work_from(&v(json!({"title": "No id"}))).is_none());
        assert!(work_from(&Value::Null).is_none());
        let work = work_from(&v(json!({"wikidata_id": "Q1", "title": "Alien", "year": null}))).unwrap();
        assert_eq!(work.year, None);
    }

    #[test]
    fn test_lists_are_deduplicated() {
        let list = vec![
            v(json!({"wikidata_id": "Q2", "name": "First"})),
            Value::Null,
            v(json!({"wikidata_id": "Q2", "name": "Second"})),
            v(json!({"wikidata_id": "Q3", "name": "Other"})),
        ];
        let creators = creators_from(&list);
        assert_eq!(creators.len(), 2);
        assert_eq!(creators[0].name, "First");
    }

    #[test]
    fn test_scores_accept_integers() {
        let related = vec![
            v(json!({"topic": {"name": "War"}, "score": 3})),
            v(json!({"topic": {"name": "Drama"}, "score": 1.5})),
            v(json!({"topic": null, "score": 9})),
        ];
        let scored = scored_topics_from(&related);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].score, 3.0);
        assert_eq!(scored[1].score, 1.5);
    }

    #[test]
    fn test_topic_graph_with_missing_columns() {
        let row = Row::new().with("t", v(json!({"name": "Drama"}))).with("works", Value::Null);
        let graph = topic_graph_from(&row).unwrap();
        assert_eq!(graph.topic.name, "Drama");
        assert!(graph.works.is_empty());
        assert!(graph.related_topics.is_empty());
        assert!(graph.creators.is_empty());
    }

    #[test]
    fn test_contributions_without_row() {
        let creator = Creator { id: "Q9".into(), name: "Nobody".into() };
        let c = contributions_from(creator.clone(), None);
        assert_eq!(c.creator, creator);
        assert!(c.works.is_empty() && c.topics.is_empty());
    }

    #[test]
    fn test_json_row() {
        let row = Row::new()
            .with("genre", PropertyValue::from("Drama"))
            .with("n", PropertyValue::Integer(4));
        assert_eq!(serde_json::Value::Object(json_row(&row)), json!({"genre": "Drama", "n": 4}));
    }
}
