//! Topic co-occurrence over shared works

use crate::graph::{schema, GraphStore, NodeId};
use indexmap::IndexMap;

/// Maximum number of related topics returned by a topic subgraph
pub const RELATED_TOPICS: usize = 10;

fn topic_name(store: &GraphStore, id: NodeId) -> &str {
    store
        .get_node(id)
        .and_then(|n| n.str_property(schema::NAME))
        .unwrap_or_default()
}

/// Sort (topic, score) pairs by score desc, then name asc
fn rank(store: &GraphStore, scores: IndexMap<NodeId, usize>) -> Vec<(NodeId, usize)> {
    let mut ranked: Vec<(NodeId, usize)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| topic_name(store, a.0).cmp(topic_name(store, b.0)))
    });
    ranked
}

/// Topics sharing at least one work with `topic`, scored by the number of
/// distinct shared works. `topic` itself and anything in `exclude` are skipped.
pub fn co_occurring(store: &GraphStore, topic: NodeId, exclude: &[NodeId]) -> Vec<(NodeId, usize)> {
    let mut counts: IndexMap<NodeId, usize> = IndexMap::new();
    for work in store.in_neighbors(topic, schema::HAS_TOPIC) {
        for other in store.out_neighbors(work, schema::HAS_TOPIC) {
            if other != topic && !exclude.contains(&other) {
                *counts.entry(other).or_insert(0) += 1;
            }
        }
    }
    rank(store, counts)
}

/// Direct co-occurrence, top [`RELATED_TOPICS`]
pub fn related_one_hop(store: &GraphStore, topic: NodeId) -> Vec<(NodeId, usize)> {
    let mut ranked = co_occurring(store, topic, &[]);
    ranked.truncate(RELATED_TOPICS);
    ranked
}

/// Second-hop expansion of the one-hop ranking.
///
/// For each first-hop topic `r1` with score `s1`, every topic co-occurring
/// with `r1` (other than `r1` and the origin) scores `s1 + s2`. A topic
/// reached through several `r1` keeps its best score. Only second-hop
/// candidates are returned.
pub fn related_two_hop(store: &GraphStore, topic: NodeId) -> Vec<(NodeId, usize)> {
    let mut combined: IndexMap<NodeId, usize> = IndexMap::new();
    for (r1, s1) in related_one_hop(store, topic) {
        for (r2, s2) in co_occurring(store, r1, &[topic]) {
            let entry = combined.entry(r2).or_insert(0);
            *entry = (*entry).max(s1 + s2);
        }
    }
    let mut ranked = rank(store, combined);
    ranked.truncate(RELATED_TOPICS);
    ranked
}

/// Number of works per topic, most common first
pub fn topic_frequency(store: &GraphStore) -> Vec<(NodeId, usize)> {
    let counts: IndexMap<NodeId, usize> = store
        .get_nodes_by_label(schema::TOPIC)
        .into_iter()
        .map(|t| (t.id, store.in_neighbors(t.id, schema::HAS_TOPIC).len()))
        .filter(|(_, n)| *n > 0)
        .collect();
    rank(store, counts)
}
