//! Related-works scoring
//!
//! score = 2.0 x shared creators + 1.0 x shared topics + year bonus

use crate::graph::{schema, GraphStore, Node, NodeId};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

pub const CREATOR_WEIGHT: f64 = 2.0;
pub const TOPIC_WEIGHT: f64 = 1.0;

/// Year-proximity bonus: 0.5 within one year, 0.2 within three, else 0.0.
/// Zero whenever either year is missing.
pub fn year_bonus(a: Option<i64>, b: Option<i64>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => match a.abs_diff(b) {
            0..=1 => 0.5,
            2..=3 => 0.2,
            _ => 0.0,
        },
        _ => 0.0,
    }
}

/// A candidate with its total score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub node: &'a Node,
    pub score: f64,
}

impl ScoredCandidate<'_> {
    fn year(&self) -> Option<i64> {
        self.node.int_property(schema::YEAR)
    }

    fn wikidata_id(&self) -> &str {
        self.node.str_property(schema::WIKIDATA_ID).unwrap_or_default()
    }
}

/// Score every other work against `target`.
///
/// Only candidates with a strictly positive score are returned, ordered by
/// score desc. With the year bonus enabled, ties are broken by year desc
/// (missing year last); remaining ties by `wikidata_id` asc.
pub fn score_related<'a>(
    store: &'a GraphStore,
    target: &Node,
    with_year_bonus: bool,
) -> Vec<ScoredCandidate<'a>> {
    let creators: FxHashSet<NodeId> = store
        .in_neighbors(target.id, schema::DIRECTED)
        .into_iter()
        .collect();
    let topics: FxHashSet<NodeId> = store
        .out_neighbors(target.id, schema::HAS_TOPIC)
        .into_iter()
        .collect();
    let target_year = target.int_property(schema::YEAR);

    let mut scored: Vec<ScoredCandidate<'a>> = store
        .get_nodes_by_label(schema::ARTICLE)
        .into_iter()
        .filter(|other| other.id != target.id)
        .filter_map(|other| {
            let shared_creators = store
                .in_neighbors(other.id, schema::DIRECTED)
                .iter()
                .filter(|c| creators.contains(c))
                .count();
            let shared_topics = store
                .out_neighbors(other.id, schema::HAS_TOPIC)
                .iter()
                .filter(|t| topics.contains(t))
                .count();

            let mut score =
                shared_creators as f64 * CREATOR_WEIGHT + shared_topics as f64 * TOPIC_WEIGHT;
            if with_year_bonus {
                score += year_bonus(other.int_property(schema::YEAR), target_year);
            }
            (score > 0.0).then_some(ScoredCandidate { node: other, score })
        })
        .collect();

    scored.sort_by(|a, b| {
        let by_score = b.score.total_cmp(&a.score);
        let by_year = if with_year_bonus {
            // None < Some(_), so a missing year sorts last when descending
            b.year().cmp(&a.year())
        } else {
            Ordering::Equal
        };
        by_score
            .then(by_year)
            .then_with(|| a.wikidata_id().cmp(b.wikidata_id()))
    });
    scored
}
