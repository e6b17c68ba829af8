mod common;

use filmgraph::{Depth, FilmGraphError};

fn names(topics: &[filmgraph::ScoredTopic]) -> Vec<(&str, f64)> {
    topics.iter().map(|t| (t.topic.name.as_str(), t.score)).collect()
}

#[tokio::test]
async fn test_depth_one() {
    let graph = common::graph().topic_subgraph("War", Depth::One, None).await.unwrap();
    assert_eq!(graph.topic.name, "War");

    let works: Vec<_> = graph.works.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(works, vec!["Q1", "Q3"]);
    let creators: Vec<_> = graph.creators.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(creators, vec!["Q100", "Q101"]);

    // equal scores ordered by name
    assert_eq!(names(&graph.related_topics), vec![("Drama", 1.0), ("History", 1.0)]);
}

#[tokio::test]
async fn test_depth_two_returns_second_hop_only() {
    let graph = common::graph().topic_subgraph("War", Depth::Two, None).await.unwrap();
    // War -> Drama (1) -> Romance (1): combined 2. Drama and History are
    // first-hop topics and are not repeated.
    assert_eq!(names(&graph.related_topics), vec![("Romance", 2.0)]);
    assert_eq!(graph.works.len(), 2);
}

#[tokio::test]
async fn test_works_limit_and_creator_dedup() {
    let graph = common::graph().topic_subgraph("Drama", Depth::One, Some(2)).await.unwrap();
    let works: Vec<_> = graph.works.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(works, vec!["Q1", "Q2"]);
    // both works share one director
    assert_eq!(graph.creators.len(), 1);
    assert_eq!(names(&graph.related_topics), vec![("Romance", 1.0), ("War", 1.0)]);
}

#[tokio::test]
async fn test_single_work_limit() {
    let graph = common::graph().topic_subgraph("War", Depth::One, Some(1)).await.unwrap();
    let works: Vec<_> = graph.works.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(works, vec!["Q1"]);
    // only the director of Q1, not of Q3
    let creators: Vec<_> = graph.creators.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(creators, vec!["Q100"]);
}

#[tokio::test]
async fn test_repeatable() {
    let graph = common::graph();
    for depth in [Depth::One, Depth::Two] {
        let first = graph.topic_subgraph("Drama", depth, None).await.unwrap();
        let second = graph.topic_subgraph("Drama", depth, None).await.unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_topic_without_cooccurrence() {
    for depth in [Depth::One, Depth::Two] {
        let graph = common::graph().topic_subgraph("Comedy", depth, None).await.unwrap();
        assert!(graph.related_topics.is_empty());
        assert_eq!(graph.works.len(), 1);
        assert_eq!(graph.works[0].year, None);
    }
}

#[tokio::test]
async fn test_related_topics_capped() {
    use filmgraph::graph::{CreatorRecord, Dataset, WorkRecord};
    use filmgraph::{EmbeddedBackend, FilmGraph};
    use std::sync::Arc;

    // one work tagged with the hub topic and fifteen others
    let mut topics = vec!["Hub".to_string()];
    topics.extend((0..15).map(|i| format!("T{:02}", i)));
    let dataset = Dataset {
        works: vec![WorkRecord {
            id: "Q1".into(),
            title: "Everything".into(),
            year: None,
            creators: vec![CreatorRecord { id: "Q9".into(), name: Some("Someone".into()) }],
            topics,
        }],
    };
    let graph = FilmGraph::new(Arc::new(EmbeddedBackend::from_store(dataset.into_store().unwrap())));

    let one = graph.topic_subgraph("Hub", Depth::One, None).await.unwrap();
    assert_eq!(one.related_topics.len(), 10);
    assert_eq!(one.related_topics[0].topic.name, "T00");

    // fifteen second-hop candidates, all scoring 1 + 1
    let two = graph.topic_subgraph("Hub", Depth::Two, None).await.unwrap();
    assert_eq!(two.related_topics.len(), 10);
    assert!(two.related_topics.iter().all(|t| t.score == 2.0));
    assert_eq!(two.related_topics[0].topic.name, "T00");
    assert_eq!(two.related_topics[9].topic.name, "T09");
}

#[tokio::test]
async fn test_unknown_topic_and_bounds() {
    let graph = common::graph();
    let err = graph.topic_subgraph("Western", Depth::One, None).await.unwrap_err();
    assert_eq!(err.to_string(), "Topic (genre) not found.");

    assert!(graph.topic_subgraph("Drama", Depth::One, Some(100)).await.is_ok());
    assert!(matches!(
        graph.topic_subgraph("Drama", Depth::One, Some(101)).await,
        Err(FilmGraphError::InvalidInput(_))
    ));
}
