mod common;

use filmgraph::FilmGraphError;
use std::collections::HashSet;

fn result_ids(results: &filmgraph::SearchResults) -> Vec<&str> {
    results.results.iter().map(|r| r.work.id.as_str()).collect()
}

#[tokio::test]
async fn test_match_by_title() {
    let results = common::graph().search_works("ALPHA", None).await.unwrap();
    assert_eq!(results.query, "ALPHA");
    assert_eq!(result_ids(&results), vec!["Q1"]);

    let alpha = &results.results[0];
    assert_eq!(alpha.creators.len(), 1);
    let topics: Vec<_> = alpha.topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(topics, vec!["Drama", "War"]);
}

#[tokio::test]
async fn test_match_by_creator_and_topic() {
    let graph = common::graph();
    let by_creator = graph.search_works("fay", None).await.unwrap();
    assert_eq!(result_ids(&by_creator), vec!["Q5", "Q6"]);

    let by_topic = graph.search_works("war", None).await.unwrap();
    assert_eq!(result_ids(&by_topic), vec!["Q1", "Q3"]);
}

#[tokio::test]
async fn test_results_are_distinct_and_limited() {
    let graph = common::graph();
    // "a" matches titles, director names and topic names
    let all = graph.search_works("a", Some(50)).await.unwrap();
    let ids = result_ids(&all);
    let distinct: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), ids.len());
    assert_eq!(ids.len(), 6);

    let limited = graph.search_works("a", Some(2)).await.unwrap();
    assert_eq!(result_ids(&limited), vec!["Q1", "Q2"]);
}

#[tokio::test]
async fn test_repeatable() {
    let graph = common::graph();
    let first = graph.search_works("a", Some(50)).await.unwrap();
    let second = graph.search_works("a", Some(50)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_blank_query_rejected() {
    let err = common::graph().search_works("   ", None).await.unwrap_err();
    assert!(matches!(err, FilmGraphError::InvalidInput(ref m) if m == "Query 'q' must not be empty."));
}

#[tokio::test]
async fn test_no_match() {
    let results = common::graph().search_works("zzz", None).await.unwrap();
    assert!(results.results.is_empty());
}
