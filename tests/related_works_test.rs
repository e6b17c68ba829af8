mod common;

use filmgraph::FilmGraphError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn test_shared_creator_topic_and_close_year() {
    let result = common::graph().related_works("Q1", None).await.unwrap();
    assert_eq!(result.work_id, "Q1");

    let ids: Vec<_> = result.related.iter().map(|r| r.work.id.as_str()).collect();
    // Q4 shares nothing and is dropped; Q6 and Q5 tie on score, newer first
    assert_eq!(ids, vec!["Q2", "Q3", "Q6", "Q5"]);

    let scores: Vec<_> = result.related.iter().map(|r| r.score).collect();
    assert!(approx(scores[0], 3.5));
    assert!(approx(scores[1], 1.2));
    assert!(approx(scores[2], 1.0));
    assert!(approx(scores[3], 1.0));
}

#[tokio::test]
async fn test_target_excluded_and_scores_positive() {
    let graph = common::graph();
    for id in ["Q1", "Q2", "Q3", "Q4", "Q5", "Q6"] {
        let result = graph.related_works(id, Some(50)).await.unwrap();
        assert!(result.related.iter().all(|r| r.work.id != id));
        assert!(result.related.iter().all(|r| r.score > 0.0));
        assert!(result.related.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[tokio::test]
async fn test_missing_year_gets_no_bonus() {
    let result = common::graph().related_works("Q4", None).await.unwrap();
    assert_eq!(result.related.len(), 1);
    assert_eq!(result.related[0].work.id, "Q3");
    assert!(approx(result.related[0].score, 2.0));
}

#[tokio::test]
async fn test_limit_truncates() {
    let result = common::graph().related_works("Q1", Some(2)).await.unwrap();
    let ids: Vec<_> = result.related.iter().map(|r| r.work.id.as_str()).collect();
    assert_eq!(ids, vec!["Q2", "Q3"]);
}

#[tokio::test]
async fn test_limit_bounds() {
    let graph = common::graph();
    assert!(graph.related_works("Q1", Some(1)).await.is_ok());
    assert!(graph.related_works("Q1", Some(50)).await.is_ok());
    assert!(matches!(
        graph.related_works("Q1", Some(0)).await,
        Err(FilmGraphError::InvalidInput(_))
    ));
    assert!(matches!(
        graph.related_works("Q1", Some(51)).await,
        Err(FilmGraphError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_unknown_work() {
    let err = common::graph().related_works("Q404", None).await.unwrap_err();
    assert!(matches!(err, FilmGraphError::NotFound { .. }));
    assert_eq!(err.to_string(), "Film not found.");
}

#[tokio::test]
async fn test_repeatable() {
    let graph = common::graph();
    let first = graph.related_works("Q1", None).await.unwrap();
    let second = graph.related_works("Q1", None).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_backend_failure_surfaces() {
    let err = common::failing_graph().related_works("Q1", None).await.unwrap_err();
    assert!(matches!(err, FilmGraphError::Backend(_)));
}
