//! Cypher text of every template
//!
//! Labels: `Article` (work), `Author` (creator), `Topic`.
//! Relationships: `(:Author)-[:DIRECTED]->(:Article)`,
//! `(:Article)-[:HAS_TOPIC]->(:Topic)`.
//!
//! Ordering clauses carry explicit tie-breaks so results are deterministic.
//! Missing years sort last in descending order (`coalesce` to the smallest
//! 32-bit integer).

pub const PING: &str = "RETURN 1 AS ok";

pub const WORK_BY_ID: &str = "MATCH (n:Article {wikidata_id: $id}) RETURN n LIMIT 1";

pub const CREATOR_BY_ID: &str = "MATCH (n:Author {wikidata_id: $id}) RETURN n LIMIT 1";

pub const TOPIC_BY_NAME: &str = "MATCH (n:Topic {name: $name}) RETURN n LIMIT 1";

/// Rows: `other` (work node), `score` (float)
pub const RELATED_WORKS: &str = r#"
MATCH (w:Article {wikidata_id: $id})
OPTIONAL MATCH (wc:Author)-[:DIRECTED]->(w)
WITH w, collect(DISTINCT wc) AS w_creators
OPTIONAL MATCH (w)-[:HAS_TOPIC]->(wt:Topic)
WITH w, w_creators, collect(DISTINCT wt) AS w_topics
MATCH (other:Article)
WHERE other <> w
OPTIONAL MATCH (oc:Author)-[:DIRECTED]->(other)
WITH w, other, w_creators, w_topics, collect(DISTINCT oc) AS o_creators
OPTIONAL MATCH (other)-[:HAS_TOPIC]->(ot:Topic)
WITH w, other, w_creators, w_topics, o_creators, collect(DISTINCT ot) AS o_topics
WITH w, other,
     size([c IN o_creators WHERE c IN w_creators]) AS shared_creators,
     size([t IN o_topics WHERE t IN w_topics]) AS shared_topics
WITH other,
     shared_creators * 2.0 + shared_topics * 1.0 +
     CASE
       WHEN other.year IS NULL OR w.year IS NULL THEN 0.0
       WHEN abs(other.year - w.year) <= 1 THEN 0.5
       WHEN abs(other.year - w.year) <= 3 THEN 0.2
       ELSE 0.0
     END AS score
WHERE score > 0
RETURN other, score
ORDER BY score DESC, coalesce(other.year, -2147483648) DESC, other.wikidata_id ASC
LIMIT $limit
"#;

/// Single row: `works` (list of work nodes), `topics` (list of topic nodes)
pub const CREATOR_CONTRIBUTIONS: &str = r#"
MATCH (c:Author {wikidata_id: $id})
OPTIONAL MATCH (c)-[:DIRECTED]->(w:Article)
WITH c, collect(DISTINCT w)[0..$limit] AS works
OPTIONAL MATCH (tw:Article)-[:HAS_TOPIC]->(t:Topic)
WHERE tw IN works
RETURN works, collect(DISTINCT t) AS topics
"#;

/// Single row: `t`, `works`, `creators`, `related` (list of `{topic, score}`)
pub const TOPIC_SUBGRAPH: &str = r#"
MATCH (t:Topic {name: $name})
OPTIONAL MATCH (w:Article)-[:HAS_TOPIC]->(t)
WITH t, collect(DISTINCT w)[0..$limit] AS works
OPTIONAL MATCH (c:Author)-[:DIRECTED]->(cw:Article)
WHERE cw IN works
WITH t, works, collect(DISTINCT c) AS creators
OPTIONAL MATCH (sw:Article)-[:HAS_TOPIC]->(t)
OPTIONAL MATCH (sw)-[:HAS_TOPIC]->(rt:Topic)
WHERE rt <> t
WITH t, works, creators, rt, count(DISTINCT sw) AS shared
ORDER BY shared DESC, rt.name ASC
WITH t, works, creators,
     collect(CASE WHEN rt IS NULL THEN NULL ELSE {topic: rt, score: shared} END)[0..10] AS related
RETURN t, works, creators, related
"#;

/// Single row: `t`, `works`, `creators`, `related` (list of `{topic, score}`).
///
/// A second-hop topic reachable from several first-hop topics keeps its
/// best combined score. First-hop topics only appear when they are also a
/// second-hop candidate of another first-hop topic.
pub const TOPIC_SUBGRAPH_TWO_HOP: &str = r#"
MATCH (t:Topic {name: $name})
OPTIONAL MATCH (w1:Article)-[:HAS_TOPIC]->(t)
OPTIONAL MATCH (w1)-[:HAS_TOPIC]->(r1:Topic)
WHERE r1 <> t
WITH t, r1, count(DISTINCT w1) AS s1
ORDER BY s1 DESC, r1.name ASC
WITH t, collect(CASE WHEN r1 IS NULL THEN NULL ELSE {topic: r1, score: s1} END)[0..10] AS hop1
UNWIND (CASE hop1 WHEN [] THEN [NULL] ELSE hop1 END) AS h
WITH t, h.topic AS r1, h.score AS s1
OPTIONAL MATCH (w2:Article)-[:HAS_TOPIC]->(r1)
OPTIONAL MATCH (w2)-[:HAS_TOPIC]->(r2:Topic)
WHERE r2 <> r1 AND r2 <> t
WITH t, r1, s1, r2, count(DISTINCT w2) AS s2
WITH t, r2, max(s1 + s2) AS combined
ORDER BY combined DESC, r2.name ASC
WITH t, collect(CASE WHEN r2 IS NULL THEN NULL ELSE {topic: r2, score: combined} END)[0..10] AS related
OPTIONAL MATCH (w:Article)-[:HAS_TOPIC]->(t)
WITH t, related, collect(DISTINCT w)[0..$limit] AS works
OPTIONAL MATCH (c:Author)-[:DIRECTED]->(cw:Article)
WHERE cw IN works
RETURN t, works, collect(DISTINCT c) AS creators, related
"#;

/// Rows: `w` (work node), `creators`, `topics`
pub const SEARCH_WORKS: &str = r#"
CALL {
  MATCH (w:Article)
  WHERE toLower(w.title) CONTAINS toLower($q)
  RETURN w
  UNION
  MATCH (c:Author)-[:DIRECTED]->(w:Article)
  WHERE toLower(c.name) CONTAINS toLower($q)
  RETURN w
  UNION
  MATCH (w:Article)-[:HAS_TOPIC]->(t:Topic)
  WHERE toLower(t.name) CONTAINS toLower($q)
  RETURN w
}
WITH w LIMIT $limit
OPTIONAL MATCH (c:Author)-[:DIRECTED]->(w)
WITH w, collect(DISTINCT c) AS creators
OPTIONAL MATCH (w)-[:HAS_TOPIC]->(t:Topic)
RETURN w, creators, collect(DISTINCT t) AS topics
"#;

/// Rows: `wikidata_id`, `title`, `year`
pub const WORKS_BY_CREATOR: &str = r#"
MATCH (c:Author {wikidata_id: $id})-[:DIRECTED]->(w:Article)
RETURN DISTINCT w.wikidata_id AS wikidata_id, w.title AS title, w.year AS year
ORDER BY coalesce(year, -2147483648) DESC, wikidata_id ASC
LIMIT $limit
"#;

/// Rows: `wikidata_id`, `title`, `year`, `score`
pub const RELATED_WORKS_STRUCTURAL: &str = r#"
MATCH (w:Article {wikidata_id: $id})
OPTIONAL MATCH (wc:Author)-[:DIRECTED]->(w)
WITH w, collect(DISTINCT wc) AS w_creators
OPTIONAL MATCH (w)-[:HAS_TOPIC]->(wt:Topic)
WITH w, w_creators, collect(DISTINCT wt) AS w_topics
MATCH (other:Article)
WHERE other <> w
OPTIONAL MATCH (oc:Author)-[:DIRECTED]->(other)
WITH other, w_creators, w_topics, collect(DISTINCT oc) AS o_creators
OPTIONAL MATCH (other)-[:HAS_TOPIC]->(ot:Topic)
WITH other, w_creators, w_topics, o_creators, collect(DISTINCT ot) AS o_topics
WITH other,
     size([c IN o_creators WHERE c IN w_creators]) * 2.0 +
     size([x IN o_topics WHERE x IN w_topics]) * 1.0 AS score
WHERE score > 0
RETURN other.wikidata_id AS wikidata_id, other.title AS title, other.year AS year, score
ORDER BY score DESC, wikidata_id ASC
LIMIT $limit
"#;

/// Rows: `genre`, `n`
pub const TOPIC_FREQUENCY: &str = r#"
MATCH (:Article)-[:HAS_TOPIC]->(t:Topic)
RETURN t.name AS genre, count(*) AS n
ORDER BY n DESC, genre ASC
LIMIT $limit
"#;
