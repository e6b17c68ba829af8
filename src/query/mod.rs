//! Query library
//!
//! Every read the service performs is a [`CypherQuery`]: one of a fixed set
//! of Cypher templates plus bound parameters. The Cypher text is what a
//! remote graph engine runs; the embedded executor evaluates the same
//! template natively against a [`GraphStore`](crate::graph::GraphStore).

pub mod cypher;
pub mod executor;
pub mod library;
pub mod params;
pub mod row;

use thiserror::Error;

pub use executor::execute;
pub use library::{Bounds, Depth};
pub use params::Params;
pub use row::{Row, RowSet, Value};

/// Errors raised while binding or evaluating a template
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Missing query parameter: ${0}")]
    MissingParameter(String),

    #[error("Query parameter ${name} must be {expected}")]
    InvalidParameter { name: String, expected: &'static str },
}

pub type QueryResult<T> = Result<T, QueryError>;

/// The fixed set of query shapes the service can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Connectivity probe, one row `{ok: 1}`
    Ping,
    /// Work node by `wikidata_id`
    WorkById,
    /// Creator node by `wikidata_id`
    CreatorById,
    /// Topic node by `name`
    TopicByName,
    /// Scored related works, with year-proximity bonus
    RelatedWorks,
    /// Works directed by a creator plus their topics
    CreatorContributions,
    /// Topic neighbourhood, related topics by direct co-occurrence
    TopicSubgraph,
    /// Topic neighbourhood, related topics by two-hop co-occurrence
    TopicSubgraphTwoHop,
    /// Works matched by title, creator name or topic name
    SearchWorks,
    /// Flat rows of a creator's works, newest first
    WorksByCreator,
    /// Flat rows of related works scored on creators and topics only
    RelatedWorksStructural,
    /// Works per topic, most common first
    TopicFrequency,
}

impl Template {
    /// All templates, for exhaustive checks
    pub const ALL: [Template; 12] = [
        Template::Ping,
        Template::WorkById,
        Template::CreatorById,
        Template::TopicByName,
        Template::RelatedWorks,
        Template::CreatorContributions,
        Template::TopicSubgraph,
        Template::TopicSubgraphTwoHop,
        Template::SearchWorks,
        Template::WorksByCreator,
        Template::RelatedWorksStructural,
        Template::TopicFrequency,
    ];

    /// Cypher text of this template
    pub fn cypher(&self) -> &'static str {
        match self {
            Template::Ping => cypher::PING,
            Template::WorkById => cypher::WORK_BY_ID,
            Template::CreatorById => cypher::CREATOR_BY_ID,
            Template::TopicByName => cypher::TOPIC_BY_NAME,
            Template::RelatedWorks => cypher::RELATED_WORKS,
            Template::CreatorContributions => cypher::CREATOR_CONTRIBUTIONS,
            Template::TopicSubgraph => cypher::TOPIC_SUBGRAPH,
            Template::TopicSubgraphTwoHop => cypher::TOPIC_SUBGRAPH_TWO_HOP,
            Template::SearchWorks => cypher::SEARCH_WORKS,
            Template::WorksByCreator => cypher::WORKS_BY_CREATOR,
            Template::RelatedWorksStructural => cypher::RELATED_WORKS_STRUCTURAL,
            Template::TopicFrequency => cypher::TOPIC_FREQUENCY,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Template::Ping => "ping",
            Template::WorkById => "work_by_id",
            Template::CreatorById => "creator_by_id",
            Template::TopicByName => "topic_by_name",
            Template::RelatedWorks => "related_works",
            Template::CreatorContributions => "creator_contributions",
            Template::TopicSubgraph => "topic_subgraph",
            Template::TopicSubgraphTwoHop => "topic_subgraph_two_hop",
            Template::SearchWorks => "search_works",
            Template::WorksByCreator => "works_by_creator",
            Template::RelatedWorksStructural => "related_works_structural",
            Template::TopicFrequency => "topic_frequency",
        }
    }
}

/// A template with its bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CypherQuery {
    pub template: Template,
    pub params: Params,
}

impl CypherQuery {
    pub fn new(template: Template, params: Params) -> Self {
        Self { template, params }
    }

    /// Parameterised Cypher text (placeholders left in place)
    pub fn text(&self) -> &'static str {
        self.template.cypher()
    }

    /// Cypher text with every bound parameter substituted as a literal
    pub fn render(&self) -> String {
        self.params.render(self.text())
    }
}
