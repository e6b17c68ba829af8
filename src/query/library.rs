//! Typed constructors for every template
//!
//! Callers validate bounds before building a query; the constructors only
//! bind parameters.

use super::{CypherQuery, Params, Template};
use std::fmt;

/// Inclusive range and default of an integer request parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub default: usize,
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const RELATED_WORKS: Bounds = Bounds { default: 10, min: 1, max: 50 };
    pub const CONTRIBUTIONS: Bounds = Bounds { default: 50, min: 1, max: 200 };
    pub const TOPIC_WORKS: Bounds = Bounds { default: 25, min: 1, max: 100 };
    pub const SEARCH: Bounds = Bounds { default: 10, min: 1, max: 50 };
    pub const NL_QUERY: Bounds = Bounds { default: 10, min: 1, max: 100 };

    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// `value` if inside the range, `default` if absent, `Err(message)` otherwise
    pub fn resolve(&self, name: &str, value: Option<usize>) -> Result<usize, String> {
        match value {
            None => Ok(self.default),
            Some(v) if self.contains(v) => Ok(v),
            Some(v) => Err(format!(
                "{} must be between {} and {} (got {})",
                name, self.min, self.max, v
            )),
        }
    }
}

/// Expansion depth of the topic subgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    One,
    Two,
}

impl TryFrom<u8> for Depth {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Depth::One),
            2 => Ok(Depth::Two),
            other => Err(format!("depth must be 1 or 2 (got {})", other)),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::One => write!(f, "1"),
            Depth::Two => write!(f, "2"),
        }
    }
}

pub fn ping() -> CypherQuery {
    CypherQuery::new(Template::Ping, Params::new())
}

pub fn work_by_id(work_id: &str) -> CypherQuery {
    CypherQuery::new(Template::WorkById, Params::new().bind("id", work_id))
}

pub fn creator_by_id(creator_id: &str) -> CypherQuery {
    CypherQuery::new(Template::CreatorById, Params::new().bind("id", creator_id))
}

pub fn topic_by_name(name: &str) -> CypherQuery {
    CypherQuery::new(Template::TopicByName, Params::new().bind("name", name))
}

pub fn related_works(work_id: &str, limit: usize) -> CypherQuery {
    CypherQuery::new(
        Template::RelatedWorks,
        Params::new().bind("id", work_id).bind("limit", limit),
    )
}

pub fn creator_contributions(creator_id: &str, limit: usize) -> CypherQuery {
    CypherQuery::new(
        Template::CreatorContributions,
        Params::new().bind("id", creator_id).bind("limit", limit),
    )
}

pub fn topic_subgraph(name: &str, depth: Depth, limit: usize) -> CypherQuery {
    let template = match depth {
        Depth::One => Template::TopicSubgraph,
        Depth::Two => Template::TopicSubgraphTwoHop,
    };
    CypherQuery::new(template, Params::new().bind("name", name).bind("limit", limit))
}

pub fn search_works(q: &str, limit: usize) -> CypherQuery {
    CypherQuery::new(
        Template::SearchWorks,
        Params::new().bind("q", q).bind("limit", limit),
    )
}

pub fn works_by_creator(creator_id: &str, limit: usize) -> CypherQuery {
    CypherQuery::new(
        Template::WorksByCreator,
        Params::new().bind("id", creator_id).bind("limit", limit),
    )
}

pub fn related_works_structural(work_id: &str, limit: usize) -> CypherQuery {
    CypherQuery::new(
        Template::RelatedWorksStructural,
        Params::new().bind("id", work_id).bind("limit", limit),
    )
}

pub fn topic_frequency(limit: usize) -> CypherQuery {
    CypherQuery::new(Template::TopicFrequency, Params::new().bind("limit", limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_resolve() {
        let b = Bounds::RELATED_WORKS;
        assert_eq!(b.resolve("limit", None), Ok(10));
        assert_eq!(b.resolve("limit", Some(1)), Ok(1));
        assert_eq!(b.resolve("limit", Some(50)), Ok(50));
        assert!(b.resolve("limit", Some(0)).is_err());
        assert!(b.resolve("limit", Some(51)).is_err());
    }

    #[test]
    fn test_depth_parsing() {
        assert_eq!(Depth::try_from(1), Ok(Depth::One));
        assert_eq!(Depth::try_from(2), Ok(Depth::Two));
        assert!(Depth::try_from(3).is_err());
        assert_eq!(Depth::default(), Depth::One);
    }

    #[test]
    fn test_topic_subgraph_selects_template_by_depth() {
        assert_eq!(topic_subgraph("Drama", Depth::One, 5).template, Template::TopicSubgraph);
        assert_eq!(
            topic_subgraph("Drama", Depth::Two, 5).template,
            Template::TopicSubgraphTwoHop
        );
    }

    #[test]
    fn test_parameters_are_bound_not_interpolated() {
        let query = related_works("Q1\" OR 1=1", 10);
        assert!(!query.text().contains("Q1"));
        assert_eq!(query.params.string("id").unwrap(), "Q1\" OR 1=1");
    }
}
