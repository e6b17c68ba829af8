//! Intent recognition
//!
//! Rules are tried in order on the lower-cased, trimmed question; the first
//! matching phrase wins.

use super::{NlqError, NlqResult};
use crate::query::{library, CypherQuery};
use crate::safety::SafetyValidator;
use regex::Regex;
use std::sync::LazyLock;

static ENTITY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"q\d+").expect("entity id pattern is valid"));

const CREATOR_PHRASES: [&str; 2] = ["films of director", "films by director"];
const RELATED_PHRASES: [&str; 2] = ["related films", "similar films"];
const FREQUENCY_PHRASES: [&str; 2] = ["top genres", "most common genres"];

/// A recognised question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Works directed by a creator
    WorksByCreator { creator_id: String },
    /// Works sharing creators or topics with a work
    RelatedWorks { work_id: String },
    /// Most common topics
    TopicFrequency,
}

impl Intent {
    /// Recognise `question`
    pub fn parse(question: &str) -> NlqResult<Self> {
        let q = question.trim().to_lowercase();
        let mentions = |phrases: &[&str]| phrases.iter().any(|p| q.contains(p));

        if mentions(&CREATOR_PHRASES) {
            let creator_id = entity_id(&q).ok_or(NlqError::MissingCreatorId)?;
            return Ok(Intent::WorksByCreator { creator_id });
        }
        if mentions(&RELATED_PHRASES) {
            let work_id = entity_id(&q).ok_or(NlqError::MissingWorkId)?;
            return Ok(Intent::RelatedWorks { work_id });
        }
        if mentions(&FREQUENCY_PHRASES) {
            return Ok(Intent::TopicFrequency);
        }
        Err(NlqError::Unsupported)
    }

    /// The query answering this intent
    pub fn query(&self, limit: usize) -> CypherQuery {
        match self {
            Intent::WorksByCreator { creator_id } => library::works_by_creator(creator_id, limit),
            Intent::RelatedWorks { work_id } => library::related_works_structural(work_id, limit),
            Intent::TopicFrequency => library::topic_frequency(limit),
        }
    }
}

/// First `q<digits>` token, upper-cased
fn entity_id(lowered: &str) -> Option<String> {
    ENTITY_ID.find(lowered).map(|m| m.as_str().to_uppercase())
}

/// Output of a successful translation
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedQuery {
    pub intent: Intent,
    /// Parameterised query to execute
    pub query: CypherQuery,
    /// Literal Cypher text, trimmed; checked for safety and echoed to callers
    pub rendered: String,
}

/// Translates questions and checks the result is read-only
#[derive(Debug, Clone, Default)]
pub struct IntentTranslator {
    validator: SafetyValidator,
}

impl IntentTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&self, question: &str, limit: usize) -> NlqResult<TranslatedQuery> {
        let intent = Intent::parse(question)?;
        let query = intent.query(limit);
        let rendered = query.render().trim().to_string();

        if !self.validator.is_safe(&rendered) {
            return Err(NlqError::Unsafe);
        }
        tracing::debug!(template = query.template.name(), "translated question");
        Ok(TranslatedQuery { intent, query, rendered })
    }
}
