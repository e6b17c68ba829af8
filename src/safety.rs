//! Read-only guard for generated Cypher
//!
//! A last check on query text built from user input. The translator only
//! emits fixed template shapes, so a rejection here means a template or a
//! substituted value carries mutation or procedure vocabulary.

/// Lower-case fragments that mark a query as not read-only
pub const DENYLIST: [&str; 8] = [
    "create",
    "merge",
    "delete",
    "set",
    "drop",
    "load csv",
    "call db",
    "apoc.",
];

/// Substring denylist check over query text
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyValidator;

impl SafetyValidator {
    pub fn new() -> Self {
        Self
    }

    /// The first denylisted fragment found in `query`, if any
    pub fn violation(&self, query: &str) -> Option<&'static str> {
        let lowered = query.to_lowercase();
        DENYLIST.iter().copied().find(|token| lowered.contains(token))
    }

    /// True when `query` contains none of the denylisted fragments
    pub fn is_safe(&self, query: &str) -> bool {
        match self.violation(query) {
            None => true,
            Some(token) => {
                tracing::warn!(target: "filmgraph::safety", token, "rejected query text");
                false
            }
        }
    }
}

/// Shorthand for [`SafetyValidator::is_safe`]
pub fn is_safe(query: &str) -> bool {
    SafetyValidator.is_safe(query)
}
