//! Bound query parameters

use super::{QueryError, QueryResult};
use crate::graph::PropertyValue;
use indexmap::IndexMap;

/// Named parameters bound to a template, in binding order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(IndexMap<String, PropertyValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a parameter, replacing any previous value under the same name
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    /// Required string parameter
    pub fn string(&self, name: &str) -> QueryResult<&str> {
        match self.get(name) {
            None => Err(QueryError::MissingParameter(name.to_string())),
            Some(value) => value.as_string().ok_or_else(|| QueryError::InvalidParameter {
                name: name.to_string(),
                expected: "a string",
            }),
        }
    }

    /// Required non-negative integer parameter
    pub fn count(&self, name: &str) -> QueryResult<usize> {
        match self.get(name) {
            None => Err(QueryError::MissingParameter(name.to_string())),
            Some(value) => value
                .as_integer()
                .and_then(|i| usize::try_from(i).ok())
                .ok_or_else(|| QueryError::InvalidParameter {
                    name: name.to_string(),
                    expected: "a non-negative integer",
                }),
        }
    }

    /// Parameters as a JSON object, the shape graph HTTP APIs expect
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }

    /// Substitute every `$name` placeholder bound here with a Cypher literal.
    ///
    /// Placeholders with no binding are left untouched.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            let mut name = String::new();
            while let Some(&(_, next)) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' {
                    name.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            match self.get(&name) {
                Some(value) => out.push_str(&cypher_literal(value)),
                None => {
                    out.push('$');
                    out.push_str(&name);
                }
            }
        }
        out
    }
}

/// Cypher literal for a parameter value
pub fn cypher_literal(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(s) => {
            let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{}\"", escaped)
        }
        PropertyValue::List(items) => {
            let parts: Vec<String> = items.iter().map(cypher_literal).collect();
            format!("[{}]", parts.join(", "))
        }
        PropertyValue::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let params = Params::new().bind("id", "Q1").bind("limit", 10i64);
        assert_eq!(params.string("id").unwrap(), "Q1");
        assert_eq!(params.count("limit").unwrap(), 10);
        assert_eq!(
            params.string("name").unwrap_err(),
            QueryError::MissingParameter("name".into())
        );
        assert!(matches!(
            params.count("id"),
            Err(QueryError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_negative_count_rejected() {
        let params = Params::new().bind("limit", -1i64);
        assert!(params.count("limit").is_err());
    }

    #[test]
    fn test_render_escapes_strings() {
        let params = Params::new().bind("q", r#"say "hi" \o/"#);
        assert_eq!(
            params.render("WHERE x = $q"),
            r#"WHERE x = "say \"hi\" \\o/""#
        );
    }

    #[test]
    fn test_render_leaves_unbound_placeholders() {
        let params = Params::new().bind("limit", 3i64);
        assert_eq!(params.render("LIMIT $limit // $other"), "LIMIT 3 // $other");
    }

    #[test]
    fn test_to_json() {
        let params = Params::new().bind("name", "Drama").bind("limit", 25i64);
        assert_eq!(params.to_json(), serde_json::json!({"name": "Drama", "limit": 25}));
    }
}
