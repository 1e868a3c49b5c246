//! Lenient query-string parsing
//!
//! Query parameters arrive as raw strings. A key given more than once keeps
//! its first value, and numbers that fail to parse are treated as absent
//! rather than rejecting the request.

use crate::error::{LapakError, Result};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::collections::HashMap;
use std::convert::Infallible;

/// Decoded query string, first value wins for repeated keys
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn parse(query: &str) -> Self {
        let mut values = HashMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(Self::parse(parts.uri.query().unwrap_or_default()))
    }
}

/// Parse a positive integer, falling back to `default` when the value is
/// missing, unparsable or less than 1.
pub fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(default)
}

pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.parse::<i64>().ok())
}

/// Require a text field to be present and non-empty. Whitespace-only values
/// are accepted as-is.
pub fn require_text(field: &str, raw: Option<&str>) -> Result<String> {
    match raw {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(LapakError::Validation(format!("{} is required", field))),
    }
}
