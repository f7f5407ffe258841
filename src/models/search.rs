use serde::{Deserialize, Serialize};
use validator::Validate;

pub const NO_TITLE: &str = "No title";
pub const NO_URL: &str = "No URL";
pub const NO_SNIPPET: &str = "No snippet available";

/// Largest page the upstream API will return in one call.
pub const MAX_RESULT_COUNT: u32 = 50;

fn default_count() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = "MAX_RESULT_COUNT", message = "count is outside the allowed range"))]
    pub count: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, count: u32) -> Self {
        Self {
            query: query.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub name: String,
    pub url: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
}
