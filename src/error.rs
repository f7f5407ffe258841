use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The subscription key is missing; raised before any request is sent.
    #[error("BING_API_KEY not found in environment variables")]
    Configuration,

    #[error("Error making request to Bing API: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl SearchError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, SearchError::Configuration)
    }
}
