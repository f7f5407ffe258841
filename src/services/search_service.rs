use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::config::BingConfig;
use crate::error::SearchError;
use crate::models::SearchResultItem;
use crate::services::{shape_results, BingClient};

/// Source of raw search responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn raw_search(&self, query: &str, count: u32) -> Result<Value, SearchError>;
}

#[async_trait]
impl SearchProvider for BingClient {
    async fn raw_search(&self, query: &str, count: u32) -> Result<Value, SearchError> {
        self.fetch(query, count).await
    }
}

#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn SearchProvider>,
}

impl SearchService {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    pub fn bing(config: BingConfig) -> Self {
        Self::new(Arc::new(BingClient::new(config)))
    }

    pub async fn search(&self, query: &str, count: u32) -> Result<Vec<SearchResultItem>, SearchError> {
        let raw = self.provider.raw_search(query, count).await?;
        let results = shape_results(&raw);
        info!(query, count, returned = results.len(), "Search completed");
        Ok(results)
    }
}
