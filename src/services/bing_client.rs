use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BingConfig;
use crate::error::SearchError;

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Forwards queries to the Bing Web Search endpoint and returns the raw body.
#[derive(Clone)]
pub struct BingClient {
    http: Client,
    config: BingConfig,
}

impl BingClient {
    pub fn new(config: BingConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: BingConfig) -> Self {
        Self { http, config }
    }

    fn api_key(&self) -> Result<&str, SearchError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SearchError::Configuration)
    }

    pub async fn fetch(&self, query: &str, count: u32) -> Result<Value, SearchError> {
        let api_key = self.api_key()?;
        let count = count.to_string();

        debug!(query, count = %count, endpoint = %self.config.endpoint, "Forwarding search request");

        let response = self
            .http
            .get(&self.config.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, api_key)
            .query(&[
                ("q", query),
                ("count", count.as_str()),
                ("textFormat", self.config.text_format.as_str()),
            ])
            .send()
            .await
            .and_then(|response| response.error_for_status());

        let body = match response {
            Ok(response) => response.json::<Value>().await,
            Err(e) => Err(e),
        };

        body.map_err(|e| {
            warn!("Bing request failed: {}", e);
            SearchError::Upstream(e)
        })
    }
}

/// Endpoint on a loopback port that was just bound and released, so nothing
/// is listening there.
#[cfg(test)]
pub(crate) fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/v7.0/search", port)
}
