//! Search API client.
//!
//! [`SearchSource`] is the seam the browse controller fetches through;
//! [`HttpSearchClient`] is the real implementation over `reqwest`.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::types::errors::SearchError;
use crate::types::result::SearchResults;
use crate::types::settings::ApiSettings;

/// Anything that can answer a free-text search with destinations and videos.
pub trait SearchSource {
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResults, SearchError>> + Send;
}

/// HTTP client for `GET <base_url><search_path>?q=<query>`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSearchClient {
    /// Builds a client from the API settings.
    pub fn new(settings: &ApiSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let endpoint = format!(
            "{}{}",
            settings.base_url.trim_end_matches('/'),
            settings.search_path
        );

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchSource for HttpSearchClient {
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResults, SearchError>> + Send {
        let request = self.client.get(&self.endpoint).query(&[("q", query)]);
        let empty = query.is_empty();
        let query = query.to_string();

        async move {
            if empty {
                return Err(SearchError::EmptyQuery);
            }

            debug!(%query, "sending search request");
            let response = request.send().await.map_err(|e| {
                warn!(%query, error = %e, "search request failed");
                SearchError::Network(e.to_string())
            })?;

            let status = response.status();
            if !status.is_success() {
                warn!(%query, status = status.as_u16(), "search API returned an error status");
                return Err(SearchError::Status(status.as_u16()));
            }

            let results: SearchResults = response
                .json()
                .await
                .map_err(|e| SearchError::Decode(e.to_string()))?;

            debug!(
                %query,
                destinations = results.destination.len(),
                videos = results.video.len(),
                "search completed"
            );
            Ok(results)
        }
    }
}
