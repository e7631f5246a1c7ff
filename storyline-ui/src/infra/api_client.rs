use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use storyline_model::{ApiResponse, StorySummary};
use url::Url;

use crate::infra::services::{FetchError, FetchResult, StoryService};

/// HTTP client for the story data provider
#[derive(Clone)]
pub struct StoryApiClient {
    client: Client,
    base_url: Url,
    api_version: String,
}

impl std::fmt::Debug for StoryApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl StoryApiClient {
    /// Create a new API client
    pub fn new(base_url: Url) -> FetchResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create an API client on top of an existing reqwest client
    pub fn with_client(client: Client, base_url: Url) -> Self {
        info!(
            "[StoryApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Self {
            client,
            base_url,
            api_version: "v1".to_string(),
        }
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.as_ref().trim_start_matches('/');
        format!("{}/api/{}/{}", base, self.api_version, path)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET request for public endpoints
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> FetchResult<T> {
        let url = self.build_url(path);
        debug!("[StoryApiClient] GET request to: {}", url);

        let request = self.client.get(&url).query(query);
        self.execute_request(request).await
    }

    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> FetchResult<T> {
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                if status == StatusCode::NO_CONTENT {
                    return Err(FetchError::EmptyResponse);
                }
                let bytes = response.bytes().await?;
                let api_response: ApiResponse<T> =
                    serde_json::from_slice(&bytes)
                        .map_err(|err| FetchError::Decode(err.to_string()))?;
                match api_response.data {
                    Some(data) => Ok(data),
                    None => Err(FetchError::EmptyResponse),
                }
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(FetchError::Status { status, body })
            }
        }
    }
}

#[async_trait]
impl StoryService for StoryApiClient {
    async fn fetch_trending(
        &self,
        limit: usize,
    ) -> FetchResult<Vec<StorySummary>> {
        let mut stories: Vec<StorySummary> = self
            .get("stories/trending", &[("limit", limit.to_string())])
            .await?;

        if stories.len() > limit {
            warn!(
                "[StoryApiClient] Provider returned {} trending stories for limit {}, truncating",
                stories.len(),
                limit
            );
            stories.truncate(limit);
        }

        Ok(stories)
    }
}
