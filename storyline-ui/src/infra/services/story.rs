//! Story data provider trait
//!
//! The carousel only needs one operation from the provider. Keeping it behind
//! a trait lets the runtime run against the HTTP client, a stub, or a mock.

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;
use storyline_model::StorySummary;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Empty response from server")]
    EmptyResponse,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Story service unavailable: {0}")]
    Unavailable(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

#[async_trait]
pub trait StoryService: Send + Sync + Debug {
    /// Fetch at most `limit` trending stories, highest rank first
    async fn fetch_trending(
        &self,
        limit: usize,
    ) -> FetchResult<Vec<StorySummary>>;
}
