use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::models::QueryState;

/// Where pages of schools come from.
///
/// Returns the decoded JSON body untouched; interpreting its shape is the
/// list view's job.
#[async_trait]
pub trait SchoolSource: Send + Sync {
    async fn fetch(&self, query: &QueryState) -> Result<Value, FetchError>;
}

/// HTTP client for the remote schools list endpoint.
#[derive(Clone)]
pub struct SchoolApiClient {
    client: reqwest::Client,
    list_url: String,
}

impl SchoolApiClient {
    pub fn new(list_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            list_url: list_url.to_string(),
        })
    }

    pub fn list_url(&self) -> &str {
        &self.list_url
    }
}

#[async_trait]
impl SchoolSource for SchoolApiClient {
    async fn fetch(&self, query: &QueryState) -> Result<Value, FetchError> {
        debug!(
            page = query.page,
            count = query.page_size,
            q = %query.search_text,
            "Fetching schools from {}",
            self.list_url
        );

        let response = self
            .client
            .get(&self.list_url)
            .query(&[
                ("page", query.page.to_string()),
                ("count", query.page_size.to_string()),
                ("q", query.search_text.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let text = response.text().await?;

        Ok(serde_json::from_str(&text)?)
    }
}
