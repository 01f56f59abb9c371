use crate::core::envelope::EnvelopeChain;
use crate::models::TutorRecord;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the tutor catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Anything that can hand over the tutor catalog once
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<TutorRecord>, CatalogError>;
}

/// HTTP client for the tutor catalog endpoint
pub struct CatalogClient {
    endpoint: String,
    client: Client,
    envelope: EnvelopeChain,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(
        endpoint: String,
        timeout: Duration,
        envelope: EnvelopeChain,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            client,
            envelope,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw response body, whatever envelope it uses
    pub async fn fetch_body(&self) -> Result<Value, CatalogError> {
        tracing::debug!("Fetching tutor catalog from: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Catalog request failed: {} - {}", status, body);
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch catalog: {}",
                status
            )));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse catalog: {}", e)))
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<TutorRecord>, CatalogError> {
        let body = self.fetch_body().await?;
        let records = self.envelope.into_records(body);

        tracing::debug!("Fetched {} tutors", records.len());

        Ok(records)
    }
}
