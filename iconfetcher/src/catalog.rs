//! Hugeicons catalog module
//!
//! This module provides an asynchronous client for the Hugeicons icon
//! catalog API, returning the icon metadata entries consumed by the
//! `iconstore` reconciliation pipeline.

use async_trait::async_trait;
use iconstore::errors::StoreError;
use iconstore::fetch::{CatalogSource, IconEntry};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Base URL for the icon catalog API
const HUGEICONS_API_URL: &str = "https://hugeicons.com/api/icons";

/// Bounded wait for the single catalog request
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Custom error types for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Expected response shape: `{ "icons": [ { name, tags, category, ... }, ... ] }`
#[derive(Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    icons: Vec<IconEntry>,
}

/// Client for the remote icon catalog
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: HUGEICONS_API_URL.to_string(),
        }
    }
}

impl CatalogClient {
    /// Create a new client against the default catalog endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new client against a custom endpoint
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full list of icon metadata entries.
    ///
    /// A non-success HTTP status is an error: there is no partial
    /// catalog, so the caller treats any failure here as fatal.
    pub async fn fetch_icons(&self) -> Result<Vec<IconEntry>> {
        log::info!("fetching icon list from {}", self.endpoint);

        let response = self
            .http_client
            .get(&self.endpoint)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let data: CatalogResponse = response.json().await?;
        Ok(data.icons)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    fn name(&self) -> &'static str {
        "hugeicons"
    }

    async fn fetch_catalog(&self) -> iconstore::errors::Result<Vec<IconEntry>> {
        self.fetch_icons()
            .await
            .map_err(|err| StoreError::Catalog(err.to_string()))
    }
}
