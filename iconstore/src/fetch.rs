use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single icon metadata entry as the remote catalog reports it.
///
/// `tags` is the catalog's raw comma-delimited string (e.g.
/// "parenthesis, bracket"), not a parsed list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A source of remote icon catalog entries.
///
/// Concrete implementations live outside this crate (see `iconfetcher`
/// for the HTTP client); tests supply in-memory sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Retrieves the full catalog. Any failure here is fatal for the
    /// current run; there is no partial catalog.
    async fn fetch_catalog(&self) -> Result<Vec<IconEntry>>;
}
