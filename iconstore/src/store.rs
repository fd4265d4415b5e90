use crate::config::StoreConfig;
use crate::models::IconRecord;
use async_trait::async_trait;

/// Outcome of one bulk insert call.
///
/// The store's loosely shaped success/error response is folded into a
/// single optional error payload so every chunk submission can be
/// checked the same way. Transport failures land here too; nothing
/// escapes as a hard error from an insert attempt.
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    pub error: Option<String>,
}

impl InsertOutcome {
    pub fn success() -> Self {
        Self { error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// The persistence collaborator: a named table accepting bulk inserts
/// of [`IconRecord`] rows, one call per chunk.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn insert_records(&self, records: &[IconRecord]) -> InsertOutcome;
}

/// REST client for a Supabase-style store. Rows are posted to
/// `{url}/rest/v1/{table}` as one JSON array per call.
#[derive(Clone, Debug)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
        }
    }

    fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl VectorStore for SupabaseStore {
    async fn insert_records(&self, records: &[IconRecord]) -> InsertOutcome {
        let response = self
            .client
            .post(self.insert_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(records)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => return InsertOutcome::failure(format!("insert request failed: {err}")),
        };

        if response.status().is_success() {
            InsertOutcome::success()
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            InsertOutcome::failure(format!("store returned HTTP {status}: {body}"))
        }
    }
}
