use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted row in the vector-store table.
///
/// `keyword` is reserved for future use and always written empty.
/// `embedding` is always written as an explicit `null`: a downstream
/// embedding job owns that column and fills it in later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconRecord {
    pub id: Uuid,
    pub icon_name: String,
    pub tags: Vec<String>,
    pub keyword: String,
    pub file: String,
    pub embedding: Option<Vec<f32>>,
}

/// Counters for one full reconciliation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub fetched: usize,
    pub skipped_missing_name: usize,
    pub skipped_missing_file: usize,
    pub prepared: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
