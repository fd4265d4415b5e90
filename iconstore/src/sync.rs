use crate::config::SyncConfig;
use crate::errors::Result;
use crate::fetch::CatalogSource;
use crate::files::{LocalIconDir, icon_file_name};
use crate::models::{IconRecord, SyncReport};
use crate::publish::BatchPublisher;
use crate::records::{IdProvider, RecordBuilder};
use crate::store::VectorStore;
use crate::tags::normalize_tags;
use std::sync::Arc;

/// Reconciles the remote icon catalog with the local SVG directory and
/// publishes one normalized record per matched icon.
///
/// The pass is a single sequential sweep: entries without a name or
/// without a matching local file are skipped with a diagnostic, every
/// surviving entry becomes exactly one record, and the accumulated
/// records are handed whole to the batch publisher.
pub struct IconSynchronizer {
    config: SyncConfig,
    builder: RecordBuilder,
    publisher: BatchPublisher,
}

impl IconSynchronizer {
    pub fn new(config: SyncConfig, store: Arc<dyn VectorStore>) -> Self {
        let builder = RecordBuilder::new(config.style_suffix.clone());
        let publisher = BatchPublisher::new(store, config.chunk_size);
        Self {
            config,
            builder,
            publisher,
        }
    }

    /// Like [`IconSynchronizer::new`] but with an injected id source,
    /// so runs can be made deterministic.
    pub fn with_id_provider(
        config: SyncConfig,
        store: Arc<dyn VectorStore>,
        ids: Arc<dyn IdProvider>,
    ) -> Self {
        let builder = RecordBuilder::with_id_provider(config.style_suffix.clone(), ids);
        let publisher = BatchPublisher::new(store, config.chunk_size);
        Self {
            config,
            builder,
            publisher,
        }
    }

    pub async fn sync(&self, source: &dyn CatalogSource) -> Result<SyncReport> {
        let started_at = chrono::Utc::now();

        let icons = LocalIconDir::new(&self.config.output_dir);
        icons.ensure_exists()?;

        let entries = source.fetch_catalog().await?;
        log::info!("fetched {} icons from '{}'", entries.len(), source.name());

        let mut skipped_missing_name = 0usize;
        let mut skipped_missing_file = 0usize;
        let mut records: Vec<IconRecord> = Vec::new();

        for entry in &entries {
            let Some(name) = entry.name.as_deref().filter(|name| !name.is_empty()) else {
                log::debug!("skipping catalog entry without a name");
                skipped_missing_name += 1;
                continue;
            };

            let file_name = icon_file_name(name, &self.config.style_suffix);
            if !icons.contains(&file_name) {
                log::warn!(
                    "file not found for icon '{}': {} - skipping",
                    name,
                    icons.path_of(&file_name).display()
                );
                skipped_missing_file += 1;
                continue;
            }

            let tags = normalize_tags(
                entry.tags.as_deref().unwrap_or(""),
                entry.category.as_deref(),
            );
            records.push(self.builder.build(name, tags));
        }

        log::info!("prepared {} records to insert into the store", records.len());
        self.publisher.publish(&records).await;

        Ok(SyncReport {
            fetched: entries.len(),
            skipped_missing_name,
            skipped_missing_file,
            prepared: records.len(),
            started_at,
            finished_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::fetch::IconEntry;
    use crate::store::InsertOutcome;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use tempfile::tempdir;
    use uuid::Uuid;

    struct StaticCatalog {
        entries: Vec<IconEntry>,
    }

    #[async_trait]
    impl CatalogSource for StaticCatalog {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch_catalog(&self) -> Result<Vec<IconEntry>> {
            Ok(self.entries.clone())
        }
    }

    struct RecordingStore {
        chunks: Mutex<Vec<Vec<IconRecord>>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                chunks: Mutex::new(Vec::new()),
            }
        }

        fn received(&self) -> Vec<Vec<IconRecord>> {
            self.chunks.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VectorStore for RecordingStore {
        async fn insert_records(&self, records: &[IconRecord]) -> InsertOutcome {
            self.chunks.lock().unwrap().push(records.to_vec());
            InsertOutcome::success()
        }
    }

    fn entry(name: &str, tags: &str, category: &str) -> IconEntry {
        IconEntry {
            name: Some(name.to_string()),
            tags: Some(tags.to_string()),
            category: Some(category.to_string()),
        }
    }

    #[tokio::test]
    async fn matched_entry_becomes_one_record_and_missing_file_is_skipped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("arrow-up-stroke-rounded.svg"), "<svg/>").unwrap();

        let catalog = StaticCatalog {
            entries: vec![
                entry("arrow-up", "direction, arrow", "navigation"),
                entry("missing-icon", "", ""),
            ],
        };
        let store = Arc::new(RecordingStore::new());
        let synchronizer =
            IconSynchronizer::new(SyncConfig::new(dir.path()), store.clone());

        let report = synchronizer.sync(&catalog).await.unwrap();

        assert_eq!(report.fetched, 2);
        assert_eq!(report.skipped_missing_file, 1);
        assert_eq!(report.prepared, 1);

        let chunks = store.received();
        assert_eq!(chunks.len(), 1);
        let record = &chunks[0][0];
        assert_eq!(record.icon_name, "arrow-up");
        assert_eq!(record.tags, vec!["direction", "arrow", "navigation"]);
        assert_eq!(record.file, "arrow-up-stroke-rounded.svg");
        assert_eq!(record.keyword, "");
        assert!(record.embedding.is_none());
    }

    #[tokio::test]
    async fn entries_without_a_name_are_skipped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cursor-stroke-rounded.svg"), "<svg/>").unwrap();

        let catalog = StaticCatalog {
            entries: vec![
                IconEntry {
                    name: None,
                    tags: Some("lost".to_string()),
                    category: None,
                },
                IconEntry {
                    name: Some(String::new()),
                    tags: None,
                    category: None,
                },
                entry("cursor", "pointer", ""),
            ],
        };
        let store = Arc::new(RecordingStore::new());
        let synchronizer =
            IconSynchronizer::new(SyncConfig::new(dir.path()), store.clone());

        let report = synchronizer.sync(&catalog).await.unwrap();

        assert_eq!(report.skipped_missing_name, 2);
        assert_eq!(report.prepared, 1);
        assert_eq!(store.received()[0][0].icon_name, "cursor");
    }

    #[tokio::test]
    async fn missing_output_dir_is_fatal_before_fetching() {
        let dir = tempdir().unwrap();
        let catalog = StaticCatalog {
            entries: vec![entry("arrow-up", "", "")],
        };
        let store = Arc::new(RecordingStore::new());
        let synchronizer = IconSynchronizer::new(
            SyncConfig::new(dir.path().join("absent")),
            store.clone(),
        );

        let result = synchronizer.sync(&catalog).await;

        assert!(matches!(result, Err(StoreError::Config(_))));
        assert!(store.received().is_empty());
    }

    #[tokio::test]
    async fn empty_catalog_publishes_nothing() {
        let dir = tempdir().unwrap();
        let catalog = StaticCatalog {
            entries: Vec::new(),
        };
        let store = Arc::new(RecordingStore::new());
        let synchronizer =
            IconSynchronizer::new(SyncConfig::new(dir.path()), store.clone());

        let report = synchronizer.sync(&catalog).await.unwrap();

        assert_eq!(report.prepared, 0);
        assert!(store.received().is_empty());
    }

    #[tokio::test]
    async fn record_ids_are_unique_across_the_run() {
        let dir = tempdir().unwrap();
        let mut entries = Vec::new();
        for i in 0..25 {
            let name = format!("icon-{i}");
            std::fs::write(
                dir.path().join(format!("{name}-stroke-rounded.svg")),
                "<svg/>",
            )
            .unwrap();
            entries.push(entry(&name, "tag", ""));
        }

        let catalog = StaticCatalog { entries };
        let store = Arc::new(RecordingStore::new());
        let synchronizer =
            IconSynchronizer::new(SyncConfig::new(dir.path()), store.clone());

        synchronizer.sync(&catalog).await.unwrap();

        let ids: HashSet<Uuid> = store
            .received()
            .iter()
            .flatten()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids.len(), 25);
    }
}
