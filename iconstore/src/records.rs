use crate::files::icon_file_name;
use crate::models::IconRecord;
use std::sync::Arc;
use uuid::Uuid;

/// Supplies fresh record identifiers. Injectable so tests can use a
/// deterministic sequence instead of random UUIDs.
pub trait IdProvider: Send + Sync {
    fn new_id(&self) -> Uuid;
}

pub struct RandomIdProvider;

impl IdProvider for RandomIdProvider {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Composes one persistable record per matched icon.
///
/// Construction is pure apart from drawing a fresh id: no I/O, no
/// collision check against the store. Callers must have filtered out
/// entries without a name.
pub struct RecordBuilder {
    style_suffix: String,
    ids: Arc<dyn IdProvider>,
}

impl RecordBuilder {
    pub fn new(style_suffix: impl Into<String>) -> Self {
        Self::with_id_provider(style_suffix, Arc::new(RandomIdProvider))
    }

    pub fn with_id_provider(style_suffix: impl Into<String>, ids: Arc<dyn IdProvider>) -> Self {
        Self {
            style_suffix: style_suffix.into(),
            ids,
        }
    }

    pub fn build(&self, icon_name: &str, tags: Vec<String>) -> IconRecord {
        IconRecord {
            id: self.ids.new_id(),
            icon_name: icon_name.to_string(),
            tags,
            keyword: String::new(),
            file: icon_file_name(icon_name, &self.style_suffix),
            embedding: None,
        }
    }
}
