use crate::models::IconRecord;
use crate::store::VectorStore;
use std::sync::Arc;

/// Partitions built records into fixed-size chunks and submits each
/// chunk to the store as one insert call.
///
/// Chunks are submitted in sequence order and never reorder or drop
/// records. A failed chunk is logged and does not stop later chunks;
/// there are no retries. Callers wanting end-to-end failure detection
/// must wrap the store collaborator and capture per-chunk outcomes.
pub struct BatchPublisher {
    store: Arc<dyn VectorStore>,
    chunk_size: usize,
}

impl BatchPublisher {
    pub fn new(store: Arc<dyn VectorStore>, chunk_size: usize) -> Self {
        Self {
            store,
            chunk_size: chunk_size.max(1),
        }
    }

    pub async fn publish(&self, records: &[IconRecord]) {
        if records.is_empty() {
            log::info!("no records to insert into the store");
            return;
        }

        for (index, chunk) in records.chunks(self.chunk_size).enumerate() {
            let chunk_number = index + 1;
            log::info!(
                "inserting {} records into the store (chunk {})",
                chunk.len(),
                chunk_number
            );
            let outcome = self.store.insert_records(chunk).await;
            match outcome.error {
                None => log::info!("chunk {} inserted", chunk_number),
                Some(error) => log::warn!("store error on chunk {}: {}", chunk_number, error),
            }
        }
    }
}
