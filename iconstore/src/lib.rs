pub mod config;
pub mod errors;
pub mod fetch;
pub mod files;
pub mod models;
pub mod publish;
pub mod records;
pub mod store;
pub mod sync;
pub mod tags;

use crate::config::{StoreConfig, SyncConfig};
use crate::errors::Result;
use crate::store::SupabaseStore;
use crate::sync::IconSynchronizer;
use std::sync::Arc;

/// The main entry point for the `iconstore` library.
///
/// `IconStore` wires the persistence client and the reconciliation
/// pipeline together from configuration:
/// - A REST client (`SupabaseStore`) for the vector-store table that
///   later powers semantic icon search.
/// - An `IconSynchronizer` that matches remote catalog entries against
///   the local SVG directory, normalizes their tags, and publishes the
///   resulting records in chunks.
///
/// The embedding column of the target table is intentionally left null
/// by everything in this crate; a separate process fills it in.
///
/// # Example
///
/// ```rust,no_run
/// use iconstore::{IconStore, config::{StoreConfig, SyncConfig}};
///
/// let store_config = StoreConfig::new("https://example.supabase.co", "service-key");
/// let storage = IconStore::new(store_config, SyncConfig::default());
///
/// // Now you can use storage.synchronizer with any CatalogSource.
/// ```
pub struct IconStore {
    pub store_config: StoreConfig,
    pub sync_config: SyncConfig,
    pub synchronizer: Arc<IconSynchronizer>,
}

impl IconStore {
    pub fn new(store_config: StoreConfig, sync_config: SyncConfig) -> Self {
        let store = Arc::new(SupabaseStore::new(&store_config));
        let synchronizer = Arc::new(IconSynchronizer::new(sync_config.clone(), store));
        Self {
            store_config,
            sync_config,
            synchronizer,
        }
    }

    /// Builds an instance from environment variables, failing fast when
    /// the store URL or key is absent.
    pub fn from_env(sync_config: SyncConfig) -> Result<Self> {
        Ok(Self::new(StoreConfig::from_env()?, sync_config))
    }
}
