use crate::errors::{Result, StoreError};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TABLE: &str = "icon_vectors";
pub const DEFAULT_OUTPUT_DIR: &str = "icons";
pub const DEFAULT_STYLE_SUFFIX: &str = "stroke-rounded";
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Connection settings for the vector store. Loaded once at startup;
/// the URL and key are mandatory.
#[derive(Deserialize, Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let url = require_env("SUPABASE_URL")?;
        let api_key = require_env("SUPABASE_KEY")?;
        let table = env::var("SUPABASE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        Ok(Self {
            url,
            api_key,
            table,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| StoreError::Config(format!("{name} must be set in environment variables")))
}

/// Settings for matching remote catalog entries against local SVG files.
#[derive(Deserialize, Debug, Clone)]
pub struct SyncConfig {
    pub output_dir: PathBuf,
    pub style_suffix: String,
    pub chunk_size: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            style_suffix: DEFAULT_STYLE_SUFFIX.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SyncConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}
