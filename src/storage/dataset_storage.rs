use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::entities::Dataset;

/// Interface for abstracting storage of the tracked entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetStorage {
    /// Reads the whole document.
    async fn load(&self) -> Result<Dataset>;

    /// Overwrites the whole document. The last writer wins.
    async fn save(&self, dataset: &Dataset) -> Result<()>;
}

/// The main realization of [DatasetStorage]. Keeps everything in one pretty printed JSON file.
pub struct JsonDatasetStorage {
    path: PathBuf,
}

impl JsonDatasetStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DatasetStorage for JsonDatasetStorage {
    async fn load(&self) -> Result<Dataset> {
        debug!("Loading {:?}", self.path);
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        let dataset = serde_json::from_str::<Dataset>(&content)
            .with_context(|| format!("Failed to parse {:?}", self.path))?;
        debug!("Loaded {} entries", dataset.len());
        Ok(dataset)
    }

    async fn save(&self, dataset: &Dataset) -> Result<()> {
        debug!("Saving {} entries into {:?}", dataset.len(), self.path);
        let mut buffer = serde_json::to_vec_pretty(dataset)?;
        buffer.push(b'\n');
        fs::write(&self.path, buffer)
            .await
            .with_context(|| format!("Failed to write {:?}", self.path))?;
        Ok(())
    }
}
