use crate::events::DataEvent;
use anyhow::{Context, Result};
use dispensa_catalog::CatalogSeed;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Reads the startup catalog and reports it back to the event loop
#[derive(Clone)]
pub struct SeedLoader {
    pub seed_path: Option<PathBuf>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl SeedLoader {
    pub fn new(seed_path: Option<PathBuf>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { seed_path, data_tx }
    }

    /// Load the configured seed file, or the embedded catalog when none is set
    pub async fn load_catalog(&self) {
        match self.read_seed().await {
            Ok(seed) => {
                tracing::debug!(
                    "Seed read: {} categories, {} products",
                    seed.categories.len(),
                    seed.products.len()
                );
                let _ = self.data_tx.send(DataEvent::CatalogLoaded { seed });
            }
            Err(e) => {
                tracing::error!("Failed to load catalog seed: {:#}", e);
                let _ = self.data_tx.send(DataEvent::LoadError {
                    error: format!("{:#}", e),
                });
            }
        }
    }

    async fn read_seed(&self) -> Result<CatalogSeed> {
        let Some(path) = &self.seed_path else {
            return Ok(CatalogSeed::embedded()?);
        };

        tracing::info!("Reading catalog seed from {}", path.display());
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let seed = CatalogSeed::from_json(&json)
            .with_context(|| format!("Invalid catalog seed {}", path.display()))?;
        Ok(seed)
    }
}
