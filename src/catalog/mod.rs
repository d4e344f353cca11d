//! In-memory species catalog.
//!
//! The catalog is loaded once at startup and swapped as a whole on refresh,
//! so readers always see either the old or the new list.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{RwLock, Semaphore};
use tokio::task::JoinSet;

use crate::errors::AppError;
use crate::models::Species;
use crate::upstream::PokeApiClient;

/// One loaded species list, ordered by id.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    pub species: Vec<Species>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn find(&self, species_id: u32) -> Option<&Species> {
        self.species
            .binary_search_by_key(&species_id, |s| s.id)
            .ok()
            .map(|idx| &self.species[idx])
    }
}

pub struct Catalog {
    client: PokeApiClient,
    limit: u32,
    concurrency: usize,
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl Catalog {
    pub fn new(client: PokeApiClient, limit: u32, concurrency: usize) -> Self {
        Self {
            client,
            limit,
            concurrency: concurrency.max(1),
            current: RwLock::new(Arc::new(CatalogSnapshot::default())),
        }
    }

    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.read().await.clone()
    }

    /// Fetch the list and every species in it, then swap the snapshot in.
    ///
    /// Species that fail to load are skipped. If the list itself fails, or
    /// nothing could be loaded, the previous snapshot stays in place.
    pub async fn load(&self) -> Result<usize, AppError> {
        let list = self.client.list(self.limit).await?;
        tracing::info!(
            "Loading {} of {} species",
            list.results.len(),
            list.count
        );

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        for entry in list.results {
            let client = self.client.clone();
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await;
                let result = client.pokemon(&entry.name, None).await;
                (entry.name, result)
            });
        }

        let mut species = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(record))) => species.push(record),
                Ok((name, Err(e))) => tracing::warn!("Skipping {}: {}", name, e),
                Err(e) => tracing::error!("Species fetch task failed: {}", e),
            }
        }

        if species.is_empty() {
            return Err(AppError::Upstream(
                "No species could be loaded from PokéAPI".to_string(),
            ));
        }

        species.sort_by_key(|s| s.id);
        species.dedup_by_key(|s| s.id);
        let count = species.len();

        *self.current.write().await = Arc::new(CatalogSnapshot {
            species,
            loaded_at: Some(Utc::now()),
        });
        tracing::info!("Catalog loaded with {} species", count);

        Ok(count)
    }
}
