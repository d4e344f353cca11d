//! Variant-ability cache.
//!
//! Variant ability lists are fetched the first time a variant is shown and
//! kept for the life of the process. Each id gets its own `OnceCell`, so
//! concurrent requests for the same id share a single upstream call.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::upstream::PokeApiClient;

/// Displayed in place of abilities that could not be fetched.
pub const UNKNOWN_ABILITY: &str = "unknown";

/// Cached outcome of one variant lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantAbilities {
    Known(Vec<String>),
    /// The lookup failed; never retried.
    Unknown,
}

impl VariantAbilities {
    pub fn names(&self) -> Vec<String> {
        match self {
            VariantAbilities::Known(names) => names.clone(),
            VariantAbilities::Unknown => vec![UNKNOWN_ABILITY.to_string()],
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, VariantAbilities::Known(_))
    }
}

/// Point-in-time copy of every completed lookup.
pub type AbilitySnapshot = HashMap<u32, VariantAbilities>;

pub struct AbilityCache {
    client: PokeApiClient,
    entries: Mutex<HashMap<u32, Arc<OnceCell<VariantAbilities>>>>,
}

impl AbilityCache {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached abilities for a variant id, fetching them on first use.
    pub async fn get_or_fetch(&self, variant_id: u32) -> VariantAbilities {
        let cell = {
            let mut entries = self.entries.lock().await;
            entries.entry(variant_id).or_default().clone()
        };
        cell.get_or_init(|| self.fetch(variant_id)).await.clone()
    }

    /// Schedule a background lookup unless the id already has an entry.
    pub async fn prefetch(self: &Arc<Self>, variant_id: u32) {
        if self.entries.lock().await.contains_key(&variant_id) {
            return;
        }
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            cache.get_or_fetch(variant_id).await;
        });
    }

    /// Completed lookups only; in-flight ones are left out.
    pub async fn snapshot(&self) -> AbilitySnapshot {
        self.entries
            .lock()
            .await
            .iter()
            .filter_map(|(id, cell)| cell.get().map(|value| (*id, value.clone())))
            .collect()
    }

    async fn fetch(&self, variant_id: u32) -> VariantAbilities {
        match self.client.pokemon(&variant_id.to_string(), None).await {
            Ok(species) => {
                tracing::debug!("Cached abilities for variant {}", variant_id);
                VariantAbilities::Known(species.abilities.into_iter().map(|a| a.name).collect())
            }
            Err(e) => {
                tracing::warn!("Ability lookup for variant {} failed: {}", variant_id, e);
                VariantAbilities::Unknown
            }
        }
    }
}
