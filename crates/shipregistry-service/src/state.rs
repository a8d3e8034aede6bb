//! Application state for the HTTP service.
//!
//! The registry and its in-memory store live behind a read-write lock that
//! serializes conflicting writes; the core itself stays a synchronous
//! computation and never sees the lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use shipregistry_lib::{InMemoryStore, ShipRegistry};

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor. Readers proceed concurrently, writers are exclusive.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<ShipRegistry<InMemoryStore>>>,
}

impl AppState {
    /// Create state around an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(ShipRegistry::new(InMemoryStore::new()))),
        }
    }

    /// Access the registry lock.
    pub fn registry(&self) -> &RwLock<ShipRegistry<InMemoryStore>> {
        &self.registry
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipregistry_lib::ShipFilter;

    #[tokio::test]
    async fn state_starts_with_an_empty_registry() {
        let state = AppState::new();
        let registry = state.registry().read().await;
        assert_eq!(registry.count(&ShipFilter::default()), 0);
    }

    #[tokio::test]
    async fn clones_share_the_same_registry() {
        let state1 = AppState::new();
        let state2 = state1.clone();

        let input = shipregistry_lib::ShipInput {
            name: Some("Falcon".to_string()),
            planet: Some("Corellia".to_string()),
            ship_type: Some(shipregistry_lib::ShipType::Transport),
            prod_date: chrono::DateTime::from_timestamp_millis(33_100_000_000_000),
            is_used: None,
            speed: Some(0.5),
            crew_size: Some(4),
        };
        state1
            .registry()
            .write()
            .await
            .create(input)
            .expect("valid ship");

        let registry = state2.registry().read().await;
        assert_eq!(registry.count(&ShipFilter::default()), 1);
    }
}
