//! Storage abstraction for ship records.
//!
//! The registry talks to storage exclusively through [`ShipStore`]; the
//! collaborator owns the long-lived records and hands out snapshots. Each
//! call is atomic on its own; serializing concurrent callers is the
//! collaborator's job, not the registry's.

use std::collections::BTreeMap;

use crate::model::Ship;

/// Storage collaborator interface.
///
/// `fetch_all` returns ships in storage's natural order, which is ascending
/// id. `save` assigns the next free id to a ship that does not carry one yet
/// (`id == 0`) and otherwise overwrites the record in place.
pub trait ShipStore {
    fn fetch_all(&self) -> Vec<Ship>;

    fn fetch_by_id(&self, id: u64) -> Option<Ship>;

    fn save(&mut self, ship: Ship) -> Ship;

    /// Remove a ship; returns whether a record existed.
    fn delete_by_id(&mut self, id: u64) -> bool;
}

/// In-memory store over an ordered map.
///
/// Ids start at 1 and are never reused within the lifetime of the store,
/// even after deletions.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ships: BTreeMap<u64, Ship>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ships.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}

impl ShipStore for InMemoryStore {
    fn fetch_all(&self) -> Vec<Ship> {
        self.ships.values().cloned().collect()
    }

    fn fetch_by_id(&self, id: u64) -> Option<Ship> {
        self.ships.get(&id).cloned()
    }

    fn save(&mut self, mut ship: Ship) -> Ship {
        if ship.id == 0 {
            self.last_id += 1;
            ship.id = self.last_id;
        }
        self.ships.insert(ship.id, ship.clone());
        ship
    }

    fn delete_by_id(&mut self, id: u64) -> bool {
        self.ships.remove(&id).is_some()
    }
}
