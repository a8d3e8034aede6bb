//! The registry orchestrator.
//!
//! [`ShipRegistry`] sequences validation, rating derivation, and storage
//! calls for the write path, and delegates listing and counting to the query
//! engine over a snapshot from its store. All validation happens before any
//! mutation reaches storage, so a rejected write never leaves a partially
//! updated record behind.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Ship, ShipInput};
use crate::query::{self, Page, ShipFilter, ShipOrder};
use crate::rating::{compute_rating, round2};
use crate::storage::ShipStore;
use crate::validate;

/// Orchestrates ship operations over an explicitly injected store.
#[derive(Debug)]
pub struct ShipRegistry<S> {
    store: S,
}

impl<S: ShipStore> ShipRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new ship.
    ///
    /// Requires every field of `input` except `isUsed`, which defaults to
    /// `false`. Speed is stored rounded to two decimals and the rating is
    /// derived before the record is persisted.
    pub fn create(&mut self, input: ShipInput) -> Result<Ship> {
        let new = validate::validate_new(&input)?;

        let speed = round2(new.speed);
        let is_used = new.is_used.unwrap_or(false);
        let rating = compute_rating(speed, new.prod_date, is_used);

        let stored = self.store.save(Ship {
            id: 0,
            name: new.name,
            planet: new.planet,
            ship_type: new.ship_type,
            prod_date: new.prod_date,
            is_used,
            speed,
            crew_size: new.crew_size,
            rating,
        });
        debug!(id = stored.id, rating = stored.rating, "ship registered");
        Ok(stored)
    }

    /// Apply a partial update to an existing ship.
    ///
    /// Every supplied field is validated before any of them is merged; the
    /// rating is recomputed from the record's final speed, production date,
    /// and usage flag. The id never changes.
    pub fn update(&mut self, id: u64, input: ShipInput) -> Result<Ship> {
        let mut ship = self.find(id)?;
        validate::validate_patch(&input)?;

        if let Some(name) = input.name {
            ship.name = name;
        }
        if let Some(planet) = input.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = input.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = input.prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = input.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = input.speed {
            ship.speed = round2(speed);
        }
        if let Some(crew_size) = input.crew_size {
            ship.crew_size = crew_size;
        }
        ship.rating = compute_rating(ship.speed, ship.prod_date, ship.is_used);

        let stored = self.store.save(ship);
        debug!(id = stored.id, rating = stored.rating, "ship updated");
        Ok(stored)
    }

    /// Remove a ship by id.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.find(id)?;
        self.store.delete_by_id(id);
        debug!(id, "ship deleted");
        Ok(())
    }

    /// Fetch a ship by id.
    pub fn find(&self, id: u64) -> Result<Ship> {
        self.store.fetch_by_id(id).ok_or(Error::NotFound { id })
    }

    /// List ships matching `filter`, ordered and paginated.
    ///
    /// Operates on a snapshot taken from the store at the start of the call.
    pub fn list(&self, filter: &ShipFilter, order: ShipOrder, page: Page) -> Vec<Ship> {
        query::list(self.store.fetch_all(), filter, order, page)
    }

    /// Count ships matching `filter`.
    pub fn count(&self, filter: &ShipFilter) -> usize {
        query::count(&self.store.fetch_all(), filter)
    }
}
