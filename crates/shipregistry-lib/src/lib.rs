//! Ship registry library entry points.
//!
//! This crate holds the registry's core engine: the ship data model, field
//! validation, rating derivation, the query engine (filter, order,
//! paginate), the storage abstraction, and the orchestrator tying them
//! together. Higher-level consumers (the HTTP service) should only depend on
//! the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod model;
pub mod query;
pub mod rating;
pub mod registry;
pub mod storage;
pub mod validate;

pub use error::{Error, Result};
pub use model::{Ship, ShipInput, ShipType};
pub use query::{Page, ShipFilter, ShipOrder, DEFAULT_PAGE_SIZE};
pub use rating::compute_rating;
pub use registry::ShipRegistry;
pub use storage::{InMemoryStore, ShipStore};
