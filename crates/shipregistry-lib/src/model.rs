//! Ship data types.
//!
//! [`Ship`] is the persisted record; [`ShipInput`] is the field-presence
//! wrapper clients submit. Create requires every `ShipInput` field to be
//! present, update merges only the supplied ones. The same wrapper serves
//! both, so "required here, optional there" lives in the validator instead
//! of being scattered across handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category a ship belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

/// A registered ship.
///
/// `rating` is always derived from `speed`, `prod_date`, and `is_used`; it is
/// recomputed on every write and never accepted from a client. `id` is
/// assigned by storage on first save and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: u64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    /// Production date; on the wire this is epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    /// Stored rounded to two decimal places.
    pub speed: f64,
    pub crew_size: u32,
    pub rating: f64,
}

/// Client-supplied ship fields, all optional.
///
/// Absent fields deserialize to `None`; there is no way for a client to
/// supply an id or a rating through this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipInput {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub speed: Option<f64>,
    pub crew_size: Option<u32>,
}
