//! Field validation for ship payloads.
//!
//! Bounds are checked here and nowhere else. Creation requires every field of
//! a [`ShipInput`] to be present and in bounds; update checks only the fields
//! the caller supplied. Both paths validate everything before the caller
//! mutates or persists anything.

use chrono::{DateTime, Datelike, Utc};

use crate::error::{Error, Result};
use crate::model::{ShipInput, ShipType};
use crate::rating::CURRENT_YEAR;

/// Maximum length of ship and planet names, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// Earliest valid production year.
pub const PROD_YEAR_MIN: i32 = 2800;

/// Latest valid production year.
pub const PROD_YEAR_MAX: i32 = CURRENT_YEAR;

/// Inclusive speed bounds.
pub const SPEED_MIN: f64 = 0.01;
pub const SPEED_MAX: f64 = 0.99;

/// Inclusive crew size bounds.
pub const CREW_SIZE_MIN: u32 = 1;
pub const CREW_SIZE_MAX: u32 = 9999;

/// A fully-present, bounds-checked creation payload.
///
/// Produced by [`validate_new`] so the orchestrator works with concrete
/// fields instead of re-unwrapping options it already proved present.
/// `is_used` stays optional; creation defaults it to `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: Option<bool>,
    pub speed: f64,
    pub crew_size: u32,
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Validation {
        message: message.into(),
    }
}

fn missing(field: &str) -> Error {
    invalid(format!("missing required field '{field}'"))
}

fn check_text(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(format!("{field} must not be empty")));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(invalid(format!(
            "{field} must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a ship name.
pub fn validate_name(name: &str) -> Result<()> {
    check_text("name", name)
}

/// Validate a planet name.
pub fn validate_planet(planet: &str) -> Result<()> {
    check_text("planet", planet)
}

/// Validate a production date: its calendar year must lie in
/// [`PROD_YEAR_MIN`, `PROD_YEAR_MAX`].
pub fn validate_prod_date(prod_date: DateTime<Utc>) -> Result<()> {
    let year = prod_date.year();
    if !(PROD_YEAR_MIN..=PROD_YEAR_MAX).contains(&year) {
        return Err(invalid(format!(
            "prodDate year {year} must lie in [{PROD_YEAR_MIN}, {PROD_YEAR_MAX}]"
        )));
    }
    Ok(())
}

/// Validate a speed value against the inclusive [`SPEED_MIN`, `SPEED_MAX`]
/// range. The raw value is checked; rounding to two decimals happens at the
/// write path and never moves an accepted value out of bounds.
pub fn validate_speed(speed: f64) -> Result<()> {
    if !speed.is_finite() || !(SPEED_MIN..=SPEED_MAX).contains(&speed) {
        return Err(invalid(format!(
            "speed {speed} must lie in [{SPEED_MIN}, {SPEED_MAX}]"
        )));
    }
    Ok(())
}

/// Validate a crew size.
pub fn validate_crew_size(crew_size: u32) -> Result<()> {
    if !(CREW_SIZE_MIN..=CREW_SIZE_MAX).contains(&crew_size) {
        return Err(invalid(format!(
            "crewSize {crew_size} must lie in [{CREW_SIZE_MIN}, {CREW_SIZE_MAX}]"
        )));
    }
    Ok(())
}

/// Validate a creation payload: every field must be present and in bounds.
///
/// Returns the concrete field values on success. `is_used` may legitimately
/// be absent and is passed through untouched.
pub fn validate_new(input: &ShipInput) -> Result<NewShip> {
    let name = input.name.clone().ok_or_else(|| missing("name"))?;
    let planet = input.planet.clone().ok_or_else(|| missing("planet"))?;
    let ship_type = input.ship_type.ok_or_else(|| missing("shipType"))?;
    let prod_date = input.prod_date.ok_or_else(|| missing("prodDate"))?;
    let speed = input.speed.ok_or_else(|| missing("speed"))?;
    let crew_size = input.crew_size.ok_or_else(|| missing("crewSize"))?;

    validate_name(&name)?;
    validate_planet(&planet)?;
    validate_prod_date(prod_date)?;
    validate_speed(speed)?;
    validate_crew_size(crew_size)?;

    Ok(NewShip {
        name,
        planet,
        ship_type,
        prod_date,
        is_used: input.is_used,
        speed,
        crew_size,
    })
}

/// Validate an update payload: only supplied fields are checked.
///
/// All supplied fields are validated before the caller merges any of them,
/// so a partially-invalid payload never half-applies.
pub fn validate_patch(input: &ShipInput) -> Result<()> {
    if let Some(name) = input.name.as_deref() {
        validate_name(name)?;
    }
    if let Some(planet) = input.planet.as_deref() {
        validate_planet(planet)?;
    }
    if let Some(prod_date) = input.prod_date {
        validate_prod_date(prod_date)?;
    }
    if let Some(speed) = input.speed {
        validate_speed(speed)?;
    }
    if let Some(crew_size) = input.crew_size {
        validate_crew_size(crew_size)?;
    }
    Ok(())
}
