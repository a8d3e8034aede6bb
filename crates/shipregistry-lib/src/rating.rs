//! Rating derivation for registered ships.
//!
//! The rating summarizes speed, usage, and age in a single score:
//!
//! ```text
//! k = 0.5 if used else 1.0
//! age = 3019 - year(prod_date)
//! rating = round2(80 * speed * k / (age + 1))
//! ```
//!
//! Valid production years never exceed 3019, so `age >= 0` and the divisor
//! `age + 1` is never zero.

use chrono::{DateTime, Datelike, Utc};

/// The calendar year ratings are computed relative to. Also the latest
/// production year a ship may carry.
pub const CURRENT_YEAR: i32 = 3019;

/// Base multiplier of the rating formula.
pub const RATING_BASE: f64 = 80.0;

/// Penalty factor applied to used ships.
pub const USED_FACTOR: f64 = 0.5;

/// Round to two decimal places, halves away from zero.
///
/// Shared between rating derivation and speed storage, which both persist
/// two-decimal values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the rating of a ship from its mutable fields.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shipregistry_lib::rating::compute_rating;
///
/// let prod_date = Utc.with_ymd_and_hms(3019, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(compute_rating(0.5, prod_date, false), 40.0);
/// ```
pub fn compute_rating(speed: f64, prod_date: DateTime<Utc>, is_used: bool) -> f64 {
    let k = if is_used { USED_FACTOR } else { 1.0 };
    let age = CURRENT_YEAR - prod_date.year();
    round2(RATING_BASE * speed * k / f64::from(age + 1))
}
