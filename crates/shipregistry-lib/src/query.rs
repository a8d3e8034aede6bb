//! Filtering, ordering, and pagination over ship snapshots.
//!
//! The engine operates on a read-only snapshot taken at the start of a call:
//! it filters with [`ShipFilter`], sorts with [`ShipOrder`], and slices with
//! [`Page`]. Counting is its own operation over the same filter semantics,
//! with no ordering or pagination involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Ship, ShipType};

/// Default number of ships per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Optional per-field constraints combined by logical AND.
///
/// An absent field imposes no constraint; a ship matches only if it satisfies
/// every supplied one. Predicate evaluation is independent per record, so a
/// plain scan over the snapshot suffices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    /// Substring match (case-sensitive) against the ship name.
    pub name: Option<String>,
    /// Substring match (case-sensitive) against the planet.
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Production date at or after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Production date at or before this instant.
    pub before: Option<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<u32>,
    pub max_crew_size: Option<u32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Whether `ship` satisfies every supplied predicate.
    ///
    /// Both date bounds are inclusive.
    pub fn matches(&self, ship: &Ship) -> bool {
        if let Some(name) = self.name.as_deref() {
            if !ship.name.contains(name) {
                return false;
            }
        }
        if let Some(planet) = self.planet.as_deref() {
            if !ship.planet.contains(planet) {
                return false;
            }
        }
        if let Some(ship_type) = self.ship_type {
            if ship.ship_type != ship_type {
                return false;
            }
        }
        if let Some(after) = self.after {
            if ship.prod_date < after {
                return false;
            }
        }
        if let Some(before) = self.before {
            if ship.prod_date > before {
                return false;
            }
        }
        if let Some(is_used) = self.is_used {
            if ship.is_used != is_used {
                return false;
            }
        }
        if let Some(min_speed) = self.min_speed {
            if ship.speed < min_speed {
                return false;
            }
        }
        if let Some(max_speed) = self.max_speed {
            if ship.speed > max_speed {
                return false;
            }
        }
        if let Some(min_crew_size) = self.min_crew_size {
            if ship.crew_size < min_crew_size {
                return false;
            }
        }
        if let Some(max_crew_size) = self.max_crew_size {
            if ship.crew_size > max_crew_size {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if ship.rating < min_rating {
                return false;
            }
        }
        if let Some(max_rating) = self.max_rating {
            if ship.rating > max_rating {
                return false;
            }
        }
        true
    }
}

/// Sort key for listings. Always ascending; ties keep snapshot order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    Date,
    Rating,
}

/// Zero-based pagination window.
///
/// A window starting at or past the end of the filtered set yields an empty
/// page; that is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }
}

/// Filter, order, and paginate a snapshot of ships.
pub fn list(mut snapshot: Vec<Ship>, filter: &ShipFilter, order: ShipOrder, page: Page) -> Vec<Ship> {
    snapshot.retain(|ship| filter.matches(ship));
    sort(&mut snapshot, order);

    let start = page.number.saturating_mul(page.size);
    snapshot.into_iter().skip(start).take(page.size).collect()
}

/// Count the ships in a snapshot matching `filter`.
///
/// Same predicate semantics as [`list`]; no ordering or pagination is
/// applied, and no page-size sentinel exists.
pub fn count(snapshot: &[Ship], filter: &ShipFilter) -> usize {
    snapshot.iter().filter(|ship| filter.matches(ship)).count()
}

fn sort(ships: &mut [Ship], order: ShipOrder) {
    // Vec::sort_by is stable, so equal keys keep snapshot order.
    match order {
        ShipOrder::Id => ships.sort_by_key(|ship| ship.id),
        ShipOrder::Speed => ships.sort_by(|a, b| a.speed.total_cmp(&b.speed)),
        ShipOrder::Date => ships.sort_by_key(|ship| ship.prod_date),
        ShipOrder::Rating => ships.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::compute_rating;
    use chrono::TimeZone;

    fn date(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn ship(id: u64, name: &str, year: i32, speed: f64, crew_size: u32) -> Ship {
        let prod_date = date(year);
        Ship {
            id,
            name: name.to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            prod_date,
            is_used: false,
            speed,
            crew_size,
            rating: compute_rating(speed, prod_date, false),
        }
    }

    fn fleet() -> Vec<Ship> {
        vec![
            ship(1, "Aurora", 3019, 0.50, 10),
            ship(2, "Borealis", 3009, 0.90, 200),
            ship(3, "Caravel", 2900, 0.10, 3000),
            ship(4, "Aurora II", 2999, 0.70, 50),
            ship(5, "Drifter", 3019, 0.30, 9999),
        ]
    }

    #[test]
    fn no_filters_match_everything() {
        let filter = ShipFilter::default();
        assert_eq!(count(&fleet(), &filter), 5);
    }

    #[test]
    fn name_filter_is_substring_and_case_sensitive() {
        let filter = ShipFilter {
            name: Some("Aurora".to_string()),
            ..ShipFilter::default()
        };
        assert_eq!(count(&fleet(), &filter), 2);

        let filter = ShipFilter {
            name: Some("aurora".to_string()),
            ..ShipFilter::default()
        };
        assert_eq!(count(&fleet(), &filter), 0);
    }

    #[test]
    fn date_bounds_are_inclusive_on_both_ends() {
        // after == the exact production instant still matches
        let filter = ShipFilter {
            after: Some(date(3019)),
            ..ShipFilter::default()
        };
        assert_eq!(count(&fleet(), &filter), 2);

        // before == the exact production instant still matches
        let filter = ShipFilter {
            before: Some(date(2900)),
            ..ShipFilter::default()
        };
        assert_eq!(count(&fleet(), &filter), 1);

        // one millisecond earlier no longer matches
        let filter = ShipFilter {
            before: Some(date(2900) - chrono::Duration::milliseconds(1)),
            ..ShipFilter::default()
        };
        assert_eq!(count(&fleet(), &filter), 0);
    }

    #[test]
    fn numeric_ranges_are_inclusive() {
        let filter = ShipFilter {
            min_speed: Some(0.30),
            max_speed: Some(0.70),
            ..ShipFilter::default()
        };
        let ids: Vec<u64> = list(fleet(), &filter, ShipOrder::Id, Page::new(0, 10))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 4, 5]);

        let filter = ShipFilter {
            min_crew_size: Some(10),
            max_crew_size: Some(200),
            ..ShipFilter::default()
        };
        assert_eq!(count(&fleet(), &filter), 3);
    }

    #[test]
    fn supplied_filters_combine_with_and() {
        let filter = ShipFilter {
            name: Some("Aurora".to_string()),
            min_speed: Some(0.60),
            ..ShipFilter::default()
        };
        let ships = list(fleet(), &filter, ShipOrder::Id, Page::new(0, 10));
        assert_eq!(ships.len(), 1);
        assert_eq!(ships[0].id, 4);
    }

    #[test]
    fn default_order_is_ascending_id() {
        let shuffled = vec![fleet()[3].clone(), fleet()[0].clone(), fleet()[4].clone()];
        let ids: Vec<u64> = list(shuffled, &ShipFilter::default(), ShipOrder::Id, Page::new(0, 10))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 4, 5]);
    }

    #[test]
    fn orders_by_each_selectable_key() {
        let by_speed: Vec<u64> =
            list(fleet(), &ShipFilter::default(), ShipOrder::Speed, Page::new(0, 10))
                .into_iter()
                .map(|s| s.id)
                .collect();
        assert_eq!(by_speed, vec![3, 5, 1, 4, 2]);

        let by_date: Vec<u64> =
            list(fleet(), &ShipFilter::default(), ShipOrder::Date, Page::new(0, 10))
                .into_iter()
                .map(|s| s.id)
                .collect();
        assert_eq!(by_date, vec![3, 4, 2, 1, 5]);

        let by_rating: Vec<u64> =
            list(fleet(), &ShipFilter::default(), ShipOrder::Rating, Page::new(0, 10))
                .into_iter()
                .map(|s| s.id)
                .collect();
        // ratings: 40.0, 6.55, 0.07, 2.67, 24.0
        assert_eq!(by_rating, vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn equal_sort_keys_keep_snapshot_order() {
        // ids 1 and 5 share prod year 3019; stable sort keeps 1 before 5
        let by_date: Vec<u64> =
            list(fleet(), &ShipFilter::default(), ShipOrder::Date, Page::new(0, 10))
                .into_iter()
                .map(|s| s.id)
                .collect();
        assert_eq!(&by_date[3..], &[1, 5]);
    }

    #[test]
    fn paginates_with_clamped_final_page() {
        let page0: Vec<u64> = list(fleet(), &ShipFilter::default(), ShipOrder::Id, Page::new(0, 3))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(page0, vec![1, 2, 3]);

        let page1: Vec<u64> = list(fleet(), &ShipFilter::default(), ShipOrder::Id, Page::new(1, 3))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(page1, vec![4, 5]);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let page2 = list(fleet(), &ShipFilter::default(), ShipOrder::Id, Page::new(2, 3));
        assert!(page2.is_empty());
    }

    #[test]
    fn count_ignores_ordering_and_pagination() {
        let filter = ShipFilter {
            min_speed: Some(0.30),
            ..ShipFilter::default()
        };
        let total = count(&fleet(), &filter);
        let all: Vec<Ship> = list(fleet(), &filter, ShipOrder::Id, Page::new(0, usize::MAX));
        assert_eq!(total, all.len());
    }

    #[test]
    fn default_page_is_first_page_of_three() {
        let page = Page::default();
        assert_eq!(page.number, 0);
        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
    }
}
