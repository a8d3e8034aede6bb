//! Query and path parameter decoding for the registry endpoints.
//!
//! The listing and count endpoints share one parameter set; the count
//! endpoint simply never looks at the ordering and pagination fields, so no
//! page-size sentinel exists anywhere on this surface.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use shipregistry_lib::{Page, ShipFilter, ShipOrder, ShipType, DEFAULT_PAGE_SIZE};

use crate::problem::ProblemDetails;

/// Query parameters accepted by `GET /rest/ships` and
/// `GET /rest/ships/count`.
///
/// All filters are optional; `after`/`before` are epoch milliseconds.
/// Defaults follow the public contract: `order=ID`, `pageNumber=0`,
/// `pageSize=3`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipQueryParams {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<u32>,
    pub max_crew_size: Option<u32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub order: ShipOrder,
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for ShipQueryParams {
    fn default() -> Self {
        Self {
            name: None,
            planet: None,
            ship_type: None,
            after: None,
            before: None,
            is_used: None,
            min_speed: None,
            max_speed: None,
            min_crew_size: None,
            max_crew_size: None,
            min_rating: None,
            max_rating: None,
            order: ShipOrder::Id,
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ShipQueryParams {
    /// Build the library filter from the supplied parameters.
    pub fn filter(&self, request_id: &str) -> Result<ShipFilter, Box<ProblemDetails>> {
        Ok(ShipFilter {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type,
            after: parse_epoch_millis("after", self.after, request_id)?,
            before: parse_epoch_millis("before", self.before, request_id)?,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        })
    }

    /// Build the pagination window. The page size must be at least 1; there
    /// is no reserved value.
    pub fn page(&self, request_id: &str) -> Result<Page, Box<ProblemDetails>> {
        if self.page_size == 0 {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'pageSize' parameter must be at least 1",
                request_id,
            )));
        }
        Ok(Page::new(self.page_number, self.page_size))
    }
}

fn parse_epoch_millis(
    field: &str,
    value: Option<i64>,
    request_id: &str,
) -> Result<Option<DateTime<Utc>>, Box<ProblemDetails>> {
    match value {
        None => Ok(None),
        Some(millis) => DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| {
                Box::new(ProblemDetails::bad_request(
                    format!("The '{field}' parameter is not a valid epoch timestamp"),
                    request_id,
                ))
            }),
    }
}

/// Parse a path-supplied ship id.
///
/// Ids must parse as positive integers; anything else is rejected before the
/// request reaches the registry.
pub fn parse_ship_id(raw: &str, request_id: &str) -> Result<u64, Box<ProblemDetails>> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Box::new(ProblemDetails::bad_request(
            format!("'{raw}' is not a valid ship id"),
            request_id,
        ))),
    }
}
