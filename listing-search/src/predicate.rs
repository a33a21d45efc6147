use crate::criteria::{Criteria, NumericRange};
use crate::enums::{ConditionBucket, FuelType, Transmission, VehicleType};
use crate::types::Listing;
use chrono::Datelike;

/// A single active constraint extracted from [`Criteria`].
///
/// Text values are stored lower-cased so they are folded once per search
/// instead of once per listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingFilter {
    Text(String),
    VehicleType(VehicleType),
    Brand(String),
    FuelType(FuelType),
    Transmission(Transmission),
    Condition(ConditionBucket),
    Location(String),
    Price(NumericRange<f64>),
    Year(NumericRange<i32>),
    Mileage(NumericRange<f64>),
}

/// Compiled form of [`Criteria`]: only the active constraints, cheapest first
#[derive(Debug, Clone)]
pub struct Predicate {
    filters: Vec<ListingFilter>,
    current_year: i32,
}

impl Predicate {
    pub fn new(criteria: &Criteria, current_year: i32) -> Self {
        let mut filters = active_filters(criteria);
        filters.sort_by_key(filter_cost);
        Self {
            filters,
            current_year,
        }
    }

    pub fn filters(&self) -> &[ListingFilter] {
        &self.filters
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters
            .iter()
            .all(|filter| matches_filter(listing, filter, self.current_year))
    }
}

/// Whether `listing` satisfies every active criterion, using today's year
pub fn matches(listing: &Listing, criteria: &Criteria) -> bool {
    matches_at(listing, criteria, current_year())
}

/// Same as [`matches`] with an explicit evaluation year
pub fn matches_at(listing: &Listing, criteria: &Criteria, current_year: i32) -> bool {
    Predicate::new(criteria, current_year).matches(listing)
}

/// Calendar year at the moment of the call (UTC)
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

fn active_filters(criteria: &Criteria) -> Vec<ListingFilter> {
    let mut filters = Vec::new();

    let query = criteria.query.trim();
    if !query.is_empty() {
        filters.push(ListingFilter::Text(query.to_lowercase()));
    }
    if let Some(vehicle_type) = criteria.vehicle_type {
        filters.push(ListingFilter::VehicleType(vehicle_type));
    }
    if let Some(brand) = active_text(criteria.brand.as_deref()) {
        filters.push(ListingFilter::Brand(brand));
    }
    if let Some(fuel_type) = criteria.fuel_type {
        filters.push(ListingFilter::FuelType(fuel_type));
    }
    if let Some(transmission) = criteria.transmission {
        filters.push(ListingFilter::Transmission(transmission));
    }
    if let Some(condition) = criteria.condition {
        filters.push(ListingFilter::Condition(condition));
    }
    if let Some(location) = active_text(criteria.location.as_deref()) {
        filters.push(ListingFilter::Location(location));
    }
    if !criteria.price.is_unbounded() {
        filters.push(ListingFilter::Price(criteria.price));
    }
    if !criteria.year.is_unbounded() {
        filters.push(ListingFilter::Year(criteria.year));
    }
    if !criteria.mileage.is_unbounded() {
        filters.push(ListingFilter::Mileage(criteria.mileage));
    }

    filters
}

fn active_text(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}

/// Rough evaluation cost; equality checks run before ranges and substring scans
fn filter_cost(filter: &ListingFilter) -> u8 {
    match filter {
        ListingFilter::VehicleType(_) => 1,
        ListingFilter::FuelType(_) => 2,
        ListingFilter::Transmission(_) => 3,
        ListingFilter::Condition(_) => 4,
        ListingFilter::Price(_) => 5,
        ListingFilter::Year(_) => 6,
        ListingFilter::Mileage(_) => 7,
        ListingFilter::Brand(_) => 8,
        ListingFilter::Location(_) => 9,
        ListingFilter::Text(_) => 10,
    }
}

fn matches_filter(listing: &Listing, filter: &ListingFilter, current_year: i32) -> bool {
    match filter {
        ListingFilter::Text(needle) => listing
            .searchable_text()
            .any(|field| field.to_lowercase().contains(needle.as_str())),
        ListingFilter::VehicleType(vehicle_type) => listing.vehicle_type == Some(*vehicle_type),
        ListingFilter::Brand(brand) => listing.brand.trim().to_lowercase() == *brand,
        ListingFilter::FuelType(fuel_type) => listing.fuel_type == Some(*fuel_type),
        ListingFilter::Transmission(transmission) => listing.transmission == Some(*transmission),
        ListingFilter::Condition(condition) => {
            listing.condition(current_year) == Some(*condition)
        }
        ListingFilter::Location(location) => listing
            .location()
            .is_some_and(|value| value.to_lowercase().contains(location.as_str())),
        ListingFilter::Price(range) => listing.price.is_some_and(|price| range.contains(price)),
        ListingFilter::Year(range) => listing.year.is_some_and(|year| range.contains(year)),
        ListingFilter::Mileage(range) => listing
            .mileage
            .is_some_and(|mileage| range.contains(mileage)),
    }
}
