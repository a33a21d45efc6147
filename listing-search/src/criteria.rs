use crate::enums::{ConditionBucket, FuelType, SortDirection, SortKey, Transmission, VehicleType};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Value usable as a range bound
pub trait RangeBound: Copy + PartialOrd + FromStr + Display {
    /// Whether a parsed value is usable as a bound at all
    fn is_valid_bound(&self) -> bool;
}

impl RangeBound for f64 {
    fn is_valid_bound(&self) -> bool {
        self.is_finite()
    }
}

impl RangeBound for i32 {
    fn is_valid_bound(&self) -> bool {
        true
    }
}

/// Inclusive numeric range; either side may be open. Bounds are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NumericRange<T> {
    pub(crate) min: Option<T>,
    pub(crate) max: Option<T>,
}

impl<T: RangeBound> NumericRange<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self {
            min: min.filter(RangeBound::is_valid_bound),
            max: max.filter(RangeBound::is_valid_bound),
        }
    }

    /// Build a range from raw text bounds; unparseable bounds are dropped, not zeroed
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Self {
        Self::new(
            min.and_then(parse_bound::<T>),
            max.and_then(parse_bound::<T>),
        )
    }

    pub fn min(&self) -> Option<T> {
        self.min
    }

    pub fn max(&self) -> Option<T> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| min <= value) && self.max.map_or(true, |max| value <= max)
    }
}

pub(crate) fn parse_bound<T: RangeBound>(raw: &str) -> Option<T> {
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(RangeBound::is_valid_bound)
}

/// Empty and "all" both mean the filter is switched off
pub(crate) fn normalize_filter_text(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(value.to_string())
    }
}

/// Everything a user selected for one search: text, filters and ordering.
///
/// Only the `with_*` builders and the codec construct criteria, and both
/// normalise their input, so every value is already in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub(crate) query: String,
    pub(crate) vehicle_type: Option<VehicleType>,
    pub(crate) brand: Option<String>,
    pub(crate) fuel_type: Option<FuelType>,
    pub(crate) transmission: Option<Transmission>,
    pub(crate) condition: Option<ConditionBucket>,
    pub(crate) location: Option<String>,
    pub(crate) price: NumericRange<f64>,
    pub(crate) year: NumericRange<i32>,
    pub(crate) mileage: NumericRange<f64>,
    pub(crate) sort_by: SortKey,
    pub(crate) sort_order: SortDirection,
}

impl Criteria {
    /// Create criteria with no filters and the default ordering
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_string();
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brand = normalize_filter_text(brand);
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    pub fn with_transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = Some(transmission);
        self
    }

    pub fn with_condition(mut self, condition: ConditionBucket) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = normalize_filter_text(location);
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price = NumericRange::new(min, max);
        self
    }

    pub fn with_year_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.year = NumericRange::new(min, max);
        self
    }

    pub fn with_mileage_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.mileage = NumericRange::new(min, max);
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey, sort_order: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn vehicle_type(&self) -> Option<VehicleType> {
        self.vehicle_type
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn fuel_type(&self) -> Option<FuelType> {
        self.fuel_type
    }

    pub fn transmission(&self) -> Option<Transmission> {
        self.transmission
    }

    pub fn condition(&self) -> Option<ConditionBucket> {
        self.condition
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn price(&self) -> NumericRange<f64> {
        self.price
    }

    pub fn year(&self) -> NumericRange<i32> {
        self.year
    }

    pub fn mileage(&self) -> NumericRange<f64> {
        self.mileage
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn sort_order(&self) -> SortDirection {
        self.sort_order
    }

    /// Number of active filter constraints; sorting does not count
    pub fn active_filter_count(&self) -> usize {
        let bounds = [
            self.price.min.is_some(),
            self.price.max.is_some(),
            self.year.min.is_some(),
            self.year.max.is_some(),
            self.mileage.min.is_some(),
            self.mileage.max.is_some(),
        ];
        let filters = [
            !self.query.trim().is_empty(),
            self.vehicle_type.is_some(),
            self.brand.is_some(),
            self.fuel_type.is_some(),
            self.transmission.is_some(),
            self.condition.is_some(),
            self.location.is_some(),
        ];
        bounds.iter().chain(filters.iter()).filter(|active| **active).count()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active_filter_count() == 0
    }
}
