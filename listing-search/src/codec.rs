//! Flat string map / URL query string form of [`Criteria`], for shareable searches.
//!
//! Default values are left out of the encoded map, and a missing key decodes
//! back to the default. Anything that does not parse is treated as absent.

use crate::criteria::{normalize_filter_text, Criteria, NumericRange, RangeBound};
use crate::enums::{SortDirection, SortKey};
use std::collections::BTreeMap;
use std::str::FromStr;

pub const KEY_QUERY: &str = "q";
pub const KEY_TYPE: &str = "type";
pub const KEY_BRAND: &str = "brand";
pub const KEY_FUEL_TYPE: &str = "fuelType";
pub const KEY_TRANSMISSION: &str = "transmission";
pub const KEY_CONDITION: &str = "condition";
pub const KEY_LOCATION: &str = "location";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_MIN_YEAR: &str = "minYear";
pub const KEY_MAX_YEAR: &str = "maxYear";
pub const KEY_MIN_MILEAGE: &str = "minMileage";
pub const KEY_MAX_MILEAGE: &str = "maxMileage";
pub const KEY_SORT_BY: &str = "sortBy";
pub const KEY_SORT_ORDER: &str = "sortOrder";

pub fn encode(criteria: &Criteria) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let mut put = |key: &str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            map.insert(key.to_string(), value);
        }
    };

    put(KEY_QUERY, Some(criteria.query.clone()));
    put(KEY_TYPE, criteria.vehicle_type.map(|v| v.to_string()));
    put(KEY_BRAND, criteria.brand.clone());
    put(KEY_FUEL_TYPE, criteria.fuel_type.map(|v| v.to_string()));
    put(KEY_TRANSMISSION, criteria.transmission.map(|v| v.to_string()));
    put(KEY_CONDITION, criteria.condition.map(|v| v.to_string()));
    put(KEY_LOCATION, criteria.location.clone());
    put(KEY_MIN_PRICE, criteria.price.min.map(|v| v.to_string()));
    put(KEY_MAX_PRICE, criteria.price.max.map(|v| v.to_string()));
    put(KEY_MIN_YEAR, criteria.year.min.map(|v| v.to_string()));
    put(KEY_MAX_YEAR, criteria.year.max.map(|v| v.to_string()));
    put(KEY_MIN_MILEAGE, criteria.mileage.min.map(|v| v.to_string()));
    put(KEY_MAX_MILEAGE, criteria.mileage.max.map(|v| v.to_string()));
    if criteria.sort_by != SortKey::default() {
        put(KEY_SORT_BY, Some(criteria.sort_by.to_string()));
    }
    if criteria.sort_order != SortDirection::default() {
        put(KEY_SORT_ORDER, Some(criteria.sort_order.to_string()));
    }

    map
}

/// Rebuild criteria from key/value pairs. Unknown keys are ignored and later
/// duplicates win.
pub fn decode<I, K, V>(pairs: I) -> Criteria
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let map: BTreeMap<String, String> = pairs
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();
    let get = |key: &str| map.get(key).map(String::as_str);

    // An unrecognised sort key resets the whole ordering, direction included.
    let (sort_by, sort_order) = match parse_enum::<SortKey>(KEY_SORT_BY, get(KEY_SORT_BY)) {
        None if is_set(get(KEY_SORT_BY)) => (SortKey::default(), SortDirection::default()),
        sort_by => (
            sort_by.unwrap_or_default(),
            parse_enum(KEY_SORT_ORDER, get(KEY_SORT_ORDER)).unwrap_or_default(),
        ),
    };

    Criteria {
        query: get(KEY_QUERY).unwrap_or_default().trim().to_string(),
        vehicle_type: parse_enum(KEY_TYPE, get(KEY_TYPE)),
        brand: get(KEY_BRAND).and_then(normalize_filter_text),
        fuel_type: parse_enum(KEY_FUEL_TYPE, get(KEY_FUEL_TYPE)),
        transmission: parse_enum(KEY_TRANSMISSION, get(KEY_TRANSMISSION)),
        condition: parse_enum(KEY_CONDITION, get(KEY_CONDITION)),
        location: get(KEY_LOCATION).and_then(normalize_filter_text),
        price: parse_range(get(KEY_MIN_PRICE), get(KEY_MAX_PRICE)),
        year: parse_range(get(KEY_MIN_YEAR), get(KEY_MAX_YEAR)),
        mileage: parse_range(get(KEY_MIN_MILEAGE), get(KEY_MAX_MILEAGE)),
        sort_by,
        sort_order,
    }
}

/// Render criteria as `key=value&...` (no leading `?`), keys sorted
pub fn to_query_string(criteria: &Criteria) -> String {
    encode(criteria)
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a URL query string, with or without the leading `?`
pub fn from_query_string(query_string: &str) -> Criteria {
    decode(query_pairs(query_string))
}

/// Percent-decoded `(key, value)` pairs in input order; a piece without `=`
/// yields an empty value.
pub fn query_pairs(query_string: &str) -> Vec<(String, String)> {
    let query_string = query_string.trim();
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect()
}

// Malformed escapes keep the raw text instead of dropping the parameter.
fn percent_decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

// Empty and "all" mean the key was not given.
fn is_set(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_some_and(|raw| !raw.is_empty() && !raw.eq_ignore_ascii_case("all"))
}

fn parse_enum<T: FromStr>(key: &str, raw: Option<&str>) -> Option<T> {
    if !is_set(raw) {
        return None;
    }
    let raw = raw?.trim();
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        tracing::debug!("ignoring unrecognised value {:?} for {}", raw, key);
    }
    parsed
}

fn parse_range<T: RangeBound>(min: Option<&str>, max: Option<&str>) -> NumericRange<T> {
    NumericRange::parse(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_keeps_order_and_duplicates() {
        assert_eq!(
            query_pairs("?b=2&&a&b=3"),
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), String::new()),
                ("b".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_percent_decode_plus_and_garbage() {
        assert_eq!(percent_decode("new+york"), "new york");
        assert_eq!(percent_decode("S%C3%A3o%20Paulo"), "São Paulo");
        assert_eq!(percent_decode("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_parse_enum_all_is_absent() {
        assert_eq!(parse_enum::<SortKey>(KEY_SORT_BY, Some("all")), None);
        assert_eq!(
            parse_enum::<SortKey>(KEY_SORT_BY, Some(" price ")),
            Some(SortKey::Price)
        );
    }
}
