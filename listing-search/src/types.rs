use crate::enums::{ConditionBucket, FuelType, Transmission, VehicleType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::str::FromStr;

/// Opaque listing identifier as handed out by the listing store
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// The store uses both numeric and string ids depending on the backend.
impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::String(s) => Ok(Self(s)),
            JsonValue::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "listing id must be a string or number, found {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub location: Option<String>,
}

/// A vehicle listing as returned by the listing store.
///
/// Unknown fields are ignored and unrecognised categorical or numeric values
/// are read as absent, so a single odd record never poisons a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: ListingId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        alias = "vehicleType",
        default,
        deserialize_with = "lenient"
    )]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, deserialize_with = "lenient")]
    pub fuel_type: Option<FuelType>,
    #[serde(default, deserialize_with = "lenient")]
    pub transmission: Option<Transmission>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub mileage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_contact")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_promoted: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl Listing {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ListingId::new(id),
            ..Default::default()
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.contact_info
            .as_ref()
            .and_then(|contact| contact.location.as_deref())
    }

    /// Approval time, falling back to creation time for listings approved implicitly
    pub fn approval_timestamp(&self) -> Option<DateTime<Utc>> {
        self.approved_at.or(self.created_at)
    }

    /// Year-derived condition; the listing's own condition field is not consulted
    pub fn condition(&self, current_year: i32) -> Option<ConditionBucket> {
        self.year
            .map(|year| ConditionBucket::for_year(year, current_year))
    }

    /// Text fields searched by the free-text query
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            Some(self.brand.as_str()),
            Some(self.model.as_str()),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        JsonValue::String(s) => s.trim().parse().ok(),
        JsonValue::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }))
}

// null and non-text values read as empty text
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Accepts booleans, `"true"`/`"false"` and `0`/`1`; anything else is `false`
fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(JsonValue::Bool(flag)) => flag,
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(JsonValue::String(s)) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes")
        }
        _ => false,
    })
}

fn lenient_contact<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ContactInfo>, D::Error> {
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_fields() {
        let listing: Listing = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Golf",
                "type": "CAR",
                "fuelType": "rocket",
                "price": "12500.50",
                "year": 2019,
                "mileage": null,
                "createdAt": "2024-05-01T10:00:00Z",
                "approvedAt": "not a date",
                "sellerRating": 4.5
            }"#,
        )
        .unwrap();

        assert_eq!(listing.id.as_str(), "42");
        assert_eq!(listing.vehicle_type, Some(VehicleType::Car));
        assert_eq!(listing.fuel_type, None);
        assert_eq!(listing.price, Some(12500.5));
        assert_eq!(listing.year, Some(2019));
        assert_eq!(listing.mileage, None);
        assert!(listing.created_at.is_some());
        assert_eq!(listing.approved_at, None);
        assert_eq!(listing.approval_timestamp(), listing.created_at);
    }

    #[test]
    fn test_location_nested_under_contact_info() {
        let listing: Listing = serde_json::from_str(
            r#"{"_id": "abc", "contactInfo": {"location": "Lyon", "phone": "123"}}"#,
        )
        .unwrap();
        assert_eq!(listing.location(), Some("Lyon"));
        assert_eq!(Listing::new("x").location(), None);
    }

    #[test]
    fn test_lenient_flag_values() {
        for (raw, expected) in [
            ("true", true),
            ("false", false),
            ("null", false),
            ("1", true),
            ("0", false),
            ("\"true\"", true),
            ("\" FALSE \"", false),
            ("\"1\"", true),
            ("\"maybe\"", false),
            ("[]", false),
        ] {
            let json = format!(r#"{{"id": "f", "isPromoted": {}}}"#, raw);
            let listing: Listing = serde_json::from_str(&json).unwrap();
            assert_eq!(listing.is_promoted, expected, "isPromoted: {}", raw);
        }
    }

    #[test]
    fn test_null_and_odd_text_fields() {
        let listing: Listing = serde_json::from_str(
            r#"{
                "id": "t",
                "title": null,
                "brand": 123,
                "model": ["x"],
                "description": false,
                "contactInfo": "Lyon"
            }"#,
        )
        .unwrap();
        assert_eq!(listing.title, "");
        assert_eq!(listing.brand, "123");
        assert_eq!(listing.model, "");
        assert_eq!(listing.description, None);
        assert_eq!(listing.contact_info, None);

        let listing: Listing =
            serde_json::from_str(r#"{"id": "u", "contactInfo": {"location": null}}"#).unwrap();
        assert_eq!(listing.location(), None);
    }

    #[test]
    fn test_id_must_be_scalar() {
        let result: Result<Listing, _> = serde_json::from_str(r#"{"id": {"nested": 1}}"#);
        assert!(result.is_err());
    }
}
