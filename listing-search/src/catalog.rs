use crate::criteria::Criteria;
use crate::engine::{self, SearchResult};
use crate::errors::ListingError;
use crate::serialization::ListingPage;
use crate::types::{Listing, ListingId};
use serde_json::Value as JsonValue;
use std::path::Path;

/// In-memory snapshot of listings fetched from the listing store
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load listings from a JSON array, skipping records that are not listings
    pub fn from_json(json: &str) -> Result<Self, ListingError> {
        let records = match serde_json::from_str::<JsonValue>(json)? {
            JsonValue::Array(records) => records,
            other => {
                return Err(ListingError::ParseError(format!(
                    "expected a JSON array of listings, found {}",
                    json_kind(&other)
                )))
            }
        };

        let total = records.len();
        let mut listings = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Listing>(record) {
                Ok(listing) => listings.push(listing),
                Err(e) => {
                    tracing::warn!("Skipping invalid listing record #{}: {}", index, e);
                    continue;
                }
            }
        }

        tracing::info!("Loaded {} of {} listing records", listings.len(), total);
        Ok(Self { listings })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ListingError> {
        let json = fs_err::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn require(&self, id: &ListingId) -> Result<&Listing, ListingError> {
        self.get(id)
            .ok_or_else(|| ListingError::ListingNotFound(id.to_string()))
    }

    pub fn search(&self, criteria: &Criteria, limit: Option<usize>) -> SearchResult<'_> {
        engine::search(&self.listings, criteria, limit)
    }

    pub fn search_page(&self, criteria: &Criteria, page: usize, page_size: usize) -> ListingPage<'_> {
        engine::search_page(&self.listings, criteria, page, page_size)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
