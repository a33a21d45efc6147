//! Paginated result pages and their JSON form.

use crate::{Listing, ListingError};
use serde::Serialize;

/// One page of an ordered search result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<'a> {
    pub listings: Vec<&'a Listing>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub has_more: bool,
}

impl<'a> ListingPage<'a> {
    /// Cut page `page` (zero-based) out of the full ordered result
    pub fn new(ordered: Vec<&'a Listing>, page: usize, page_size: usize) -> Self {
        let total_count = ordered.len();
        let start = page.saturating_mul(page_size).min(total_count);
        let end = start.saturating_add(page_size).min(total_count);
        let has_more = end < total_count && page_size > 0;

        let listings = ordered.into_iter().skip(start).take(end - start).collect();

        Self {
            listings,
            total_count,
            page,
            page_size,
            has_more,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn serialize_as_json(&self) -> Result<String, ListingError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn serialize_as_json_pretty(&self) -> Result<String, ListingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
