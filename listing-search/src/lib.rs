//! Search, filter and ranking engine for vehicle marketplace listings.
//!
//! Listings come from the listing store, criteria come from the UI or a
//! shared URL. [`search`] filters, ranks (promoted listings always first) and
//! truncates; [`codec`] maps criteria to and from query strings.

pub mod catalog;
pub mod codec;
pub mod criteria;
pub mod engine;
pub mod enums;
pub mod errors;
pub mod predicate;
pub mod ranking;
pub mod serialization;
pub mod types;

pub use catalog::ListingCatalog;
pub use codec::{decode, encode, from_query_string, query_pairs, to_query_string};
pub use criteria::{Criteria, NumericRange, RangeBound};
pub use engine::{search, search_at, search_page, search_page_at, SearchResult};
pub use enums::{ConditionBucket, FuelType, SortDirection, SortKey, Transmission, VehicleType};
pub use errors::ListingError;
pub use predicate::{current_year, matches, matches_at, ListingFilter, Predicate};
pub use ranking::{compare, Ranking};
pub use serialization::ListingPage;
pub use types::{ContactInfo, Listing, ListingId};
