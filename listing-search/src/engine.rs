use crate::criteria::Criteria;
use crate::predicate::{current_year, Predicate};
use crate::ranking::Ranking;
use crate::serialization::ListingPage;
use crate::types::Listing;
use serde::Serialize;

/// Ordered search output plus the number of listings that passed the filters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub results: Vec<&'a Listing>,
    pub matched_count: usize,
}

/// Filter, rank and optionally truncate `listings`.
///
/// `matched_count` always reports the count before truncation. The input is
/// only borrowed, so the same slice can be searched repeatedly with
/// different criteria.
pub fn search<'a>(
    listings: &'a [Listing],
    criteria: &Criteria,
    limit: Option<usize>,
) -> SearchResult<'a> {
    search_at(listings, criteria, limit, current_year())
}

/// Same as [`search`] with an explicit evaluation year for the condition filter
pub fn search_at<'a>(
    listings: &'a [Listing],
    criteria: &Criteria,
    limit: Option<usize>,
    current_year: i32,
) -> SearchResult<'a> {
    let mut results = filter_and_rank(listings, criteria, current_year);
    let matched_count = results.len();

    if let Some(limit) = limit {
        results.truncate(limit);
    }

    tracing::debug!(
        "search: {} of {} listings matched, returning {} (sort {} {})",
        matched_count,
        listings.len(),
        results.len(),
        criteria.sort_by,
        criteria.sort_order
    );

    SearchResult {
        results,
        matched_count,
    }
}

/// Zero-based page of the ordered result; pages past the end are empty
pub fn search_page<'a>(
    listings: &'a [Listing],
    criteria: &Criteria,
    page: usize,
    page_size: usize,
) -> ListingPage<'a> {
    search_page_at(listings, criteria, page, page_size, current_year())
}

/// Same as [`search_page`] with an explicit evaluation year for the condition filter
pub fn search_page_at<'a>(
    listings: &'a [Listing],
    criteria: &Criteria,
    page: usize,
    page_size: usize,
    current_year: i32,
) -> ListingPage<'a> {
    let ordered = filter_and_rank(listings, criteria, current_year);
    let page = ListingPage::new(ordered, page, page_size);

    tracing::debug!(
        "search page {} (size {}): {} listings of {} matched",
        page.page,
        page.page_size,
        page.listings.len(),
        page.total_count
    );

    page
}

fn filter_and_rank<'a>(
    listings: &'a [Listing],
    criteria: &Criteria,
    current_year: i32,
) -> Vec<&'a Listing> {
    let predicate = Predicate::new(criteria, current_year);
    let mut matched: Vec<&Listing> = listings
        .iter()
        .filter(|listing| predicate.matches(listing))
        .collect();

    Ranking::from(criteria).sort(&mut matched);
    matched
}
