//! Two-tier listing order: promoted listings first, then the user's sort key.

use crate::criteria::Criteria;
use crate::enums::{SortDirection, SortKey};
use crate::types::Listing;
use std::cmp::Ordering;

/// Sort configuration taken from [`Criteria`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ranking {
    pub sort_by: SortKey,
    pub sort_order: SortDirection,
}

impl Ranking {
    pub fn new(sort_by: SortKey, sort_order: SortDirection) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        compare(a, b, self.sort_by, self.sort_order)
    }

    /// Stable sort; listings that compare equal keep their relative order
    pub fn sort(&self, listings: &mut [&Listing]) {
        listings.sort_by(|a, b| self.compare(a, b));
    }
}

impl From<&Criteria> for Ranking {
    fn from(criteria: &Criteria) -> Self {
        Self::new(criteria.sort_by, criteria.sort_order)
    }
}

/// Promoted listings always come first, regardless of key or direction.
/// Between listings of equal promoted status, `sort_key` decides.
pub fn compare(
    a: &Listing,
    b: &Listing,
    sort_key: SortKey,
    sort_direction: SortDirection,
) -> Ordering {
    // `true` must sort before `false`
    let promoted = b.is_promoted.cmp(&a.is_promoted);
    if promoted != Ordering::Equal {
        return promoted;
    }

    let ordering = compare_by_key(a, b, sort_key);
    match sort_direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_by_key(a: &Listing, b: &Listing, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::ApprovalDate => a.approval_timestamp().cmp(&b.approval_timestamp()),
        SortKey::CreationDate => a.created_at.cmp(&b.created_at),
        SortKey::Price => compare_f64(a.price, b.price),
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Mileage => compare_f64(a.mileage, b.mileage),
        // Tier 1 already separated promoted from non-promoted listings
        SortKey::Promoted => Ordering::Equal,
    }
}

// Missing values sort before present ones, mirroring `Option`'s ordering.
fn compare_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}
