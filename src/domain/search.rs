// src/domain/search.rs

use crate::domain::listing::Listing;
use std::time::Duration;

/// Returns the listings whose name, description, place name or address
/// contain `query`, ignoring case. Source order is kept.
///
/// An empty query matches everything.
pub fn filter_listings<'a>(listings: &[&'a Listing], query: &str) -> Vec<&'a Listing> {
    if query.is_empty() {
        return listings.to_vec();
    }

    let needle = query.to_lowercase();
    listings
        .iter()
        .copied()
        .filter(|listing| matches(listing, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches(listing: &Listing, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&listing.name)
        || contains(&listing.description)
        || listing.place_name.as_deref().is_some_and(contains)
        || listing.address.as_deref().is_some_and(contains)
}

/// How often the browser asks for fresh results while the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecomputePolicy {
    /// Every change to the search box.
    #[default]
    Immediate,
    /// Once typing has paused for the given duration.
    Debounced(Duration),
}

impl RecomputePolicy {
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            RecomputePolicy::Immediate
        } else {
            RecomputePolicy::Debounced(Duration::from_millis(ms))
        }
    }

    /// The htmx `hx-trigger` value for the search input.
    pub fn hx_trigger(&self) -> String {
        match self {
            RecomputePolicy::Immediate => "input changed, search".to_string(),
            RecomputePolicy::Debounced(d) => {
                format!("input changed delay:{}ms, search", d.as_millis())
            }
        }
    }
}
