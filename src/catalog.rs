// src/catalog.rs
use crate::domain::Listing;
use crate::errors::ServerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUNDLED_LISTINGS: &str = include_str!("../data/listings.json");

/// The immutable listing dataset, loaded once at start-up.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id) {
                tracing::warn!(id = listing.id, "duplicate listing id, first record wins");
            }
        }
        Self { listings }
    }

    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let listings: Vec<Listing> = serde_json::from_str(json)
            .map_err(|e| ServerError::Dataset(format!("Failed to parse listings: {e}")))?;
        Ok(Self::new(listings))
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self, ServerError> {
        Self::from_json(BUNDLED_LISTINGS)
    }

    /// Reads `path` when given, otherwise falls back to the bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        match path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    ServerError::Dataset(format!("Failed to read {}: {e}", path.display()))
                })?;
                Self::from_json(&json)
            }
            None => Self::bundled(),
        }
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Every listing not explicitly hidden, in dataset order.
    pub fn all_listings(&self) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.is_visible()).collect()
    }

    /// Looks a listing up by a raw identifier such as a path segment.
    ///
    /// Hidden listings are still returned here even though `all_listings`
    /// leaves them out.
    pub fn listing_by_id(&self, raw: &str) -> Option<&Listing> {
        parse_leading_int(raw).and_then(|id| self.get(id))
    }

    pub fn get(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }
}

/// Leading-integer coercion: "  42abc" -> 42, "-7" -> -7, "abc" -> None.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}
