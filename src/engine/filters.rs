//! Predicate chain stages.
//!
//! Each stage borrows its input and returns the surviving references in input
//! order. A `None` criterion is the identity. An unmatched criterion yields an
//! empty vector, never an error.

use super::geo::distance_from;
use crate::{DiscoveryError, GeoPoint, MAX_PRICE_TIER, MIN_PRICE_TIER, RestaurantRecord, Result};

/// Keep records whose `price_tier` equals `tier`.
pub fn apply_price_filter<'a, I>(records: I, tier: Option<u8>) -> Vec<&'a RestaurantRecord>
where
    I: IntoIterator<Item = &'a RestaurantRecord>,
{
    match tier {
        None => records.into_iter().collect(),
        Some(tier) => records.into_iter().filter(|r| r.price_tier == tier).collect(),
    }
}

/// Keep records whose cuisine equals `cuisine` exactly (no case folding).
pub fn apply_cuisine_filter<'a, I>(records: I, cuisine: Option<&str>) -> Vec<&'a RestaurantRecord>
where
    I: IntoIterator<Item = &'a RestaurantRecord>,
{
    match cuisine {
        None => records.into_iter().collect(),
        Some(cuisine) => records.into_iter().filter(|r| r.cuisine == cuisine).collect(),
    }
}

/// Keep located records within `radius_km` of `origin` (inclusive).
///
/// Records without a location are dropped.
pub fn apply_proximity_filter<'a, I>(records: I, origin: GeoPoint, radius_km: f64) -> Vec<&'a RestaurantRecord>
where
    I: IntoIterator<Item = &'a RestaurantRecord>,
{
    records
        .into_iter()
        .filter(|r| r.location.is_some() && distance_from(origin, r) <= radius_km)
        .collect()
}

/// Keep records rated at least `min`. Unrated records (`0.0`) never pass a set minimum.
pub fn apply_rating_filter<'a, I>(records: I, min: Option<f64>) -> Vec<&'a RestaurantRecord>
where
    I: IntoIterator<Item = &'a RestaurantRecord>,
{
    match min {
        None => records.into_iter().collect(),
        Some(min) => records.into_iter().filter(|r| r.rating > 0.0 && r.rating >= min).collect(),
    }
}

/// Parse a price tier from `"2"`, `"$$"` or `"₩₩"`.
pub fn parse_price_tier(input: &str) -> Result<u8> {
    let re = regex!(r"^\s*(?:(\d+)|(\$+)|(₩+))\s*$");
    let invalid = || DiscoveryError::InvalidPriceTier(input.to_string());

    let caps = re.captures(input).ok_or_else(invalid)?;
    let tier = if let Some(digits) = caps.get(1) {
        digits.as_str().parse::<u8>().map_err(|_| invalid())?
    } else {
        // Symbol runs: one symbol per tier.
        let run = caps.get(2).or_else(|| caps.get(3)).ok_or_else(invalid)?;
        u8::try_from(run.as_str().chars().count()).map_err(|_| invalid())?
    };

    if (MIN_PRICE_TIER..=MAX_PRICE_TIER).contains(&tier) { Ok(tier) } else { Err(invalid()) }
}
