//! Terminal ordering step.

use super::geo::distance_from;
use crate::{DiscoveryError, GeoPoint, RestaurantRecord, Result, SortKey};

/// Order `records` by `key`.
///
/// - `Rating`, `ReviewCount`: descending.
/// - `Distance`: ascending from `origin`; unlocated records go last.
///
/// The sort is stable, so ties keep their input order. Distance ordering
/// without an origin is rejected with [`DiscoveryError::InvalidSortRequest`]
/// instead of falling back to another key.
pub fn sort_records<'a>(
    mut records: Vec<&'a RestaurantRecord>,
    key: SortKey,
    origin: Option<GeoPoint>,
) -> Result<Vec<&'a RestaurantRecord>> {
    match key {
        SortKey::Rating => records.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::ReviewCount => records.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::Distance => {
            let origin = origin.ok_or(DiscoveryError::InvalidSortRequest)?;
            // Decorate once so each distance is computed a single time.
            let mut keyed: Vec<(f64, &'a RestaurantRecord)> =
                records.into_iter().map(|r| (distance_from(origin, r), r)).collect();
            keyed.sort_by(|(da, _), (db, _)| da.total_cmp(db));
            return Ok(keyed.into_iter().map(|(_, r)| r).collect());
        }
    }
    Ok(records)
}
