use crate::engine::{self, Pipeline, Popularity, QueryDetails};
use crate::{FilterCriteria, GeoPoint, RestaurantRecord, Result};

/// Result from [`discover_verbose`].
#[derive(Debug, Clone)]
pub struct DiscoveryResultVerbose<'a> {
    /// Surviving records, in final order.
    pub results: Vec<&'a RestaurantRecord>,
    pub details: QueryDetails,
}

/// A record decorated for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub record: &'a RestaurantRecord,
    /// Raw distance from the origin; `None` without an origin or location.
    pub distance_km: Option<f64>,
    pub popularity: Popularity,
}

impl Listing<'_> {
    /// Distance formatted for display (`"300m"`, `"1.2km"`).
    pub fn distance_label(&self) -> Option<String> {
        self.distance_km.map(engine::format_distance)
    }
}

/// Filter `records` by `criteria` and sort them.
///
/// Filters run in the fixed order price → cuisine → proximity → minimum
/// rating; sorting is always last. `origin` is needed for proximity filtering
/// and distance sorting. Sorting by distance without one fails with
/// [`DiscoveryError::InvalidSortRequest`](crate::DiscoveryError::InvalidSortRequest).
///
/// # Example
/// ```
/// use hansik::{FilterCriteria, RestaurantRecord, compose_query};
///
/// let records = vec![
///     RestaurantRecord::new("a", "Korean BBQ", 2).with_rating(4.2).located_at(37.50, 127.03),
///     RestaurantRecord::new("b", "Noodles", 1).with_rating(4.8),
/// ];
/// let out = compose_query(&records, &FilterCriteria::new(), None).unwrap();
/// assert_eq!(out[0].id, "b");
/// ```
pub fn compose_query<'a>(
    records: &'a [RestaurantRecord],
    criteria: &FilterCriteria,
    origin: Option<GeoPoint>,
) -> Result<Vec<&'a RestaurantRecord>> {
    Pipeline::new(records, criteria, origin).run()
}

/// Like [`compose_query`], but also returns a compact per-stage trace.
pub fn discover_verbose<'a>(
    records: &'a [RestaurantRecord],
    criteria: &FilterCriteria,
    origin: Option<GeoPoint>,
) -> Result<DiscoveryResultVerbose<'a>> {
    let run = Pipeline::new(records, criteria, origin).run_with_metrics()?;
    Ok(DiscoveryResultVerbose { results: run.records, details: run.details })
}

/// Attach distance and popularity to already ordered records.
pub fn annotate<'a>(records: &[&'a RestaurantRecord], origin: Option<GeoPoint>) -> Vec<Listing<'a>> {
    records
        .iter()
        .map(|&record| Listing {
            record,
            distance_km: origin.zip(record.location).map(|(o, loc)| engine::haversine_km(o, loc)),
            popularity: engine::popularity(record),
        })
        .collect()
}
