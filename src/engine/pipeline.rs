//! Stage runner.
//!
//! ```text
//! check request ─▶ price ─▶ cuisine ─▶ proximity ─▶ min rating ─▶ sort
//! ```
//!
//! The request is validated before any stage runs, so a rejected query does
//! no filtering work at all.

use super::filters::{apply_cuisine_filter, apply_price_filter, apply_proximity_filter, apply_rating_filter};
use super::metrics::{ActiveFilters, QueryDetails, QueryRun, StageMetrics};
use super::sort::sort_records;
use crate::{DiscoveryError, FilterCriteria, GeoPoint, RestaurantRecord, Result, SortKey};
use std::time::Instant;

/// A single query over a borrowed record collection.
///
/// Holds no state beyond its inputs, so any number of pipelines may run over
/// the same collection at once.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a, 'c> {
    records: &'a [RestaurantRecord],
    criteria: &'c FilterCriteria,
    origin: Option<GeoPoint>,
}

impl<'a, 'c> Pipeline<'a, 'c> {
    pub fn new(records: &'a [RestaurantRecord], criteria: &'c FilterCriteria, origin: Option<GeoPoint>) -> Self {
        Self { records, criteria, origin }
    }

    /// Predicates this query will apply.
    pub fn active_filters(&self) -> ActiveFilters {
        let mut mask = ActiveFilters::empty();
        mask.set(ActiveFilters::PRICE, self.criteria.price_tier.is_some());
        mask.set(ActiveFilters::CUISINE, self.criteria.cuisine.is_some());
        mask.set(ActiveFilters::PROXIMITY, self.criteria.within_radius);
        mask.set(ActiveFilters::MIN_RATING, self.criteria.min_rating.is_some());
        mask
    }

    /// Filter and sort.
    pub fn run(&self) -> Result<Vec<&'a RestaurantRecord>> {
        self.check()?;

        let c = self.criteria;
        let out = apply_price_filter(self.records, c.price_tier);
        let out = apply_cuisine_filter(out, c.cuisine.as_deref());
        let out = self.proximity_stage(out);
        let out = apply_rating_filter(out, c.min_rating);
        sort_records(out, c.sort, self.origin)
    }

    /// Same as [`Pipeline::run`], plus per-stage counts and timings.
    pub fn run_with_metrics(&self) -> Result<QueryRun<'a>> {
        let started = Instant::now();
        self.check()?;

        let c = self.criteria;
        let mut stages = Vec::with_capacity(5);

        let out = timed(&mut stages, "price", self.records.len(), || apply_price_filter(self.records, c.price_tier));
        let out = timed(&mut stages, "cuisine", out.len(), || apply_cuisine_filter(out, c.cuisine.as_deref()));
        let out = timed(&mut stages, "proximity", out.len(), || self.proximity_stage(out));
        let out = timed(&mut stages, "min-rating", out.len(), || apply_rating_filter(out, c.min_rating));

        let sort_started = Instant::now();
        let input = out.len();
        let records = sort_records(out, c.sort, self.origin)?;
        stages.push(StageMetrics { stage: "sort", input, kept: records.len(), duration: sort_started.elapsed() });

        let details = QueryDetails { active: self.active_filters(), stages, total: started.elapsed() };
        tracing::debug!(active = ?details.active.names(), kept = records.len(), "query finished");
        Ok(QueryRun { records, details })
    }

    fn check(&self) -> Result<()> {
        if self.criteria.sort == SortKey::Distance && self.origin.is_none() {
            tracing::debug!(sort = %self.criteria.sort, "rejecting distance sort without origin");
            return Err(DiscoveryError::InvalidSortRequest);
        }
        Ok(())
    }

    fn proximity_stage(&self, records: Vec<&'a RestaurantRecord>) -> Vec<&'a RestaurantRecord> {
        if !self.criteria.within_radius {
            return records;
        }
        match self.origin {
            Some(origin) => apply_proximity_filter(records, origin, self.criteria.radius_km),
            None => {
                // Nothing can be confirmed inside the radius without a reference point.
                tracing::debug!(dropped = records.len(), "proximity filter without origin");
                Vec::new()
            }
        }
    }
}

fn timed<'a>(
    stages: &mut Vec<StageMetrics>,
    stage: &'static str,
    input: usize,
    f: impl FnOnce() -> Vec<&'a RestaurantRecord>,
) -> Vec<&'a RestaurantRecord> {
    let started = Instant::now();
    let out = f();
    tracing::trace!(stage, input, kept = out.len(), "stage done");
    stages.push(StageMetrics { stage, input, kept: out.len(), duration: started.elapsed() });
    out
}
