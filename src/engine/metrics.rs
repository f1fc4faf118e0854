//! Query run metrics.
//!
//! Collected only by `Pipeline::run_with_metrics`; the plain `run` path skips
//! the timers. Counts are the number of records still alive after each stage.

use crate::RestaurantRecord;
use std::time::Duration;

bitflags::bitflags! {
    /// Which predicates a query actually applied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActiveFilters: u8 {
        const PRICE      = 1 << 0;
        const CUISINE    = 1 << 1;
        const PROXIMITY  = 1 << 2;
        const MIN_RATING = 1 << 3;
    }
}

impl ActiveFilters {
    /// Stable, human-readable names of the set flags.
    pub fn names(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(ActiveFilters::PRICE) {
            out.push("price");
        }
        if self.contains(ActiveFilters::CUISINE) {
            out.push("cuisine");
        }
        if self.contains(ActiveFilters::PROXIMITY) {
            out.push("proximity");
        }
        if self.contains(ActiveFilters::MIN_RATING) {
            out.push("min-rating");
        }
        out
    }
}

/// One pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageMetrics {
    pub stage: &'static str,
    /// Records entering the stage.
    pub input: usize,
    /// Records leaving the stage.
    pub kept: usize,
    pub duration: Duration,
}

/// Compact trace of a query, returned by the verbose API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDetails {
    pub active: ActiveFilters,
    pub stages: Vec<StageMetrics>,
    pub total: Duration,
}

/// Pipeline output bundled with its metrics.
#[derive(Debug, Clone)]
pub struct QueryRun<'a> {
    pub records: Vec<&'a RestaurantRecord>,
    pub details: QueryDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_pipeline_order() {
        let mask = ActiveFilters::MIN_RATING | ActiveFilters::PRICE | ActiveFilters::PROXIMITY;
        assert_eq!(mask.names(), ["price", "proximity", "min-rating"]);
        assert!(ActiveFilters::default().names().is_empty());
    }
}
