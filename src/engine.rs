//! Discovery filter engine.
//!
//! A query is a fixed pipeline over a borrowed record collection:
//!
//! ```text
//! &[RestaurantRecord] ──┐
//!                       │  price tier   (filters.rs)
//!                       │  cuisine      (filters.rs)
//!                       │  proximity    (filters.rs + geo.rs)
//!                       │  min rating   (filters.rs)
//!                       v
//!                  Vec<&RestaurantRecord>
//!                       │
//!                       v
//!                  sort_records  (sort.rs)
//!                    - rating / review count: descending, stable
//!                    - distance: ascending, missing location = +inf
//!                       │
//!                       v
//!                  ordered Vec<&RestaurantRecord>
//! ```
//!
//! Stage order decides which records survive, never the final order: sorting
//! is always the terminal step. No stage fails on empty input. The only
//! engine error is a distance sort without an origin.
//!
//! ## Responsibilities by module
//!
//! - `geo.rs`: haversine distance plus display rounding/formatting.
//! - `filters.rs`: the individual predicates and price tier parsing.
//! - `sort.rs`: the stable comparator for each `SortKey`.
//! - `popularity.rs`: 0-100 popularity index and tiers for presentation.
//! - `metrics.rs`: active-filter mask and per-stage counts/timings.
//! - `pipeline.rs`: runs the stages in order, optionally with metrics.
//!
//! ## Debugging
//!
//! Stages emit `tracing` events at `debug`/`trace`; the CLI shows them with
//! `HANSIK_LOG=hansik=trace`.

#[path = "engine/filters.rs"]
mod filters;
#[path = "engine/geo.rs"]
mod geo;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/popularity.rs"]
mod popularity;
#[path = "engine/sort.rs"]
mod sort;

pub use filters::{
    apply_cuisine_filter, apply_price_filter, apply_proximity_filter, apply_rating_filter, parse_price_tier,
};
pub use geo::{EARTH_RADIUS_KM, distance_from, format_distance, haversine_km, round_distance_km};
pub use metrics::{ActiveFilters, QueryDetails, StageMetrics};
pub use pipeline::Pipeline;
pub use popularity::{Popularity, PopularityTier, popularity};
pub use sort::sort_records;
