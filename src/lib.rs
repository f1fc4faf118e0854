//! Restaurant discovery core.
//!
//! Two independent, synchronous components:
//!
//! - the **discovery engine** (`engine`): a fixed predicate chain
//!   (price → cuisine → proximity → minimum rating) followed by a stable sort
//!   on rating, review count or haversine distance;
//! - the **concierge** (`concierge`): a selection set of intent tags, classified
//!   through a static catalog and composed into a reply by an explicit table of
//!   pairwise rules.
//!
//! Both are pure over their inputs. Nothing here performs I/O, caches across
//! calls, or holds mutable global state.

#[macro_use]
mod macros;
mod api;
mod concierge;
mod engine;
mod error;

pub use api::{DiscoveryResultVerbose, Listing, annotate, compose_query, discover_verbose};
pub use concierge::{
    Category, Classification, PAIR_RULES, PairRule, SelectionSet, SelectionState, TAG_CATALOG, TagSpec, can_send,
    classify, clear_all, compose, fired_rules, lookup_tag, toggle_tag, topic_reply, user_message,
};
pub use engine::{
    ActiveFilters, EARTH_RADIUS_KM, Popularity, PopularityTier, QueryDetails, StageMetrics, apply_cuisine_filter,
    apply_price_filter, apply_proximity_filter, apply_rating_filter, distance_from, format_distance, haversine_km,
    parse_price_tier, popularity, round_distance_km, sort_records,
};
pub use error::{DiscoveryError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius used when proximity filtering is switched on without an explicit radius.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Inclusive bounds of the price tier scale.
pub const MIN_PRICE_TIER: u8 = 1;
pub const MAX_PRICE_TIER: u8 = 4;

// --- Data model --------------------------------------------------------------

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl FromStr for GeoPoint {
    type Err = DiscoveryError;

    /// Parse `"<lat>,<lng>"`, e.g. `"37.50, 127.03"`.
    fn from_str(s: &str) -> Result<Self> {
        let re = regex!(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$");
        let invalid = || DiscoveryError::InvalidGeoPoint(s.to_string());

        let caps = re.captures(s).ok_or_else(invalid)?;
        let lat: f64 = caps[1].parse().map_err(|_| invalid())?;
        let lng: f64 = caps[2].parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(invalid());
        }
        Ok(GeoPoint { lat, lng })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A catalog entry as supplied by the data layer.
///
/// The core never mutates records; every operation borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub id: String,
    pub cuisine: String,
    pub price_tier: u8,
    /// `0.0` means "no rating yet".
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Display only.
    #[serde(default)]
    pub district: String,
}

impl RestaurantRecord {
    pub fn new(id: impl Into<String>, cuisine: impl Into<String>, price_tier: u8) -> Self {
        Self {
            id: id.into(),
            cuisine: cuisine.into(),
            price_tier,
            rating: 0.0,
            review_count: 0,
            location: None,
            district: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    pub fn located_at(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(GeoPoint { lat, lng });
        self
    }

    pub fn in_district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }
}

/// Ordering applied as the terminal step of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Highest rating first.
    #[default]
    Rating,
    /// Most reviews first.
    ReviewCount,
    /// Nearest first; requires an origin.
    Distance,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::ReviewCount => "reviewCount",
            SortKey::Distance => "distance",
        }
    }
}

impl FromStr for SortKey {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "rating" => Ok(SortKey::Rating),
            "reviewCount" | "review-count" | "reviews" => Ok(SortKey::ReviewCount),
            "distance" => Ok(SortKey::Distance),
            other => Err(DiscoveryError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-query filter and sort settings.
///
/// Every predicate is optional; `None` passes records through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub price_tier: Option<u8>,
    pub cuisine: Option<String>,
    /// Proximity flag. The radius is only consulted when this is set.
    pub within_radius: bool,
    pub radius_km: f64,
    pub min_rating: Option<f64>,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_tier: None,
            cuisine: None,
            within_radius: false,
            radius_km: DEFAULT_RADIUS_KM,
            min_rating: None,
            sort: SortKey::Rating,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price_tier(mut self, tier: u8) -> Self {
        self.price_tier = Some(tier);
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Enable proximity filtering with the default radius.
    pub fn nearby(mut self) -> Self {
        self.within_radius = true;
        self.radius_km = DEFAULT_RADIUS_KM;
        self
    }

    /// Enable proximity filtering with an explicit radius in kilometers.
    pub fn within_radius(mut self, radius_km: f64) -> Self {
        self.within_radius = true;
        self.radius_km = radius_km;
        self
    }

    pub fn min_rating(mut self, min: f64) -> Self {
        self.min_rating = Some(min);
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort = key;
        self
    }
}
