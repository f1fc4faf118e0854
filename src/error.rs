//! Error types for the discovery core.

use thiserror::Error;

/// Errors surfaced by the discovery engine and its input parsers.
///
/// Filtering itself never fails: empty collections and unmatched predicates
/// produce empty results. Only structurally invalid requests end up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscoveryError {
    /// Distance ordering was requested without a reference point.
    #[error("invalid sort request: sorting by distance requires an origin")]
    InvalidSortRequest,

    /// A price tier that is not a number or symbol run within 1..=4.
    #[error("invalid price tier '{0}' (expected 1-4, '$$' or '₩₩')")]
    InvalidPriceTier(String),

    /// A sort key name outside the supported set.
    #[error("unknown sort key '{0}' (expected rating, reviewCount or distance)")]
    UnknownSortKey(String),

    /// A coordinate string that is malformed or out of range.
    #[error("invalid coordinate '{0}' (expected <lat>,<lng>)")]
    InvalidGeoPoint(String),
}

/// Result alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
