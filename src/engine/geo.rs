//! Great-circle distance.
//!
//! Everything here works in kilometers. Rounding is for display only;
//! filters and sorting use the raw value.

use crate::{GeoPoint, RestaurantRecord};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// d = 2R · atan2(√a, √(1−a))
/// ```
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // Floating error can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Effective distance of `record` from `origin`.
///
/// Records without a location are infinitely far away, so they never pass a
/// radius check and always sort last.
pub fn distance_from(origin: GeoPoint, record: &RestaurantRecord) -> f64 {
    match record.location {
        Some(loc) => haversine_km(origin, loc),
        None => f64::INFINITY,
    }
}

/// Round to one decimal place (e.g. `1.26` → `1.3`).
pub fn round_distance_km(distance_km: f64) -> f64 {
    (distance_km * 10.0).round() / 10.0
}

/// Human-readable distance: whole meters below 1 km, otherwise one-decimal km.
///
/// The value is rounded to one decimal first, so meters come in steps of 100.
pub fn format_distance(distance_km: f64) -> String {
    let km = round_distance_km(distance_km);
    if km < 1.0 { format!("{}m", (km * 1000.0).round() as u64) } else { format!("{}km", km) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GANGNAM: GeoPoint = GeoPoint::new(37.4979, 127.0276);
    const MYEONGDONG: GeoPoint = GeoPoint::new(37.5636, 126.9834);

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(haversine_km(GANGNAM, GANGNAM), 0.0);
    }

    #[test]
    fn symmetric_between_points() {
        assert_eq!(haversine_km(GANGNAM, MYEONGDONG), haversine_km(MYEONGDONG, GANGNAM));
    }

    #[test]
    fn gangnam_to_myeongdong_is_about_eight_km() {
        let d = haversine_km(GANGNAM, MYEONGDONG);
        assert!((d - 8.3).abs() < 0.3, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn missing_location_is_infinitely_far() {
        let r = RestaurantRecord::new("x", "Noodles", 1);
        assert_eq!(distance_from(GANGNAM, &r), f64::INFINITY);
    }

    #[test]
    fn formats_meters_and_kilometers() {
        assert_eq!(format_distance(0.3), "300m");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(1.26), "1.3km");
        assert_eq!(format_distance(12.0), "12km");
        assert_eq!(round_distance_km(4.94), 4.9);
    }

    #[test]
    fn formats_after_rounding() {
        assert_eq!(format_distance(0.34), "300m");
        assert_eq!(format_distance(0.96), "1km");
        assert_eq!(format_distance(0.9996), "1km");
    }
}
