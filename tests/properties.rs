use hansik::{
    FilterCriteria, GeoPoint, RestaurantRecord, SelectionSet, SortKey, apply_cuisine_filter, apply_price_filter,
    apply_proximity_filter, compose, compose_query, haversine_km, sort_records, toggle_tag,
};
use proptest::prelude::*;

const CUISINES: &[&str] = &["Korean BBQ", "Noodles", "korean bbq", "Bunsik", "Hansik"];
const TAGS: &[&str] = &["BBQ", "spicy", "date-spot", "solo", "value", "vegan", "rooftop"];

fn point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

fn record() -> impl Strategy<Value = RestaurantRecord> {
    (
        "[a-z]{1,6}",
        prop::sample::select(CUISINES),
        1u8..=4,
        prop_oneof![Just(0.0f64), 0.0f64..=5.0],
        0u32..500,
        prop::option::of((37.0f64..38.0, 126.5f64..127.5)),
    )
        .prop_map(|(id, cuisine, tier, rating, reviews, loc)| {
            let r = RestaurantRecord::new(id, cuisine, tier).with_rating(rating).with_reviews(reviews);
            match loc {
                Some((lat, lng)) => r.located_at(lat, lng),
                None => r,
            }
        })
}

fn records() -> impl Strategy<Value = Vec<RestaurantRecord>> {
    prop::collection::vec(record(), 0..24)
}

fn is_subsequence(sub: &[&RestaurantRecord], all: &[RestaurantRecord]) -> bool {
    let mut it = all.iter();
    sub.iter().all(|s| it.any(|r| std::ptr::eq(r, *s)))
}

proptest! {
    #[test]
    fn null_filters_are_identity(records in records()) {
        let by_price = apply_price_filter(&records, None);
        let by_cuisine = apply_cuisine_filter(&records, None);
        let all: Vec<&RestaurantRecord> = records.iter().collect();
        prop_assert_eq!(&by_price, &all);
        prop_assert_eq!(&by_cuisine, &all);
    }

    #[test]
    fn price_filter_keeps_only_that_tier(records in records(), tier in 1u8..=4) {
        let out = apply_price_filter(&records, Some(tier));
        prop_assert!(out.iter().all(|r| r.price_tier == tier));
        prop_assert!(is_subsequence(&out, &records));
        prop_assert_eq!(out.len(), records.iter().filter(|r| r.price_tier == tier).count());
    }

    #[test]
    fn haversine_symmetric_and_zero_on_self(a in point(), b in point()) {
        prop_assert_eq!(haversine_km(a, b), haversine_km(b, a));
        prop_assert_eq!(haversine_km(a, a), 0.0);
        prop_assert!(haversine_km(a, b) >= 0.0);
    }

    #[test]
    fn proximity_never_keeps_unlocated(records in records(), origin in point(), radius in 0.0f64..200.0) {
        let out = apply_proximity_filter(&records, origin, radius);
        prop_assert!(out.iter().all(|r| r.location.is_some()));
        prop_assert!(out.iter().all(|r| haversine_km(origin, r.location.unwrap()) <= radius));
    }

    #[test]
    fn distance_sort_puts_unlocated_last(records in records(), origin in point()) {
        let sorted = sort_records(records.iter().collect(), SortKey::Distance, Some(origin)).unwrap();
        prop_assert_eq!(sorted.len(), records.len());

        let first_missing = sorted.iter().position(|r| r.location.is_none()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_missing..].iter().all(|r| r.location.is_none()));

        let distances: Vec<f64> =
            sorted[..first_missing].iter().map(|r| haversine_km(origin, r.location.unwrap())).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));

        // Unlocated records keep their input order.
        let missing_in: Vec<&str> = records.iter().filter(|r| r.location.is_none()).map(|r| r.id.as_str()).collect();
        let missing_out: Vec<&str> = sorted[first_missing..].iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(missing_in, missing_out);
    }

    #[test]
    fn rating_sort_is_descending_and_stable(records in records()) {
        let sorted = sort_records(records.iter().collect(), SortKey::Rating, None).unwrap();
        prop_assert!(sorted.windows(2).all(|w| w[0].rating >= w[1].rating));

        // Among equal ratings, input position is preserved.
        let pos = |r: &RestaurantRecord| records.iter().position(|x| std::ptr::eq(x, r)).unwrap();
        prop_assert!(sorted.windows(2).all(|w| w[0].rating != w[1].rating || pos(w[0]) < pos(w[1])));
    }

    #[test]
    fn query_result_is_a_subset_matching_every_filter(records in records(), tier in 1u8..=4, origin in point()) {
        let criteria = FilterCriteria::new().price_tier(tier).within_radius(50.0).sort_by(SortKey::Distance);
        let out = compose_query(&records, &criteria, Some(origin)).unwrap();
        prop_assert!(out.iter().all(|r| r.price_tier == tier && r.location.is_some()));
        prop_assert!(out.iter().all(|r| records.iter().any(|x| std::ptr::eq(x, *r))));
    }

    #[test]
    fn double_toggle_is_identity(tags in prop::collection::vec("[a-z]{1,4}", 0..6), extra in "[A-Z]{1,4}") {
        let mut set: SelectionSet = tags.iter().map(String::as_str).collect();
        let before = set.clone();
        toggle_tag(&mut set, &extra);
        toggle_tag(&mut set, &extra);
        prop_assert_eq!(set, before);
    }

    #[test]
    fn compose_is_deterministic(tags in prop::collection::vec(prop::sample::select(TAGS), 0..5), text in ".{0,12}") {
        let set: SelectionSet = tags.into_iter().collect();
        prop_assert_eq!(compose(&set, &text), compose(&set, &text));
    }
}
