//! Filters over lists of trip records.
//!
//! Each filter takes a slice and returns a new, possibly shorter, list in the
//! same relative order. None of them depend on one another, so they can be
//! applied in any sequence; [`FilterPipeline`] bundles a sequence.

mod pipeline;

pub use pipeline::{FilterPipeline, TripFilter};

use crate::domain::TripRecord;

/// Keep only trips that can be bought online.
pub fn purchasable_only(trips: &[TripRecord]) -> Vec<TripRecord> {
    retain(trips, TripRecord::can_purchase_online)
}

/// Keep only trips for exactly the `from` → `to` segment.
///
/// The API can return trips for a different segment of a through-route
/// than the one asked for.
pub fn route_segment_matches(trips: &[TripRecord], from: &str, to: &str) -> Vec<TripRecord> {
    retain(trips, |t| {
        t.from_station_code() == from && t.to_station_code() == to
    })
}

/// Keep only trips with at least two second-class seats (or "有").
pub fn has_second_class_seats(trips: &[TripRecord]) -> Vec<TripRecord> {
    retain(trips, |t| t.second_class_seats().is_bookable())
}

fn retain(trips: &[TripRecord], keep: impl Fn(&TripRecord) -> bool) -> Vec<TripRecord> {
    trips.iter().filter(|t| keep(t)).cloned().collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::fixtures::TripBuilder;
    use proptest::prelude::*;

    fn trip_strategy() -> impl Strategy<Value = TripRecord> {
        (
            prop::sample::select(vec!["Y", "N", ""]),
            prop::sample::select(vec!["有", "无", "0", "1", "2", "9", "--"]),
            prop::sample::select(vec!["AAA", "BBB"]),
            0u32..1000,
        )
            .prop_map(|(flag, seats, from, n)| {
                TripBuilder::new(&format!("G{n}"))
                    .can_web_buy(flag)
                    .second_class(seats)
                    .route(from, "CCC")
                    .build()
            })
    }

    /// True if `sub` appears in `full` in the same relative order.
    fn is_subsequence(sub: &[TripRecord], full: &[TripRecord]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    proptest! {
        #[test]
        fn purchasable_is_exact_subsequence(trips in prop::collection::vec(trip_strategy(), 0..20)) {
            let kept = purchasable_only(&trips);
            prop_assert!(is_subsequence(&kept, &trips));
            let expected = trips.iter().filter(|t| t.can_web_buy() == "Y").count();
            prop_assert_eq!(kept.len(), expected);
            prop_assert!(kept.iter().all(|t| t.can_purchase_online()));
        }

        #[test]
        fn seat_filter_is_subsequence(trips in prop::collection::vec(trip_strategy(), 0..20)) {
            let kept = has_second_class_seats(&trips);
            prop_assert!(is_subsequence(&kept, &trips));
        }

        #[test]
        fn filters_commute(trips in prop::collection::vec(trip_strategy(), 0..20)) {
            let a = has_second_class_seats(&route_segment_matches(&purchasable_only(&trips), "AAA", "CCC"));
            let b = purchasable_only(&has_second_class_seats(&route_segment_matches(&trips, "AAA", "CCC")));
            prop_assert_eq!(a, b);
        }
    }
}
