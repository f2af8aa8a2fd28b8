//! Ordered composition of trip filters.

use tracing::debug;

use crate::domain::TripRecord;

use super::{has_second_class_seats, purchasable_only, route_segment_matches};

/// One filter, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripFilter {
    /// See [`purchasable_only`].
    PurchasableOnly,
    /// See [`route_segment_matches`].
    RouteSegment { from: String, to: String },
    /// See [`has_second_class_seats`].
    SecondClassSeats,
}

impl TripFilter {
    pub fn route_segment(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::RouteSegment {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn apply(&self, trips: &[TripRecord]) -> Vec<TripRecord> {
        match self {
            Self::PurchasableOnly => purchasable_only(trips),
            Self::RouteSegment { from, to } => route_segment_matches(trips, from, to),
            Self::SecondClassSeats => has_second_class_seats(trips),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::PurchasableOnly => "purchasable_only",
            Self::RouteSegment { .. } => "route_segment",
            Self::SecondClassSeats => "second_class_seats",
        }
    }
}

/// A sequence of filters applied left to right.
///
/// Stops early once the list is empty, since no later filter can add
/// records back.
///
/// # Examples
///
/// ```
/// use ticket_transfer::filter::{FilterPipeline, TripFilter};
///
/// let pipeline = FilterPipeline::new()
///     .then(TripFilter::SecondClassSeats)
///     .then(TripFilter::PurchasableOnly);
/// assert_eq!(pipeline.len(), 2);
/// assert!(pipeline.apply(&[]).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    filters: Vec<TripFilter>,
}

impl FilterPipeline {
    /// An empty pipeline, which keeps every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard query flow: purchasable, then route segment, then seats.
    pub fn standard(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new()
            .then(TripFilter::PurchasableOnly)
            .then(TripFilter::route_segment(from, to))
            .then(TripFilter::SecondClassSeats)
    }

    /// Append a filter.
    pub fn then(mut self, filter: TripFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[TripFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply(&self, trips: &[TripRecord]) -> Vec<TripRecord> {
        let mut current = trips.to_vec();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            let before = current.len();
            current = filter.apply(&current);
            debug!(
                filter = filter.name(),
                before,
                after = current.len(),
                "applied trip filter"
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::TripBuilder;

    fn sample() -> Vec<TripRecord> {
        vec![
            TripBuilder::new("G1").route("IOQ", "IZQ").build(),
            TripBuilder::new("G2")
                .route("IOQ", "IZQ")
                .can_web_buy("N")
                .build(),
            TripBuilder::new("G3").route("FYS", "IZQ").build(),
            TripBuilder::new("G4")
                .route("IOQ", "IZQ")
                .second_class("1")
                .build(),
            TripBuilder::new("G5")
                .route("IOQ", "IZQ")
                .second_class("15")
                .build(),
        ]
    }

    #[test]
    fn empty_pipeline_keeps_everything() {
        let trips = sample();
        assert_eq!(FilterPipeline::new().apply(&trips), trips);
    }

    #[test]
    fn standard_pipeline() {
        let kept = FilterPipeline::standard("IOQ", "IZQ").apply(&sample());
        let codes: Vec<&str> = kept.iter().map(|t| t.train_code()).collect();
        assert_eq!(codes, ["G1", "G5"]);
    }

    #[test]
    fn order_does_not_change_result() {
        let trips = sample();
        let reversed = FilterPipeline::new()
            .then(TripFilter::SecondClassSeats)
            .then(TripFilter::route_segment("IOQ", "IZQ"))
            .then(TripFilter::PurchasableOnly);

        assert_eq!(
            reversed.apply(&trips),
            FilterPipeline::standard("IOQ", "IZQ").apply(&trips)
        );
    }

    #[test]
    fn single_filter_matches_free_function() {
        let trips = sample();
        assert_eq!(
            TripFilter::PurchasableOnly.apply(&trips),
            purchasable_only(&trips)
        );
    }

    #[test]
    fn standard_filter_list() {
        let pipeline = FilterPipeline::standard("A", "B");
        assert_eq!(
            pipeline.filters(),
            &[
                TripFilter::PurchasableOnly,
                TripFilter::route_segment("A", "B"),
                TripFilter::SecondClassSeats,
            ]
        );
        assert!(!pipeline.is_empty());
    }
}
