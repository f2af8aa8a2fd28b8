//! The standard query flow: retrieve, parse, filter, match.

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{TrainTransfer, TripRecord, parse_trip_records};
use crate::filter::FilterPipeline;
use crate::kyfw::{KyfwError, TripSource};
use crate::planner::{TransferConfig, resolve_transfers};

/// Fetch bookable trips for one leg.
///
/// Applies the standard pipeline: purchasable online, exact route segment,
/// then enough second-class seats.
pub async fn fetch_legs<S: TripSource>(
    source: &S,
    date: NaiveDate,
    from: &str,
    to: &str,
) -> Result<Vec<TripRecord>, KyfwError> {
    let raw = source.query_trips(date, from, to).await?;
    let trips = parse_trip_records(&raw);
    let legs = FilterPipeline::standard(from, to).apply(&trips);

    info!(
        %date,
        from,
        to,
        raw = raw.len(),
        bookable = legs.len(),
        "fetched legs"
    );

    Ok(legs)
}

/// One journey with a single change: origin → via → destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub date: NaiveDate,
    pub first_legs: Vec<TripRecord>,
    pub second_legs: Vec<TripRecord>,
}

impl TransferPlan {
    /// Fetch both legs. Queries run one after the other.
    pub async fn fetch<S: TripSource>(
        source: &S,
        date: NaiveDate,
        origin: &str,
        via: &str,
        destination: &str,
    ) -> Result<Self, KyfwError> {
        let first_legs = fetch_legs(source, date, origin, via).await?;
        let second_legs = fetch_legs(source, date, via, destination).await?;

        Ok(Self {
            date,
            first_legs,
            second_legs,
        })
    }

    /// All valid connections for this plan.
    pub fn transfers(&self, config: &TransferConfig) -> Vec<TrainTransfer<'_>> {
        resolve_transfers(&self.first_legs, &self.second_legs, config)
    }
}
