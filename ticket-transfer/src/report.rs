//! Human-readable rendering of legs and transfers.

use std::fmt;

use crate::domain::{TrainTransfer, TripRecord};
use crate::stations::StationDirectory;

/// Display adapter for one leg, with station names resolved.
pub struct LegDisplay<'a> {
    trip: &'a TripRecord,
    stations: &'a StationDirectory,
}

/// Render a leg as `G1 深圳北(08:00) -> 广州南(08:35) second class: 有`.
pub fn leg<'a>(trip: &'a TripRecord, stations: &'a StationDirectory) -> LegDisplay<'a> {
    LegDisplay { trip, stations }
}

impl fmt::Display for LegDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trip = self.trip;
        write!(
            f,
            "{} {}({}) -> {}({}) second class: {}",
            trip.train_code(),
            self.stations.name_for_code(trip.from_station_code()),
            trip.start_time(),
            self.stations.name_for_code(trip.to_station_code()),
            trip.arrive_time(),
            trip.second_class_seat_availability(),
        )
    }
}

/// Display adapter for a transfer.
pub struct TransferDisplay<'a> {
    transfer: &'a TrainTransfer<'a>,
    stations: &'a StationDirectory,
}

/// Render a transfer as `{first leg} change ({gap} min) {second leg}`.
pub fn transfer<'a>(
    transfer: &'a TrainTransfer<'a>,
    stations: &'a StationDirectory,
) -> TransferDisplay<'a> {
    TransferDisplay { transfer, stations }
}

impl fmt::Display for TransferDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} change ({} min) {}",
            leg(self.transfer.first_leg(), self.stations),
            self.transfer.gap_minutes(),
            leg(self.transfer.second_leg(), self.stations),
        )
    }
}
