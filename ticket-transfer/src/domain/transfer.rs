//! Connections between two trip legs.

use super::time::{checked_gap_minutes, gap_minutes};
use super::trip::TripRecord;

/// A candidate connection: ride `first`, then change to `second`.
///
/// Borrows both legs from the lists it was matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainTransfer<'a> {
    first: &'a TripRecord,
    second: &'a TripRecord,
}

impl<'a> TrainTransfer<'a> {
    pub fn new(first: &'a TripRecord, second: &'a TripRecord) -> Self {
        Self { first, second }
    }

    /// The leg ridden before the change.
    pub fn first_leg(&self) -> &'a TripRecord {
        self.first
    }

    /// The leg ridden after the change.
    pub fn second_leg(&self) -> &'a TripRecord {
        self.second
    }

    /// Layover in minutes: second leg's departure minus first leg's arrival.
    pub fn gap_minutes(&self) -> i32 {
        gap_minutes(self.second.start_time(), self.first.arrive_time())
    }

    /// Layover in minutes, or `None` if either time is unparseable.
    pub fn checked_gap_minutes(&self) -> Option<i32> {
        checked_gap_minutes(self.second.start_time(), self.first.arrive_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::TripBuilder;

    #[test]
    fn gap_from_arrival_to_departure() {
        let first = TripBuilder::new("G1").times("08:00", "10:00").build();
        let second = TripBuilder::new("G2").times("10:30", "11:00").build();

        let transfer = TrainTransfer::new(&first, &second);
        assert_eq!(transfer.gap_minutes(), 30);
        assert_eq!(transfer.checked_gap_minutes(), Some(30));
        assert_eq!(transfer.first_leg().train_code(), "G1");
        assert_eq!(transfer.second_leg().train_code(), "G2");
    }

    #[test]
    fn gap_with_invalid_time() {
        let first = TripBuilder::new("G1").times("08:00", "").build();
        let second = TripBuilder::new("G2").times("00:40", "01:00").build();

        let transfer = TrainTransfer::new(&first, &second);
        assert_eq!(transfer.gap_minutes(), 40);
        assert_eq!(transfer.checked_gap_minutes(), None);
    }
}
