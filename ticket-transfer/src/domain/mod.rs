//! Domain types for ticket queries.
//!
//! Trip records are validated once when a raw response line is parsed, so
//! code that receives a [`TripRecord`] can use its named accessors without
//! worrying about field positions.

mod seat;
mod time;
mod transfer;
mod trip;

pub use seat::{MIN_BOOKABLE_SEATS, PLENTY_MARKER, SOLD_OUT_MARKER, SeatAvailability};
pub use time::{ParsedMinutes, checked_gap_minutes, gap_minutes, parse_minutes};
pub use transfer::TrainTransfer;
pub use trip::{
    FIELD_DELIMITER, MIN_FIELD_COUNT, RecordError, SeatFields, TripRecord, parse_trip_records,
};

#[cfg(test)]
pub(crate) use trip::fixtures;
