//! Parsed trip records.
//!
//! Each element of a ticket-query response is one trip leg encoded as a
//! single `|`-delimited line. The position of every field is fixed by the
//! API. [`TripRecord`] pulls the fields out by name once, at parse time, so
//! nothing downstream indexes into raw positions.

use tracing::warn;

use super::seat::SeatAvailability;

/// Delimiter between fields of a raw trip line.
pub const FIELD_DELIMITER: char = '|';

/// Fewest fields a raw line must have (positions 0..=32).
pub const MIN_FIELD_COUNT: usize = 33;

/// Flag value meaning the trip can be bought online.
const PURCHASABLE_FLAG: &str = "Y";

// Field positions within a raw line.
const TRAIN_NO: usize = 2;
const TRAIN_CODE: usize = 3;
const START_STATION: usize = 4;
const END_STATION: usize = 5;
const FROM_STATION: usize = 6;
const TO_STATION: usize = 7;
const START_TIME: usize = 8;
const ARRIVE_TIME: usize = 9;
const DURATION: usize = 10;
const CAN_WEB_BUY: usize = 11;
const SOFT_SLEEPER: usize = 23;
const SOFT_SEAT: usize = 24;
const NO_SEAT: usize = 26;
const HARD_SLEEPER: usize = 28;
const SECOND_CLASS: usize = 30;
const FIRST_CLASS: usize = 31;
const BUSINESS_CLASS: usize = 32;

/// Error returned when a raw line cannot become a [`TripRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The line has fewer fields than the layout requires.
    #[error("trip record has {found} fields, expected at least {expected}")]
    TooFewFields { found: usize, expected: usize },
}

/// Seat fields for each class the API reports, kept as raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatFields {
    pub business: String,
    pub first_class: String,
    pub second_class: String,
    pub soft_sleeper: String,
    pub hard_sleeper: String,
    pub soft_seat: String,
    pub no_seat: String,
}

/// One scheduled trip leg from a ticket query.
///
/// Fields are immutable once parsed; two records are equal when every field
/// is equal.
///
/// # Examples
///
/// ```
/// use ticket_transfer::domain::TripRecord;
///
/// let mut fields = vec![""; 33];
/// fields[3] = "G6001";
/// fields[6] = "IOQ";
/// fields[7] = "IZQ";
/// fields[8] = "08:00";
/// fields[9] = "08:35";
/// fields[11] = "Y";
/// fields[30] = "有";
///
/// let trip = TripRecord::parse(&fields.join("|")).unwrap();
/// assert_eq!(trip.train_code(), "G6001");
/// assert_eq!(trip.from_station_code(), "IOQ");
/// assert!(trip.can_purchase_online());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripRecord {
    train_no: String,
    train_code: String,
    start_station_code: String,
    end_station_code: String,
    from_station_code: String,
    to_station_code: String,
    start_time: String,
    arrive_time: String,
    duration: String,
    can_web_buy: String,
    seats: SeatFields,
}

impl TripRecord {
    /// Parse one raw `|`-delimited line.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        Self::from_fields(&fields)
    }

    /// Build a record from already-split fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        if fields.len() < MIN_FIELD_COUNT {
            return Err(RecordError::TooFewFields {
                found: fields.len(),
                expected: MIN_FIELD_COUNT,
            });
        }

        let field = |idx: usize| fields[idx].to_string();

        Ok(Self {
            train_no: field(TRAIN_NO),
            train_code: field(TRAIN_CODE),
            start_station_code: field(START_STATION),
            end_station_code: field(END_STATION),
            from_station_code: field(FROM_STATION),
            to_station_code: field(TO_STATION),
            start_time: field(START_TIME),
            arrive_time: field(ARRIVE_TIME),
            duration: field(DURATION),
            can_web_buy: field(CAN_WEB_BUY),
            seats: SeatFields {
                business: field(BUSINESS_CLASS),
                first_class: field(FIRST_CLASS),
                second_class: field(SECOND_CLASS),
                soft_sleeper: field(SOFT_SLEEPER),
                hard_sleeper: field(HARD_SLEEPER),
                soft_seat: field(SOFT_SEAT),
                no_seat: field(NO_SEAT),
            },
        })
    }

    /// Internal train number (distinct from the public train code).
    pub fn train_no(&self) -> &str {
        &self.train_no
    }

    /// Public train code, e.g. "G6001".
    pub fn train_code(&self) -> &str {
        &self.train_code
    }

    /// Telecode of the station the train starts from.
    pub fn start_station_code(&self) -> &str {
        &self.start_station_code
    }

    /// Telecode of the station the train terminates at.
    pub fn end_station_code(&self) -> &str {
        &self.end_station_code
    }

    /// Telecode of the queried boarding station.
    pub fn from_station_code(&self) -> &str {
        &self.from_station_code
    }

    /// Telecode of the queried alighting station.
    pub fn to_station_code(&self) -> &str {
        &self.to_station_code
    }

    /// Departure time from the boarding station ("HH:MM").
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Arrival time at the alighting station ("HH:MM").
    pub fn arrive_time(&self) -> &str {
        &self.arrive_time
    }

    /// Journey duration as reported ("HH:MM").
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Raw can-buy flag.
    pub fn can_web_buy(&self) -> &str {
        &self.can_web_buy
    }

    /// Whether the flag is exactly "Y".
    pub fn can_purchase_online(&self) -> bool {
        self.can_web_buy == PURCHASABLE_FLAG
    }

    /// Raw seat fields for every class.
    pub fn seats(&self) -> &SeatFields {
        &self.seats
    }

    /// Raw second-class seat field.
    pub fn second_class_seat_availability(&self) -> &str {
        &self.seats.second_class
    }

    pub fn second_class_seats(&self) -> SeatAvailability {
        SeatAvailability::parse(&self.seats.second_class)
    }
}

/// Parse every raw line of a query response.
///
/// Lines that are too short are logged and skipped; order is preserved for
/// the rest.
pub fn parse_trip_records<S: AsRef<str>>(raw_records: &[S]) -> Vec<TripRecord> {
    raw_records
        .iter()
        .filter_map(|raw| match TripRecord::parse(raw.as_ref()) {
            Ok(trip) => Some(trip),
            Err(e) => {
                warn!(error = %e, "skipping trip record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builder for trip records in tests.
    pub struct TripBuilder {
        fields: Vec<String>,
    }

    impl TripBuilder {
        pub fn new(train_code: &str) -> Self {
            let mut fields = vec![String::new(); MIN_FIELD_COUNT];
            fields[TRAIN_CODE] = train_code.to_string();
            fields[CAN_WEB_BUY] = PURCHASABLE_FLAG.to_string();
            fields[SECOND_CLASS] = "有".to_string();
            Self { fields }
        }

        fn set(mut self, idx: usize, value: &str) -> Self {
            self.fields[idx] = value.to_string();
            self
        }

        pub fn route(self, from: &str, to: &str) -> Self {
            self.set(FROM_STATION, from).set(TO_STATION, to)
        }

        pub fn times(self, start: &str, arrive: &str) -> Self {
            self.set(START_TIME, start).set(ARRIVE_TIME, arrive)
        }

        pub fn can_web_buy(self, flag: &str) -> Self {
            self.set(CAN_WEB_BUY, flag)
        }

        pub fn second_class(self, seats: &str) -> Self {
            self.set(SECOND_CLASS, seats)
        }

        pub fn line(&self) -> String {
            self.fields.join("|")
        }

        pub fn build(&self) -> TripRecord {
            TripRecord::parse(&self.line()).unwrap()
        }
    }
}
