//! Seat availability values.

use std::fmt;

/// Marker the ticketing API uses for "seats available, count not given".
pub const PLENTY_MARKER: &str = "有";

/// Marker the ticketing API uses for "sold out".
pub const SOLD_OUT_MARKER: &str = "无";

/// Fewest remaining seats still worth trying to book.
pub const MIN_BOOKABLE_SEATS: u32 = 2;

/// Availability of one seat class on one trip.
///
/// # Examples
///
/// ```
/// use ticket_transfer::domain::SeatAvailability;
///
/// assert_eq!(SeatAvailability::parse("有"), SeatAvailability::Plenty);
/// assert_eq!(SeatAvailability::parse("无"), SeatAvailability::SoldOut);
/// assert_eq!(SeatAvailability::parse("7"), SeatAvailability::Remaining(7));
/// assert_eq!(SeatAvailability::parse("--"), SeatAvailability::Unknown);
///
/// assert!(SeatAvailability::parse("2").is_bookable());
/// assert!(!SeatAvailability::parse("1").is_bookable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatAvailability {
    /// Seats available, count not reported.
    Plenty,
    /// No seats left.
    SoldOut,
    /// A reported number of remaining seats.
    Remaining(u32),
    /// Anything else (empty, "--", "*", ...). Treated as zero seats.
    Unknown,
}

impl SeatAvailability {
    /// Interpret a raw seat field.
    pub fn parse(s: &str) -> Self {
        match s {
            PLENTY_MARKER => Self::Plenty,
            SOLD_OUT_MARKER => Self::SoldOut,
            other => other
                .parse::<u32>()
                .map(Self::Remaining)
                .unwrap_or(Self::Unknown),
        }
    }

    /// Remaining seat count, where known. `Unknown` counts as zero.
    pub fn count(&self) -> Option<u32> {
        match self {
            Self::Plenty => None,
            Self::SoldOut | Self::Unknown => Some(0),
            Self::Remaining(n) => Some(*n),
        }
    }

    /// Whether there are enough seats to be worth booking.
    pub fn is_bookable(&self) -> bool {
        match self {
            Self::Plenty => true,
            Self::SoldOut | Self::Unknown => false,
            Self::Remaining(n) => *n >= MIN_BOOKABLE_SEATS,
        }
    }
}

impl fmt::Display for SeatAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plenty => f.write_str(PLENTY_MARKER),
            Self::SoldOut => f.write_str(SOLD_OUT_MARKER),
            Self::Remaining(n) => write!(f, "{n}"),
            Self::Unknown => f.write_str("--"),
        }
    }
}
