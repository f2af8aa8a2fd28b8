//! Clock-time arithmetic for ticket data.
//!
//! The ticketing API reports departure and arrival times as "HH:MM" strings.
//! Hours run from 00 to 29 so that a multi-leg schedule crossing midnight can
//! still be compared by plain subtraction. Nothing here involves dates,
//! locales or timezones: a time is just a count of minutes.

use std::fmt;

use tracing::warn;

/// Highest accepted leading hour digit ("2" allows hours 20-29).
const MAX_HOUR_TENS: u8 = b'2';

/// Highest accepted leading minute digit.
const MAX_MINUTE_TENS: u8 = b'5';

/// Result of parsing a clock-time string.
///
/// Parsing never fails outright. An invalid string yields zero minutes with
/// `is_valid() == false`, so callers that care can tell "unknown" apart
/// from a genuine midnight.
///
/// # Examples
///
/// ```
/// use ticket_transfer::domain::parse_minutes;
///
/// let t = parse_minutes("05:30");
/// assert_eq!(t.minutes(), 330);
/// assert!(t.is_valid());
///
/// let bad = parse_minutes("bad");
/// assert_eq!(bad.minutes(), 0);
/// assert!(!bad.is_valid());
/// assert_eq!(bad.known(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedMinutes {
    minutes: i32,
    valid: bool,
}

impl ParsedMinutes {
    fn valid(minutes: i32) -> Self {
        Self {
            minutes,
            valid: true,
        }
    }

    fn unknown() -> Self {
        Self {
            minutes: 0,
            valid: false,
        }
    }

    /// Best-effort value in minutes past midnight (0 if unknown).
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// Whether the input matched the "HH:MM" pattern.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The value, or `None` if the input was invalid.
    pub fn known(&self) -> Option<i32> {
        self.valid.then_some(self.minutes)
    }
}

impl fmt::Display for ParsedMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
        } else {
            f.write_str("--:--")
        }
    }
}

/// Parse an "HH:MM" string (hours 00-29, minutes 00-59) into minutes.
///
/// Invalid input is logged at `warn` level and reported as unknown.
pub fn parse_minutes(time_str: &str) -> ParsedMinutes {
    match parse_hhmm(time_str.as_bytes()) {
        Some(minutes) => ParsedMinutes::valid(minutes),
        None => {
            warn!(input = time_str, "time string invalid");
            ParsedMinutes::unknown()
        }
    }
}

/// Minutes from `b` to `a` (`a - b`), using best-effort values.
///
/// The result may be negative. An invalid side counts as 0.
///
/// ```
/// use ticket_transfer::domain::gap_minutes;
///
/// assert_eq!(gap_minutes("09:00", "08:30"), 30);
/// assert_eq!(gap_minutes("08:00", "08:30"), -30);
/// ```
pub fn gap_minutes(a: &str, b: &str) -> i32 {
    parse_minutes(a).minutes() - parse_minutes(b).minutes()
}

/// Like [`gap_minutes`], but `None` when either side is invalid.
pub fn checked_gap_minutes(a: &str, b: &str) -> Option<i32> {
    Some(parse_minutes(a).known()? - parse_minutes(b).known()?)
}

fn parse_hhmm(bytes: &[u8]) -> Option<i32> {
    // Must be exactly 5 bytes: HH:MM
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if bytes[0] > MAX_HOUR_TENS || bytes[3] > MAX_MINUTE_TENS {
        return None;
    }
    let hour = parse_two_digits(&bytes[0..2])?;
    let minute = parse_two_digits(&bytes[3..5])?;
    Some(hour * 60 + minute)
}

/// Parse two ASCII digit bytes.
fn parse_two_digits(bytes: &[u8]) -> Option<i32> {
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(i32::from(bytes[0] - b'0') * 10 + i32::from(bytes[1] - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(parse_minutes("00:00").minutes(), 0);
        assert_eq!(parse_minutes("05:30").minutes(), 330);
        assert_eq!(parse_minutes("23:59").minutes(), 23 * 60 + 59);
        assert!(parse_minutes("00:00").is_valid());
    }

    #[test]
    fn hours_past_midnight() {
        assert_eq!(parse_minutes("24:00").minutes(), 1440);
        assert_eq!(parse_minutes("29:59").minutes(), 29 * 60 + 59);
    }

    #[test]
    fn parse_invalid_format() {
        for s in ["bad", "", "5:30", "0530", "05:3", "05:300", "05-30", " 05:30", "a5:30"] {
            let t = parse_minutes(s);
            assert!(!t.is_valid(), "{s:?} should be invalid");
            assert_eq!(t.minutes(), 0);
        }
    }

    #[test]
    fn parse_invalid_values() {
        assert!(!parse_minutes("30:00").is_valid());
        assert!(!parse_minutes("99:00").is_valid());
        assert!(!parse_minutes("12:60").is_valid());
        assert!(!parse_minutes("12:99").is_valid());
    }

    #[test]
    fn non_ascii_rejected() {
        assert!(!parse_minutes("０５:30").is_valid());
        assert!(!parse_minutes("时间").is_valid());
    }

    #[test]
    fn gap() {
        assert_eq!(gap_minutes("09:00", "08:30"), 30);
        assert_eq!(gap_minutes("08:00", "08:30"), -30);
        assert_eq!(gap_minutes("24:10", "23:50"), 20);
    }

    #[test]
    fn gap_with_invalid_side_uses_zero() {
        assert_eq!(gap_minutes("00:30", "bad"), 30);
        assert_eq!(gap_minutes("bad", "00:30"), -30);
    }

    #[test]
    fn checked_gap() {
        assert_eq!(checked_gap_minutes("09:00", "08:30"), Some(30));
        assert_eq!(checked_gap_minutes("09:00", "--"), None);
        assert_eq!(checked_gap_minutes("", "08:30"), None);
    }

    #[test]
    fn display() {
        assert_eq!(parse_minutes("07:05").to_string(), "07:05");
        assert_eq!(parse_minutes("25:00").to_string(), "25:00");
        assert_eq!(parse_minutes("nope").to_string(), "--:--");
    }
}
