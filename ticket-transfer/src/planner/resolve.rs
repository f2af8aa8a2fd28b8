//! Pairwise transfer matching.
//!
//! Every first leg is tried against every second leg. Leg lists for one
//! query are short (tens of trips), so the plain nested scan is fast enough
//! and keeps the output order obvious.

use tracing::debug;

use crate::domain::{TrainTransfer, TripRecord, checked_gap_minutes, gap_minutes};

use super::config::TransferConfig;

/// Find every (first, second) pair whose layover falls inside the window.
///
/// The layover is `second.start_time - first.arrive_time`. Output lists all
/// pairs for `first_legs[0]` (in `second_legs` order), then `first_legs[1]`,
/// and so on. Pairs are never deduplicated, and station continuity between
/// the legs is not checked here.
///
/// # Examples
///
/// ```
/// use ticket_transfer::domain::{TripRecord, parse_trip_records};
/// use ticket_transfer::planner::{TransferConfig, resolve_transfers};
///
/// fn trip(code: &str, start: &str, arrive: &str) -> String {
///     let mut fields = vec![""; 33];
///     fields[3] = code;
///     fields[8] = start;
///     fields[9] = arrive;
///     fields.join("|")
/// }
///
/// let first = parse_trip_records(&[trip("G1", "09:00", "10:00")]);
/// let second = parse_trip_records(&[
///     trip("G2", "10:20", "11:00"),
///     trip("G3", "10:30", "11:10"),
///     trip("G4", "11:10", "12:00"),
/// ]);
///
/// let transfers = resolve_transfers(&first, &second, &TransferConfig::new(25, 60));
/// assert_eq!(transfers.len(), 1);
/// assert_eq!(transfers[0].second_leg().train_code(), "G3");
/// ```
pub fn resolve_transfers<'a>(
    first_legs: &'a [TripRecord],
    second_legs: &'a [TripRecord],
    config: &TransferConfig,
) -> Vec<TrainTransfer<'a>> {
    let mut result = Vec::new();

    if !config.is_satisfiable() {
        debug!(
            min = config.min_gap_mins,
            max = config.max_gap_mins,
            "transfer window is empty"
        );
        return result;
    }

    for first in first_legs {
        let arrive = first.arrive_time();
        for second in second_legs {
            let gap = if config.skip_unknown_times {
                match checked_gap_minutes(second.start_time(), arrive) {
                    Some(gap) => gap,
                    None => continue,
                }
            } else {
                gap_minutes(second.start_time(), arrive)
            };

            if config.admits(gap) {
                result.push(TrainTransfer::new(first, second));
            }
        }
    }

    debug!(
        first_legs = first_legs.len(),
        second_legs = second_legs.len(),
        transfers = result.len(),
        "resolved transfers"
    );

    result
}
