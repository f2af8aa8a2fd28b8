//! Transfer matching between two journey legs.
//!
//! Given trips for the first leg (origin to interchange) and trips for the
//! second leg (interchange to destination), this module finds every pair
//! whose layover falls inside a configured window.

mod config;
mod resolve;

pub use config::{DEFAULT_MAX_GAP_MINS, DEFAULT_MIN_GAP_MINS, TransferConfig};
pub use resolve::resolve_transfers;
