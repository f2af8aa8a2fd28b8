//! Remaining-ticket query client.
//!
//! This module talks to the ticketing site's `leftTicket/query` endpoint,
//! which lists every scheduled trip between two stations on a date.
//!
//! Key characteristics of the API:
//! - Station identifiers are telecodes (e.g. "IOQ"), not names
//! - Each trip is a single `|`-delimited string with fixed field positions
//! - The endpoint is read-only; nothing here books tickets

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

use chrono::NaiveDate;

pub use client::{KyfwClient, KyfwConfig};
pub use error::KyfwError;
pub use mock::MockTripSource;
pub use types::{TicketQueryData, TicketQueryResponse};

/// Source of raw trip lines.
///
/// This abstraction allows the query flow to be tested with canned data.
pub trait TripSource {
    /// Raw trip lines for trips from `from` to `to` on `date`.
    fn query_trips(
        &self,
        date: NaiveDate,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<Vec<String>, KyfwError>> + Send;
}
