//! Ticket query response DTOs.
//!
//! These map directly onto the JSON envelope of the `leftTicket/query`
//! endpoint. Fields default when missing because the API drops them on
//! error responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level response envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TicketQueryResponse {
    #[serde(default)]
    pub data: TicketQueryData,

    #[serde(default)]
    pub httpstatus: u16,

    #[serde(default)]
    pub messages: serde_json::Value,

    #[serde(default)]
    pub status: bool,
}

/// Payload of a successful query.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TicketQueryData {
    #[serde(default)]
    pub flag: String,

    /// Telecode → station name for the stations mentioned in `result`.
    #[serde(default)]
    pub map: HashMap<String, String>,

    /// One `|`-delimited line per trip.
    #[serde(default)]
    pub result: Vec<String>,
}

impl TicketQueryResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
