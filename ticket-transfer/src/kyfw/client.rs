//! Ticket query HTTP client.
//!
//! Queries remaining tickets for one origin/destination pair on one date and
//! returns the raw trip lines. No retries: a failed request is returned to
//! the caller as-is.

use chrono::NaiveDate;
use tracing::debug;

use super::TripSource;
use super::error::KyfwError;
use super::types::TicketQueryResponse;

/// Default base URL of the ticketing site.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn";

/// Path of the remaining-ticket query endpoint.
const QUERY_PATH: &str = "/otn/leftTicket/queryZ";

/// Passenger type sent with every query.
const PURPOSE_CODES: &str = "ADULT";

/// Longest body excerpt kept in a JSON error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the ticket query client.
#[derive(Debug, Clone)]
pub struct KyfwConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl KyfwConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for KyfwConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the remaining-ticket query API.
#[derive(Debug, Clone)]
pub struct KyfwClient {
    http: reqwest::Client,
    base_url: String,
}

impl KyfwClient {
    /// Create a new client with the given configuration.
    pub fn new(config: KyfwConfig) -> Result<Self, KyfwError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn query_url(&self) -> String {
        format!("{}{}", self.base_url, QUERY_PATH)
    }

    /// Fetch and decode the response envelope for one query.
    pub async fn query(
        &self,
        date: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<TicketQueryResponse, KyfwError> {
        let response = self
            .http
            .get(self.query_url())
            .query(&query_params(date, from, to))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(KyfwError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KyfwError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

impl TripSource for KyfwClient {
    async fn query_trips(
        &self,
        date: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, KyfwError> {
        let resp = self.query(date, from, to).await?;
        debug!(%date, from, to, trips = resp.data.result.len(), "queried trips");
        Ok(resp.data.result)
    }
}

fn query_params(date: NaiveDate, from: &str, to: &str) -> [(&'static str, String); 4] {
    [
        ("leftTicketDTO.train_date", date.format("%Y-%m-%d").to_string()),
        ("leftTicketDTO.from_station", from.to_string()),
        ("leftTicketDTO.to_station", to.to_string()),
        ("purpose_codes", PURPOSE_CODES.to_string()),
    ]
}

/// Decode a body and reject envelopes flagged as failed.
fn decode_body(body: &str) -> Result<TicketQueryResponse, KyfwError> {
    let resp = TicketQueryResponse::from_json(body).map_err(|e| KyfwError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    })?;

    if !resp.status {
        return Err(KyfwError::Api {
            status: resp.httpstatus,
            message: resp.messages.to_string(),
        });
    }

    Ok(resp)
}
