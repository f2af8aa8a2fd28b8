//! In-memory trip source for tests and offline runs.
//!
//! Serves canned trip lines keyed by (from, to) as if they were live API
//! responses. Dates are ignored.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use super::TripSource;
use super::error::KyfwError;
use super::types::TicketQueryResponse;

/// Trip source that serves pre-loaded responses.
#[derive(Debug, Clone, Default)]
pub struct MockTripSource {
    routes: HashMap<(String, String), Vec<String>>,
}

impl MockTripSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` for queries from `from` to `to`.
    pub fn with_route(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        records: Vec<String>,
    ) -> Self {
        self.routes.insert((from.into(), to.into()), records);
        self
    }

    /// Load saved responses from a directory.
    ///
    /// Expects files named `{FROM}-{TO}.json` (e.g. `IOQ-IZQ.json`), each
    /// holding a full query response envelope.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, KyfwError> {
        let data_dir = data_dir.as_ref();
        let mut source = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| KyfwError::Api {
            status: 0,
            message: format!("failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| KyfwError::Api {
                status: 0,
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some((from, to)) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|stem| stem.split_once('-'))
            else {
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| KyfwError::Api {
                status: 0,
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let resp = TicketQueryResponse::from_json(&json).map_err(|e| KyfwError::Json {
                message: format!("failed to parse {path:?}: {e}"),
                body: None,
            })?;

            source = source.with_route(from, to, resp.data.result);
        }

        Ok(source)
    }

    /// Number of routes with canned data.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl TripSource for MockTripSource {
    async fn query_trips(
        &self,
        _date: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<Vec<String>, KyfwError> {
        self.routes
            .get(&(from.to_string(), to.to_string()))
            .cloned()
            .ok_or_else(|| KyfwError::NoData {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}
