//! Station code ↔ name lookup.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::error::StationError;

/// Delimiter around the quoted station list.
const SEGMENT_DELIMITER: char = '\'';

/// Number of segments the table splits into: prefix, list, suffix.
const SEGMENT_COUNT: usize = 3;

/// Delimiter between station entries.
const STATION_DELIMITER: char = '@';

/// Delimiter between fields of one entry.
const FIELD_DELIMITER: char = '|';

/// Fewest fields an entry needs (abbreviation, name, telecode).
const MIN_ENTRY_FIELDS: usize = 3;

/// Read-only lookup between station telecodes and display names.
///
/// Built once from the station table text and shared by reference.
///
/// # Examples
///
/// ```
/// use ticket_transfer::stations::StationDirectory;
///
/// let raw = "var station_names = '@szb|深圳北|IOQ|shenzhenbei|szb|0@gzn|广州南|IZQ|guangzhounan|gzn|1';";
/// let stations = StationDirectory::build(raw).unwrap();
///
/// assert_eq!(stations.name_for_code("IOQ"), "深圳北");
/// assert_eq!(stations.code_for_name("广州南"), Some("IZQ"));
///
/// // Unknown codes come back unchanged
/// assert_eq!(stations.name_for_code("UNKNOWN"), "UNKNOWN");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    code_to_name: HashMap<String, String>,
    name_to_code: HashMap<String, String>,
}

impl StationDirectory {
    /// An empty directory; every lookup falls back to the code.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the raw station table.
    ///
    /// The text must split on `'` into exactly three segments. The middle
    /// one is a `@`-separated list of `|`-separated entries; entries with
    /// fewer than three fields are skipped.
    pub fn build(raw_table: &str) -> Result<Self, StationError> {
        let segments: Vec<&str> = raw_table.split(SEGMENT_DELIMITER).collect();
        if segments.len() != SEGMENT_COUNT {
            return Err(StationError::Format {
                message: format!(
                    "expected {SEGMENT_COUNT} segments, found {}",
                    segments.len()
                ),
            });
        }

        let mut directory = Self::default();
        for entry in segments[1].split(STATION_DELIMITER) {
            let fields: Vec<&str> = entry.split(FIELD_DELIMITER).collect();
            if fields.len() < MIN_ENTRY_FIELDS {
                continue;
            }
            directory.insert(fields[1], fields[2]);
        }

        debug!(stations = directory.len(), "built station directory");
        Ok(directory)
    }

    /// Read and parse a station table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::build(&raw)
    }

    fn insert(&mut self, name: &str, code: &str) {
        self.name_to_code.insert(name.to_string(), code.to_string());
        self.code_to_name.insert(code.to_string(), name.to_string());
    }

    /// Display name for a telecode, or the code itself if unknown.
    pub fn name_for_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.code_to_name
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }

    /// Telecode for a display name.
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    /// Number of distinct telecodes.
    pub fn len(&self) -> usize {
        self.code_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_name.is_empty()
    }
}
