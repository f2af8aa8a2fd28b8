//! Station table error types.

use std::path::PathBuf;

/// Errors that can occur when building a station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The table text does not have the expected quoted structure
    #[error("unrecognised station table format: {message}")]
    Format { message: String },

    /// Reading the table file failed
    #[error("failed to read station table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::Format {
            message: "expected 3 segments, found 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "unrecognised station table format: expected 3 segments, found 1"
        );

        let err = StationError::Io {
            path: PathBuf::from("station_name.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("station_name.js"));
        assert!(err.to_string().contains("missing"));
    }
}
