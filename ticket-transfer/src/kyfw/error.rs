//! Ticket query error types.

use std::fmt;

/// Errors from querying the ticketing API.
#[derive(Debug)]
pub enum KyfwError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body was not the expected JSON
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Request rejected (usually missing session cookies)
    Unauthorized,

    /// No data available for the requested route
    NoData { from: String, to: String },
}

impl fmt::Display for KyfwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KyfwError::Http(e) => write!(f, "HTTP error: {e}"),
            KyfwError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            KyfwError::Api { status, message } => write!(f, "API error {status}: {message}"),
            KyfwError::Unauthorized => write!(f, "unauthorized by ticketing API"),
            KyfwError::NoData { from, to } => write!(f, "no trip data for {from} -> {to}"),
        }
    }
}

impl std::error::Error for KyfwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KyfwError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for KyfwError {
    fn from(err: reqwest::Error) -> Self {
        KyfwError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = KyfwError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = KyfwError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = KyfwError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = KyfwError::NoData {
            from: "IOQ".into(),
            to: "IZQ".into(),
        };
        assert_eq!(err.to_string(), "no trip data for IOQ -> IZQ");
    }
}
