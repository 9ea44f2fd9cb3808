//! Trip Planner client error types.

use std::fmt;

/// Errors from the Trip Planner HTTP client.
///
/// `StopNotFound` means a station name could not be resolved; every other
/// variant is a transport-level failure (network, HTTP status, or an
/// unparseable top-level body). Both classes abort the whole trip lookup;
/// there is no partial result without both endpoints.
#[derive(Debug)]
pub enum TripError {
    /// Stop lookup returned no usable match for the given name
    StopNotFound { name: String },

    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization of the response body failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Rate limited by the API
    RateLimited,
}

impl fmt::Display for TripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripError::StopNotFound { name } => {
                write!(f, "no stop found matching {name:?}")
            }
            TripError::Http(e) => write!(f, "HTTP error: {e}"),
            TripError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TripError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            TripError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            TripError::RateLimited => write!(f, "rate limited by the Trip Planner API"),
        }
    }
}

impl std::error::Error for TripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TripError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TripError {
    fn from(err: reqwest::Error) -> Self {
        TripError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TripError::StopNotFound {
            name: "Nonexistent Place".into(),
        };
        assert_eq!(err.to_string(), "no stop found matching \"Nonexistent Place\"");

        let err = TripError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = TripError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));
    }
}
