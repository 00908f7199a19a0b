//! Geoapify client error types.

use std::fmt;

/// Errors from the Geoapify HTTP client.
#[derive(Debug)]
pub enum GeoapifyError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Response carried no route features
    NoRoute,

    /// No usable API key
    NotConfigured(String),
}

impl fmt::Display for GeoapifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoapifyError::Http(e) => write!(f, "HTTP error: {e}"),
            GeoapifyError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GeoapifyError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GeoapifyError::NoRoute => write!(f, "no route found between the given locations"),
            GeoapifyError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for GeoapifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoapifyError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeoapifyError {
    /// The request URL carries the API key, so it is stripped.
    fn from(err: reqwest::Error) -> Self {
        GeoapifyError::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeoapifyError::ApiError {
            status: 401,
            message: "Invalid apiKey".into(),
        };
        assert_eq!(err.to_string(), "API error 401: Invalid apiKey");

        let err = GeoapifyError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value (body: <html>)");

        let err = GeoapifyError::NotConfigured("GEOAPIFY_API_KEY is not set".into());
        assert!(err.to_string().starts_with("not configured"));
    }
}
