//! HTTP client error types.

/// Errors from a single raw request against the backend.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The endpoint URL could not be built from the base URL and path.
    #[error("bad URL {url:?}: {reason}")]
    BadUrl { url: String, reason: String },

    /// The server answered with anything other than 200 OK.
    #[error("bad response {status}: {body}")]
    BadResponse { status: u16, body: String },

    /// The request never completed (DNS, connect, TLS, read...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-network transport (e.g. the mock) could not serve the request.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl HttpError {
    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HttpError::BadUrl {
            url: "nope/api/v1".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(
            err.to_string(),
            "bad URL \"nope/api/v1\": relative URL without a base"
        );

        let err = HttpError::BadResponse {
            status: 503,
            body: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "bad response 503: Service Unavailable");
        assert_eq!(err.status(), Some(503));

        let err = HttpError::Unavailable("no mock data".into());
        assert_eq!(err.to_string(), "unavailable: no mock data");
        assert_eq!(err.status(), None);
    }
}
