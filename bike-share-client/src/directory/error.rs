//! Directory service error types.

use crate::http::HttpError;

use super::decode::DecodeError;

/// Errors surfaced by the directory service.
///
/// Every failure is reported as a network error. The underlying cause stays
/// available through [`DirectoryError::cause`] and `Error::source`.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("network error: {0}")]
    Network(#[source] FetchFailure),
}

/// What actually went wrong behind a [`DirectoryError::Network`].
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    /// Bad URL, non-200 response, or transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The body was not a valid station array.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl DirectoryError {
    /// The failure behind the network error.
    pub fn cause(&self) -> &FetchFailure {
        match self {
            DirectoryError::Network(cause) => cause,
        }
    }
}

impl From<HttpError> for DirectoryError {
    fn from(err: HttpError) -> Self {
        DirectoryError::Network(err.into())
    }
}

impl From<DecodeError> for DirectoryError {
    fn from(err: DecodeError) -> Self {
        DirectoryError::Network(err.into())
    }
}
