//! Error types for the Cloud Connect SDK

use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when using the SDK
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the HTTP execution layer
    #[error(transparent)]
    Http(#[from] cloud_connect_http::HttpError),
}

impl Error {
    /// Status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => err.status(),
        }
    }
}
