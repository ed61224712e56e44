//! Error type definitions.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A `Result` alias where the `Err` case is `dummyapi::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the Dummy API client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Missing app id")]
    MissingAppId,
    #[error("Invalid app id (make sure there are no invalid characters)")]
    InvalidAppId,
    #[error("Failed to setup HTTP client: {0}")]
    HttpClientSetup(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    Deserialize(reqwest::Error),
    #[error("Http error: {0}")]
    Http(reqwest::Error),
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    InvalidParams(#[from] serde_qs::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(url::ParseError),
}

/// An error returned by the Dummy API.
///
/// The server reports failures as `{ "error": "SOME_CODE" }`; the request
/// context (status, method, path) is filled in client-side.
#[derive(Deserialize, Debug)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    #[serde(skip)]
    pub method: http::Method,
    #[serde(skip)]
    pub path: String,
    pub error: Option<String>,
}

impl ApiError {
    pub(crate) fn new(status: u16, method: http::Method, path: String, error: Option<String>) -> Self {
        Self {
            status,
            method,
            path,
            error,
        }
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.error.as_ref() {
            write!(
                f,
                "Received {} on {} {}: {}",
                self.status, self.method, self.path, code
            )
        } else {
            write!(
                f,
                "Received {} on {} {}",
                self.status, self.method, self.path
            )
        }
    }
}
