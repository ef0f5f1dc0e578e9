//! API failure taxonomy.
//!
//! Every domain API call resolves to `Ok` or exactly one of these
//! kinds; raw transport errors never cross the client boundary.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A classified API failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ApiProblem {
    /// Server rejected the credentials or token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Server understood the credentials but denied access.
    #[error("Forbidden")]
    Forbidden,

    /// Endpoint or resource does not exist.
    #[error("Not found")]
    NotFound,

    /// Transport-level timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection could not be established.
    #[error("Cannot connect to server")]
    CannotConnect,

    /// 5xx response.
    #[error("Server error ({status})")]
    Server { status: u16 },

    /// Any other 4xx response.
    #[error("Request rejected ({status})")]
    Rejected { status: u16 },

    /// Malformed or missing response body.
    #[error("Bad response data")]
    BadData,

    /// Anything that does not fit the kinds above.
    #[error("Unknown error")]
    Unknown,
}

/// Tagged result of every domain API call.
pub type ApiResult<T> = Result<T, ApiProblem>;

impl ApiProblem {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiProblem::Unauthorized,
            StatusCode::FORBIDDEN => ApiProblem::Forbidden,
            StatusCode::NOT_FOUND => ApiProblem::NotFound,
            StatusCode::REQUEST_TIMEOUT => ApiProblem::Timeout,
            s if s.is_server_error() => ApiProblem::Server {
                status: s.as_u16(),
            },
            s if s.is_client_error() => ApiProblem::Rejected {
                status: s.as_u16(),
            },
            _ => ApiProblem::Unknown,
        }
    }
}

impl From<reqwest::Error> for ApiProblem {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiProblem::Timeout
        } else if e.is_connect() {
            ApiProblem::CannotConnect
        } else if e.is_decode() {
            ApiProblem::BadData
        } else if let Some(status) = e.status() {
            ApiProblem::from_status(status)
        } else {
            ApiProblem::Unknown
        }
    }
}
