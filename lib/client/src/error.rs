//! Error types for backend loads.

use integration_loader_records::LOAD_FAILED_MESSAGE;
use serde::Deserialize;
use std::fmt;

/// Errors from talking to the integration backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The HTTP client could not be constructed.
    ClientBuild { reason: String },
    /// The request could not be sent or the response not received.
    ConnectionFailed { url: String, reason: String },
    /// The backend did not answer within the configured timeout.
    Timeout { url: String },
    /// The backend answered with a non-success status.
    Rejected {
        status: u16,
        /// The `detail` string from the error body, if any.
        detail: Option<String>,
    },
    /// The backend answered successfully but the body is not a record list.
    MalformedResponse { reason: String },
}

impl LoadError {
    /// Message to show the user.
    ///
    /// Only a backend-provided `detail` is surfaced; everything else gets the
    /// generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => LOAD_FAILED_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { reason } => {
                write!(f, "failed to build HTTP client: {reason}")
            }
            Self::ConnectionFailed { url, reason } => {
                write!(f, "request to '{url}' failed: {reason}")
            }
            Self::Timeout { url } => write!(f, "request to '{url}' timed out"),
            Self::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "backend returned HTTP {status}: {detail}"),
                None => write!(f, "backend returned HTTP {status}"),
            },
            Self::MalformedResponse { reason } => {
                write!(f, "malformed load response: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extracts the `detail` string from an error response body.
///
/// Non-JSON bodies, missing or empty details, and structured details (such
/// as validation error lists) yield `None`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    match body.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}
