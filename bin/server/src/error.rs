//! Domain error types for server operations.
//!
//! Server functions log the full error and hand the browser a user-safe
//! `ServerFnError` built by `into_server_error`.

use integration_loader_client::LoadError;
use integration_loader_records::LOAD_FAILED_MESSAGE;
use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors while loading integration data on behalf of the browser.
#[derive(Debug)]
pub enum LoadDataError {
    /// The backend client was not installed on the request.
    ClientUnavailable { details: String },
    /// The backend load failed.
    Backend(LoadError),
}

impl fmt::Display for LoadDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientUnavailable { details } => {
                write!(f, "integration backend client unavailable: {}", details)
            }
            Self::Backend(e) => write!(f, "integration load failed: {}", e),
        }
    }
}

impl From<LoadError> for LoadDataError {
    fn from(e: LoadError) -> Self {
        Self::Backend(e)
    }
}

impl LoadDataError {
    /// Convert to a user-safe ServerFnError.
    ///
    /// The message is exactly what the data form displays.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            LoadDataError::ClientUnavailable { .. } => ServerFnError::new(LOAD_FAILED_MESSAGE),
            LoadDataError::Backend(e) => ServerFnError::new(e.user_message()),
        }
    }
}
