//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Callers receive a single rejection per request. The 401 refresh-and-retry
//! path is handled inside the client and never surfaces here on success;
//! everything else maps onto one of these variants.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Upper bound for error text shown in the UI.
pub const MAX_DISPLAY_LEN: usize = 200;

/// Failure of an API request after retry handling has run its course.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Network or DNS failure before any response arrived.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. `message` carries the response body text when the
    /// server sent one, or the `HTTP <status>` fallback.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The server declared a JSON body that did not decode.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message, truncated for display surfaces.
    pub fn display_message(&self) -> String {
        let full = self.to_string();
        if full.chars().count() <= MAX_DISPLAY_LEN {
            full
        } else {
            full.chars().take(MAX_DISPLAY_LEN).collect()
        }
    }
}
