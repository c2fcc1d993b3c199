//! Check-list state for the checks page.
//!
//! DESIGN
//! ======
//! The list is a transient, possibly stale copy of server-owned entities;
//! it is reloaded per page view and mutated optimistically by the dialogs.

#[cfg(test)]
#[path = "checks_test.rs"]
mod checks_test;

use crate::net::types::Check;

/// Shared check-list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ChecksState {
    pub items: Vec<Check>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
    pub query: String,
}
