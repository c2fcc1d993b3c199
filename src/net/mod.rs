//! REST client for the Pingerus API server.
//!
//! DESIGN
//! ======
//! `client` owns the transport and the one-shot refresh-on-401 policy;
//! `auth` and `checks` add endpoint wrappers on top of it. Wire DTOs and
//! casing normalization live in `types` so the rest of the crate only ever
//! sees canonical shapes.

pub mod auth;
pub mod checks;
pub mod client;
pub mod error;
#[cfg(test)]
pub mod testing;
pub mod types;
