//! Cross-page helpers: runtime config, auth guard, theme, formatting,
//! input validation.

pub mod auth;
pub mod config;
pub mod dark_mode;
pub mod format;
pub mod validate;
