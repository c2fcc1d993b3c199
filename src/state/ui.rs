//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `checks`) so rendering controls can evolve independently of wire data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}
