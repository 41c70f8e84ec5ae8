//! Global theme toggle shared across screens.

use super::state_cell::StateCell;

/// Light/dark mode switch state.
#[derive(Default)]
pub struct ThemeViewModel {
    is_dark_theme: StateCell<bool>,
}

impl ThemeViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether dark mode is active; defaults to light.
    pub fn is_dark_theme(&self) -> &StateCell<bool> {
        &self.is_dark_theme
    }

    /// Toggle between light and dark themes.
    pub fn toggle_theme(&self) {
        self.is_dark_theme.update(|dark| *dark = !*dark);
    }
}
