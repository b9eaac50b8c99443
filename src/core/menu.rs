//! Open/closed state of the mobile navigation overlay

use super::navigation::NavigationEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Mobile menu state machine owned by the header
///
/// The overlay exists only while the menu is open; closing unmounts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuMachine {
    state: MenuState,
}

impl MenuMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Whether the overlay panel should be in the DOM
    pub fn overlay_mounted(&self) -> bool {
        self.is_open()
    }

    /// User pressed the menu button
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Any navigation closes the menu, whatever the destination
    pub fn on_navigation(&mut self, _event: &NavigationEvent) {
        self.close();
    }
}
