//! Page chrome: behaviour that does not depend on any dataset.
//!
//! The host feeds browser events in; these types decide what changes.

use hashbrown::HashSet;

/// Scroll offset past which the navbar gets its raised shadow.
pub const NAVBAR_ELEVATION_OFFSET: f64 = 50.0;

/// Fraction of a card that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button click. Returns the new `aria-expanded` value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any menu link click closes the menu.
    pub fn follow_link(&mut self) {
        self.open = false;
    }
}

pub fn navbar_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_ELEVATION_OFFSET
}

/// Cards that fade in the first time they scroll into view.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intersection update for one card. Returns `true` exactly when this
    /// update is the one that reveals it.
    pub fn observe(&mut self, card: &str, intersection_ratio: f64) -> bool {
        if intersection_ratio < REVEAL_THRESHOLD || self.revealed.contains(card) {
            return false;
        }
        self.revealed.insert(card.to_owned())
    }

    pub fn is_revealed(&self, card: &str) -> bool {
        self.revealed.contains(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_menu() {
        let mut menu = NavMenu::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.follow_link();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navbar_elevation() {
        assert!(!navbar_elevated(0.0));
        assert!(!navbar_elevated(50.0));
        assert!(navbar_elevated(50.5));
    }

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe("card-1", 0.05));
        assert!(tracker.observe("card-1", 0.1));
        assert!(!tracker.observe("card-1", 0.9));
        assert!(!tracker.observe("card-1", 0.0));
        assert!(tracker.is_revealed("card-1"));
        assert!(!tracker.is_revealed("card-2"));
    }
}
