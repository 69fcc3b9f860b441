//! Navigation shell state
//!
//! The header is in exactly one of three states. Hovering a top-level item
//! opens its mega-menu, leaving the header region closes it, and the mobile
//! menu takes over the whole viewport until a link is chosen or it is
//! closed.

use crate::core::content::{NavItem, NavMenuSection};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Hovering(NavItem),
    MobileOpen,
}

impl NavState {
    /// Pointer entered a top-level item
    pub fn hover(self, item: NavItem) -> Self {
        match self {
            // The mobile overlay covers the desktop header
            NavState::MobileOpen => self,
            _ => NavState::Hovering(item),
        }
    }

    /// Pointer left the header region
    pub fn leave(self) -> Self {
        match self {
            NavState::Hovering(_) => NavState::Closed,
            other => other,
        }
    }

    /// Hamburger button pressed
    pub fn open_mobile(self) -> Self {
        NavState::MobileOpen
    }

    /// Close button pressed, link chosen, or route changed
    pub fn close(self) -> Self {
        NavState::Closed
    }

    pub fn active_item(&self) -> Option<NavItem> {
        match self {
            NavState::Hovering(item) => Some(*item),
            _ => None,
        }
    }

    pub fn active_menu(&self) -> Option<&'static NavMenuSection> {
        self.active_item().map(|item| item.menu())
    }

    pub fn is_mobile_open(&self) -> bool {
        matches!(self, NavState::MobileOpen)
    }

    /// Whether page-background scrolling must be disabled
    pub fn locks_scroll(&self) -> bool {
        self.is_mobile_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_and_leave() {
        let state = NavState::Closed.hover(NavItem::Pricing);
        assert_eq!(state, NavState::Hovering(NavItem::Pricing));
        assert_eq!(state.active_menu().unwrap().eyebrow, "Plans");

        let state = state.hover(NavItem::Ai);
        assert_eq!(state.active_item(), Some(NavItem::Ai));

        assert_eq!(state.leave(), NavState::Closed);
    }

    #[test]
    fn test_closed_has_no_menu() {
        assert!(NavState::Closed.active_menu().is_none());
        assert!(!NavState::Closed.locks_scroll());
    }

    #[test]
    fn test_mobile_open_locks_scroll() {
        let state = NavState::Closed.open_mobile();
        assert!(state.is_mobile_open());
        assert!(state.locks_scroll());
        assert!(state.active_menu().is_none());
    }

    #[test]
    fn test_mobile_close_restores_scroll() {
        let state = NavState::Hovering(NavItem::Solutions).open_mobile().close();
        assert_eq!(state, NavState::Closed);
        assert!(!state.locks_scroll());
    }

    #[test]
    fn test_panel_stays_open_until_link_chosen() {
        // Re-entering the same item while moving across the panel keeps it
        let state = NavState::Closed
            .hover(NavItem::Solutions)
            .hover(NavItem::Solutions);
        assert_eq!(state.active_item(), Some(NavItem::Solutions));

        assert_eq!(state.close(), NavState::Closed);
    }

    #[test]
    fn test_hover_ignored_while_mobile_open() {
        let state = NavState::MobileOpen.hover(NavItem::Login).leave();
        assert_eq!(state, NavState::MobileOpen);
    }
}
