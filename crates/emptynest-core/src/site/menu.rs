//! Expandable navigation menu

/// Open/closed state of the dropdown menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a key press; returns true if the state changed
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            return true;
        }
        false
    }

    /// A click landed outside the button and dropdown
    pub fn handle_outside_click(&mut self) {
        self.close();
    }

    /// `aria-expanded` of the menu button
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// `aria-hidden` of the dropdown
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_only_when_open() {
        let mut menu = MenuState::default();
        assert!(!menu.handle_key("Escape"));

        menu.toggle();
        assert!(menu.is_open());
        assert!(!menu.handle_key("Enter"));
        assert!(menu.handle_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn aria_attributes_follow_state() {
        let mut menu = MenuState::default();
        assert_eq!((menu.aria_expanded(), menu.aria_hidden()), ("false", "true"));
        menu.open();
        assert_eq!((menu.aria_expanded(), menu.aria_hidden()), ("true", "false"));
        menu.handle_outside_click();
        assert!(!menu.is_open());
    }
}
