//! Navigation bar scroll behavior

use crate::config::SiteConfig;

/// Derived look of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavChrome {
    last_y: f64,
    /// Elevated background and shadow
    pub elevated: bool,
    /// Slid out of view
    pub hidden: bool,
}

impl NavChrome {
    /// Update for a new scroll offset.
    ///
    /// Scrolling down past the hide threshold hides the bar unless the menu
    /// is open; any other movement shows it.
    pub fn on_scroll(&mut self, y: f64, menu_open: bool, config: &SiteConfig) {
        self.elevated = y > config.nav_elevate_after;
        self.hidden = y > self.last_y && y > config.nav_hide_after && !menu_open;
        self.last_y = y;
    }

    pub fn class(&self) -> String {
        let mut class = String::from("navigation");
        if self.elevated {
            class.push_str(" elevated");
        }
        if self.hidden {
            class.push_str(" nav-hidden");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_when_scrolling_down_past_threshold() {
        let config = SiteConfig::default();
        let mut nav = NavChrome::default();

        nav.on_scroll(150.0, false, &config);
        assert!(nav.elevated);
        assert!(!nav.hidden);

        nav.on_scroll(250.0, false, &config);
        assert!(nav.hidden);
        assert_eq!(nav.class(), "navigation elevated nav-hidden");

        nav.on_scroll(240.0, false, &config);
        assert!(!nav.hidden);
    }

    #[test]
    fn open_menu_keeps_bar_visible() {
        let config = SiteConfig::default();
        let mut nav = NavChrome::default();
        nav.on_scroll(300.0, true, &config);
        assert!(!nav.hidden);

        nav.on_scroll(50.0, false, &config);
        assert!(!nav.elevated);
        assert_eq!(nav.class(), "navigation");
    }
}
