//! Timing and threshold constants for site behavior

use std::time::Duration;

/// Site behavior settings
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// How long a toast stays fully visible
    pub toast_display: Duration,
    /// Fade-out after the display period
    pub toast_fade: Duration,
    /// Wait before falling back from an app deep link to the web URL
    pub deep_link_fallback: Duration,
    /// Scroll offset (px) above which the nav bar gets its elevated background
    pub nav_elevate_after: f64,
    /// Scroll offset (px) past which scrolling down hides the nav bar
    pub nav_hide_after: f64,
    /// Delay between consecutive reveal steps
    pub reveal_stagger: Duration,
    /// Frames of the metric count-up
    pub count_up_frames: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            toast_display: Duration::from_millis(3000),
            toast_fade: Duration::from_millis(300),
            deep_link_fallback: Duration::from_millis(1500),
            nav_elevate_after: 100.0,
            nav_hide_after: 200.0,
            reveal_stagger: Duration::from_millis(100),
            count_up_frames: 60,
        }
    }
}

impl SiteConfig {
    /// Total time a toast is on screen
    pub fn toast_lifetime(&self) -> Duration {
        self.toast_display + self.toast_fade
    }
}
