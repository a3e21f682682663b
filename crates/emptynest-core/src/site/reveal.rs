//! Staggered hero reveal

use std::time::Duration;

/// One element of the reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    /// Class of the revealed element
    pub class: &'static str,
    /// Position in the sequence, starting at 1
    pub order: u32,
}

pub const REVEAL_SEQUENCE: [RevealStep; 5] = [
    RevealStep { class: "hero-eyebrow", order: 1 },
    RevealStep { class: "hero-headline", order: 2 },
    RevealStep { class: "hero-subtext", order: 3 },
    RevealStep { class: "hero-actions", order: 4 },
    RevealStep { class: "visual-gallery", order: 5 },
];

/// Delay for each hero element
pub fn reveal_schedule(stagger: Duration) -> Vec<(&'static str, Duration)> {
    REVEAL_SEQUENCE
        .iter()
        .map(|step| (step.class, stagger * step.order))
        .collect()
}

/// Delay of a sibling at `index` inside a revealed group
pub fn stagger_delay(index: usize, stagger: Duration) -> Duration {
    stagger * index as u32
}
