//! Expense card animations: staggered fade-in for cards in view, and a
//! hover transition.
//!
//! The reveal re-runs on every scroll and restarts the animation of every
//! visible card; there is no "already shown" bookkeeping.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::time::Duration;

use super::{Capability, Scope};
use crate::config::UiConfig;
use crate::dom::{Element, EventKind, Host, Propagation, Selector};
use crate::util::css_seconds;

pub const CARD_CLASS: &str = "expense-card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    pub duration: Duration,
    pub stagger: Duration,
}

impl RevealTiming {
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self { duration: config.reveal_duration(), stagger: config.reveal_stagger() }
    }

    /// `animation` value for the card at `index` among all cards.
    #[must_use]
    pub fn animation(self, index: usize) -> String {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        let delay = self.stagger.saturating_mul(steps);
        format!("fadeIn {} ease {} both", css_seconds(self.duration), css_seconds(delay))
    }
}

pub fn capabilities<H: Host>(config: &UiConfig) -> Vec<Capability<H>> {
    let timing = RevealTiming::from_config(config);
    vec![
        Capability::<H>::new("reveal.initial", EventKind::Load, Scope::Window, move |host, _| {
            reveal_visible_cards(host, timing);
            Propagation::Continue
        }),
        Capability::<H>::new("reveal.scroll", EventKind::Scroll, Scope::Window, move |host, _| {
            reveal_visible_cards(host, timing);
            Propagation::Continue
        }),
        Capability::<H>::new(
            "reveal.hover",
            EventKind::MouseEnter,
            Scope::All(Selector::class(CARD_CLASS)),
            |_, card| {
                card.set_style("transition", "all 0.3s ease");
                Propagation::Continue
            },
        ),
    ]
}

/// Animate every card intersecting the viewport. Returns how many were
/// animated.
pub fn reveal_visible_cards<H: Host>(host: &H, timing: RevealTiming) -> usize {
    let viewport = host.viewport_height();
    let mut revealed = 0;
    for (index, card) in host.select_all(&Selector::class(CARD_CLASS)).iter().enumerate() {
        if card.bounds().intersects_viewport(viewport) {
            card.set_style("animation", &timing.animation(index));
            revealed += 1;
        }
    }
    revealed
}
