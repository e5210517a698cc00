//! Flash message auto-dismissal.
//!
//! Each alert present at load gets its own pair of timers: fade out after
//! the dismiss delay, remove once the fade has played.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::time::Duration;

use super::{Capability, Scope};
use crate::config::UiConfig;
use crate::dom::{Element, EventKind, Host, Propagation, Selector};
use crate::util::css_seconds;

pub const ALERT_CLASS: &str = "alert";

/// Keyframes for the slide-out used while dismissing.
pub const FADE_OUT_KEYFRAMES: &str = "
        @keyframes fadeOut {
            from { opacity: 1; transform: translateX(0); }
            to { opacity: 0; transform: translateX(20px); }
        }
    ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTiming {
    pub delay: Duration,
    pub fade: Duration,
}

impl DismissTiming {
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self { delay: config.flash_dismiss_delay(), fade: config.flash_fade() }
    }

    /// Time from load until the alert is gone.
    #[must_use]
    pub fn total(self) -> Duration {
        self.delay + self.fade
    }
}

pub fn capabilities<H: Host>(config: &UiConfig) -> Vec<Capability<H>> {
    let timing = DismissTiming::from_config(config);
    vec![
        Capability::<H>::new("flash.keyframes", EventKind::Load, Scope::Document, |host, _| {
            host.append_style(FADE_OUT_KEYFRAMES);
            Propagation::Continue
        }),
        Capability::<H>::new(
            "flash.dismiss",
            EventKind::Load,
            Scope::All(Selector::class(ALERT_CLASS)),
            move |host, alert| {
                schedule_dismiss(host, alert, timing);
                Propagation::Continue
            },
        ),
    ]
}

pub fn schedule_dismiss<H: Host>(host: &H, alert: &H::Element, timing: DismissTiming) {
    let alert = alert.clone();
    let later = host.clone();
    host.set_timeout(
        timing.delay,
        Box::new(move || {
            alert.set_style("animation", &format!("fadeOut {} ease", css_seconds(timing.fade)));
            later.set_timeout(timing.fade, Box::new(move || alert.remove()));
        }),
    );
}
