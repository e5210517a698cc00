//! Utility helpers shared across behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers with no listener wiring. `currency` and `loading` are also
//! exported to page scripts through the wasm bindings.

pub mod currency;
pub mod loading;

use std::time::Duration;

/// Format a duration as a CSS time value (`0.3s`, `0s`).
#[must_use]
pub fn css_seconds(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}
