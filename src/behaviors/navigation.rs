//! Smooth scroll to top when following links to the dashboard root.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::{Capability, Scope};
use crate::dom::{EventKind, Host, Propagation, Selector};

pub const HOME_HREF: &str = "/";

/// The click still navigates; the scroll only smooths the same-page case.
pub fn capabilities<H: Host>() -> Vec<Capability<H>> {
    vec![Capability::<H>::new(
        "navigation.scroll_to_top",
        EventKind::Click,
        Scope::All(Selector::href(HOME_HREF)),
        |host, _| {
            host.scroll_to_top();
            Propagation::Continue
        },
    )]
}
