//! Theme application and the toggle control.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use std::rc::Rc;
use std::time::Duration;

use super::{Capability, Scope};
use crate::config::UiConfig;
use crate::dom::{Element, EventKind, Host, Propagation};
use crate::state::theme::{Theme, ThemePreference};
use crate::util::css_seconds;

pub fn capabilities<H: Host>(config: &UiConfig, theme: &Rc<ThemePreference>) -> Vec<Capability<H>> {
    let toggle_scope = Scope::Id(config.theme_toggle_id.clone());
    let pulse = config.theme_pulse();

    let on_load = Rc::clone(theme);
    let on_icon = Rc::clone(theme);
    let on_click = Rc::clone(theme);
    vec![
        Capability::<H>::new("theme.apply", EventKind::Load, Scope::Document, move |_, root| {
            on_load.apply(root);
            Propagation::Continue
        }),
        Capability::<H>::new("theme.icon", EventKind::Load, toggle_scope.clone(), move |_, toggle| {
            render_icon(toggle, on_icon.current());
            Propagation::Continue
        }),
        Capability::<H>::new("theme.toggle", EventKind::Click, toggle_scope, move |host, toggle| {
            toggle_theme(host, &on_click, toggle, pulse);
            Propagation::Continue
        }),
    ]
}

pub fn render_icon<E: Element>(toggle: &E, theme: Theme) {
    toggle.set_text(theme.icon());
}

/// Flip the theme, re-apply and persist it, refresh the icon and pulse the
/// control. A failed write only costs persistence.
pub fn toggle_theme<H: Host>(host: &H, theme: &ThemePreference, toggle: &H::Element, pulse: Duration) -> Theme {
    let next = theme.toggle();
    theme.apply(&host.root());
    if let Err(err) = theme.save(host) {
        log::warn!("theme switched to {next} but not persisted: {err}");
    }
    render_icon(toggle, next);
    play_pulse(host, toggle, pulse);
    next
}

fn play_pulse<H: Host>(host: &H, toggle: &H::Element, pulse: Duration) {
    toggle.set_style("animation", &format!("pulse {} ease", css_seconds(pulse)));
    let toggle = toggle.clone();
    host.set_timeout(pulse, Box::new(move || toggle.set_style("animation", "")));
}
