//! Page behaviors and the capability table that wires them up.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`init`] runs once per page load. It builds a table of [`Capability`]
//! entries (`{event, scope, handler}`) and [`attach`]es it to the host:
//! `Load` entries run immediately against their targets, every other entry
//! becomes an event listener. Behaviors never depend on each other; the
//! only ordering constraint is that the theme is applied first.
//!
//! Handlers are plain functions over [`Host`] and [`Element`], so each one
//! can be exercised against the in-memory host without a browser.

pub mod flash;
pub mod forms;
pub mod inputs;
pub mod navigation;
pub mod reveal;
pub mod theme_toggle;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::fmt;
use std::rc::Rc;

use crate::config::UiConfig;
use crate::dom::{EventKind, Host, Listener, Propagation, Selector, Target};
use crate::state::theme::ThemePreference;

/// Which elements a capability binds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The root element.
    Document,
    /// The window (scroll); `Load` handlers receive the root element.
    Window,
    /// The element with this id, if present.
    Id(String),
    /// Every element matching the selector at attach time.
    All(Selector),
}

/// One row of the behavior table.
pub struct Capability<H: Host> {
    pub name: &'static str,
    pub event: EventKind,
    pub scope: Scope,
    pub handler: Listener<H>,
}

impl<H: Host> Capability<H> {
    pub fn new(
        name: &'static str,
        event: EventKind,
        scope: Scope,
        handler: impl Fn(&H, &H::Element) -> Propagation + 'static,
    ) -> Self {
        Self { name, event, scope, handler: Rc::new(handler) }
    }
}

impl<H: Host> fmt::Debug for Capability<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("event", &self.event)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Result of [`init`].
#[derive(Debug)]
pub struct Session {
    pub config: UiConfig,
    pub theme: Rc<ThemePreference>,
    /// Listeners registered plus `Load` handlers run.
    pub bindings: usize,
}

/// Build the full behavior table in attach order.
pub fn capabilities<H: Host>(config: &UiConfig, theme: &Rc<ThemePreference>) -> Vec<Capability<H>> {
    let mut table = theme_toggle::capabilities(config, theme);
    table.extend(flash::capabilities(config));
    table.extend(forms::capabilities(config));
    table.extend(inputs::capabilities());
    table.extend(reveal::capabilities(config));
    table.extend(navigation::capabilities());
    table
}

/// Resolve every capability's scope and bind it. Returns the number of
/// bindings made; an empty scope simply contributes none.
pub fn attach<H: Host>(host: &H, table: &[Capability<H>]) -> usize {
    let mut bindings = 0;
    for capability in table {
        let targets = resolve(host, &capability.scope);
        log::debug!("{}: {} target(s)", capability.name, targets.len());
        for target in targets {
            if capability.event == EventKind::Load {
                let element = match target {
                    Target::Window => host.root(),
                    Target::Element(element) => element,
                };
                (capability.handler)(host, &element);
            } else {
                host.listen(target, capability.event, Rc::clone(&capability.handler));
            }
            bindings += 1;
        }
    }
    bindings
}

/// Initialize every page behavior against `host`.
pub fn init<H: Host>(host: &H) -> Session {
    let config = UiConfig::from_host(host);
    let theme = Rc::new(ThemePreference::load(host, &config.theme_storage_key));
    let table = capabilities::<H>(&config, &theme);
    let bindings = attach(host, &table);
    log::info!("ui behaviors ready: {} capabilities, {bindings} bindings, theme {}", table.len(), theme.current());
    Session { config, theme, bindings }
}

fn resolve<H: Host>(host: &H, scope: &Scope) -> Vec<Target<H::Element>> {
    match scope {
        Scope::Document => vec![Target::Element(host.root())],
        Scope::Window => vec![Target::Window],
        Scope::Id(id) => host.by_id(id).map(Target::Element).into_iter().collect(),
        Scope::All(selector) => host.select_all(selector).into_iter().map(Target::Element).collect(),
    }
}
