//! Form submission affordance and confirmation gates.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use super::{Capability, Scope};
use crate::config::UiConfig;
use crate::dom::{Element, EventKind, Host, Propagation, Selector};

/// Blocking confirmation in front of forms posting to `action_prefix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationGate {
    pub name: &'static str,
    pub action_prefix: String,
    pub prompt: String,
}

impl ConfirmationGate {
    /// Ask the user; a declined prompt cancels the submission.
    pub fn check<H: Host>(&self, host: &H) -> Propagation {
        if host.confirm(&self.prompt) {
            Propagation::Continue
        } else {
            log::debug!("{}: submission declined", self.name);
            Propagation::Cancel
        }
    }
}

/// The delete and settle gates.
#[must_use]
pub fn confirmation_gates(config: &UiConfig) -> Vec<ConfirmationGate> {
    vec![
        ConfirmationGate {
            name: "forms.confirm_delete",
            action_prefix: "/delete".to_owned(),
            prompt: config.delete_prompt.clone(),
        },
        ConfirmationGate {
            name: "forms.confirm_settle",
            action_prefix: "/settle".to_owned(),
            prompt: config.settle_prompt.clone(),
        },
    ]
}

pub fn capabilities<H: Host>(config: &UiConfig) -> Vec<Capability<H>> {
    let mut table = vec![Capability::<H>::new(
        "forms.submit_affordance",
        EventKind::Submit,
        Scope::All(Selector::tag("form")),
        |_, form| {
            mute_submit_button(form);
            Propagation::Continue
        },
    )];
    for gate in confirmation_gates(config) {
        let name = gate.name;
        let scope = Scope::All(Selector::action_prefix(&gate.action_prefix));
        table.push(Capability::<H>::new(name, EventKind::Submit, scope, move |host, _| gate.check(host)));
    }
    table
}

/// Dim and shrink the form's enabled submit button. Purely visual.
pub fn mute_submit_button<E: Element>(form: &E) -> bool {
    match form.find(&Selector::SubmitButton) {
        Some(button) if !button.is_disabled() => {
            button.set_style("opacity", "0.7");
            button.set_style("transform", "scale(0.95)");
            true
        }
        _ => false,
    }
}
