//! Input affordances: focus lift, non-negative amounts, today's date.

#[cfg(test)]
#[path = "inputs_test.rs"]
mod inputs_test;

use chrono::NaiveDate;

use super::{Capability, Scope};
use crate::dom::{Element, EventKind, Host, Propagation, Selector};

pub const FORM_INPUT_CLASS: &str = "form-input";

/// Value format of `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn capabilities<H: Host>() -> Vec<Capability<H>> {
    let text_inputs = Scope::All(Selector::class(FORM_INPUT_CLASS));
    vec![
        Capability::<H>::new("inputs.focus", EventKind::Focus, text_inputs.clone(), |_, input| {
            input.set_style("transform", "translateY(-2px)");
            Propagation::Continue
        }),
        Capability::<H>::new("inputs.blur", EventKind::Blur, text_inputs, |_, input| {
            input.set_style("transform", "translateY(0)");
            Propagation::Continue
        }),
        Capability::<H>::new(
            "inputs.clamp_non_negative",
            EventKind::Input,
            Scope::All(Selector::input_type("number")),
            |_, input| {
                clamp_non_negative(input);
                Propagation::Continue
            },
        ),
        Capability::<H>::new(
            "inputs.default_date",
            EventKind::Load,
            Scope::All(Selector::input_type("date")),
            |host, input| {
                default_date(input, host.today());
                Propagation::Continue
            },
        ),
    ]
}

/// Reset a negative numeric value to `0`. Returns whether it changed.
/// Empty or non-numeric text is left for the browser to handle.
pub fn clamp_non_negative<E: Element>(input: &E) -> bool {
    match input.value().trim().parse::<f64>() {
        Ok(value) if value < 0.0 => {
            input.set_value("0");
            true
        }
        _ => false,
    }
}

/// Fill an empty date input with `today`. Returns whether it was filled.
pub fn default_date<E: Element>(input: &E, today: NaiveDate) -> bool {
    if !input.value().is_empty() {
        return false;
    }
    input.set_value(&today.format(DATE_INPUT_FORMAT).to_string());
    true
}
