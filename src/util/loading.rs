//! Button loading state.
//!
//! Page scripts call these around slow actions: the control is disabled,
//! shows a busy label and dims; restoring brings back the remembered label.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use crate::dom::Element;

/// Attribute holding the label a busy control will restore.
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub const DEFAULT_LOADING_TEXT: &str = "Processing...";

/// Disable `button`, remember its label and show `text` (or
/// [`DEFAULT_LOADING_TEXT`]). A control that is already busy keeps the
/// label it remembered first.
pub fn add_loading_state<E: Element>(button: &E, text: Option<&str>) {
    button.set_disabled(true);
    if button.attribute(ORIGINAL_TEXT_ATTR).is_none() {
        button.set_attribute(ORIGINAL_TEXT_ATTR, &button.text());
    }
    button.set_text(text.unwrap_or(DEFAULT_LOADING_TEXT));
    button.set_style("opacity", "0.6");
}

/// Re-enable `button` and restore the label saved by [`add_loading_state`].
/// Without a saved label the current text is left alone.
pub fn remove_loading_state<E: Element>(button: &E) {
    button.set_disabled(false);
    if let Some(original) = button.attribute(ORIGINAL_TEXT_ATTR) {
        button.set_text(&original);
        button.remove_attribute(ORIGINAL_TEXT_ATTR);
    }
    button.set_style("opacity", "1");
}

#[must_use]
pub fn is_loading<E: Element>(button: &E) -> bool {
    button.is_disabled() && button.attribute(ORIGINAL_TEXT_ATTR).is_some()
}
