//! wasm entry point and functions exported to page scripts.
//!
//! The start function installs the panic hook and console logger, then runs
//! [`crate::init`] as soon as the document is interactive.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::UiConfig;
use crate::dom::browser::{BrowserElement, BrowserHost};
use crate::util::currency::format_currency;
use crate::util::loading::{add_loading_state, remove_loading_state};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {err}");
    }

    let host = match BrowserHost::new() {
        Ok(host) => host,
        Err(err) => {
            log::warn!("ui behaviors disabled: {err}");
            return;
        }
    };

    if host.document().ready_state() != "loading" {
        crate::init(&host);
        return;
    }

    let document = host.document().clone();
    let on_ready = Closure::once(move || {
        crate::init(&host);
    });
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
        log::warn!("could not wait for DOMContentLoaded: {err:?}");
    }
    on_ready.forget();
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: f64) -> String {
    format_currency(amount)
}

/// Without an explicit `text` the page's configured loading label is used.
#[wasm_bindgen(js_name = addLoadingState)]
pub fn add_loading_state_js(button: web_sys::Element, text: Option<String>) {
    let text = match (text, BrowserHost::new()) {
        (Some(text), _) => Some(text),
        (None, Ok(host)) => Some(UiConfig::from_host(&host).loading_text),
        (None, Err(err)) => {
            log::warn!("using default loading text: {err}");
            None
        }
    };
    add_loading_state(&BrowserElement::new(button), text.as_deref());
}

#[wasm_bindgen(js_name = removeLoadingState)]
pub fn remove_loading_state_js(button: web_sys::Element) {
    remove_loading_state(&BrowserElement::new(button));
}
