use std::time::Duration;

use super::*;
use crate::behaviors::attach;
use crate::dom::memory::{MemoryElement, MemoryHost};

fn input(kind: &str) -> MemoryElement {
    MemoryElement::new("input").with_attribute("type", kind)
}

fn wire(host: &MemoryHost) {
    attach(host, &capabilities::<MemoryHost>());
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date")
}

// =============================================================
// Focus
// =============================================================

#[test]
fn focus_lifts_and_blur_resets() {
    let host = MemoryHost::new();
    let note = input("text").with_class("form-input");
    host.body().append(&note);
    wire(&host);

    host.focus(&note);
    assert_eq!(note.style("transform"), "translateY(-2px)");
    host.blur(&note);
    assert_eq!(note.style("transform"), "translateY(0)");
}

#[test]
fn inputs_without_class_get_no_focus_effect() {
    let host = MemoryHost::new();
    let plain = input("text");
    host.body().append(&plain);
    wire(&host);

    host.focus(&plain);
    assert_eq!(plain.style("transform"), "");
}

// =============================================================
// Numeric clamp
// =============================================================

#[test]
fn typing_negative_amount_yields_zero() {
    let host = MemoryHost::new();
    let amount = input("number").with_class("form-input");
    host.body().append(&amount);
    wire(&host);

    host.input(&amount, "-5");
    assert_eq!(amount.value(), "0");
}

#[test]
fn clamp_never_leaves_a_negative_value() {
    for raw in ["-5", "-0.01", "-1e3", "12.5", "0", "-0", "", "1e9"] {
        let el = input("number").with_value(raw);
        clamp_non_negative(&el);
        let after = el.value();
        if let Ok(value) = after.parse::<f64>() {
            assert!(value >= 0.0, "{raw} left {after}");
        }
    }
}

#[test]
fn clamp_keeps_non_negative_and_empty_values() {
    for raw in ["12.5", "0", "", "1e9"] {
        let el = input("number").with_value(raw);
        assert!(!clamp_non_negative(&el));
        assert_eq!(el.value(), raw);
    }
}

#[test]
fn no_upper_bound_is_enforced() {
    let el = input("number").with_value("99999999");
    assert!(!clamp_non_negative(&el));
    assert_eq!(el.value(), "99999999");
}

// =============================================================
// Date defaulting
// =============================================================

#[test]
fn empty_date_input_gets_today_once() {
    let host = MemoryHost::new();
    host.set_today(today());
    let date = input("date");
    host.body().append(&date);
    wire(&host);
    assert_eq!(date.value(), "2024-03-09");

    date.set_value("");
    host.advance(Duration::from_secs(60));
    host.scroll();
    assert_eq!(date.value(), "");
}

#[test]
fn prefilled_date_input_is_untouched() {
    let host = MemoryHost::new();
    host.set_today(today());
    let date = input("date").with_value("2023-12-31");
    host.body().append(&date);
    wire(&host);
    assert_eq!(date.value(), "2023-12-31");
}

#[test]
fn default_date_reports_whether_it_filled() {
    let empty = input("date");
    assert!(default_date(&empty, today()));
    assert!(!default_date(&empty, NaiveDate::default()));
    assert_eq!(empty.value(), "2024-03-09");
}

#[test]
fn default_date_uses_padded_iso_format() {
    let cases = [((2025, 1, 5), "2025-01-05"), ((2024, 2, 29), "2024-02-29"), ((999, 12, 31), "0999-12-31")];
    for ((year, month, day), expected) in cases {
        let el = input("date");
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        default_date(&el, date);
        assert_eq!(el.value(), expected);
    }
}
