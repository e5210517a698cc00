//! Indian Rupee amount formatting.
//!
//! Matches what `Intl.NumberFormat("en-IN", { style: "currency", currency:
//! "INR", minimumFractionDigits: 2 })` produces: rupee sign, Indian digit
//! grouping (`12,34,567`) and exactly two fractional digits. Exact
//! half-paisa values round away from zero (`0.125` -> `0.13`).

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

pub const RUPEE_SIGN: char = '₹';

/// Format `amount` as an INR currency string, e.g. `₹1,234.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_nan() { "-" } else { "" };
    if amount.is_nan() {
        return format!("{RUPEE_SIGN}NaN");
    }
    if amount.is_infinite() {
        return format!("{sign}{RUPEE_SIGN}∞");
    }

    let fixed = fixed_two(amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}{RUPEE_SIGN}{}.{fraction}", group_indian(whole))
}

/// Two fractional digits, ties away from zero.
///
/// `{:.2}` already rounds on the exact binary value, so only exact ties
/// need care. A finite `f64` lands exactly halfway between two paise only
/// when its fraction is an odd number of eighths (`.125`, `.375`, `.625`,
/// `.875`), and none of those carry into the whole part.
fn fixed_two(abs: f64) -> String {
    let eighths = abs.fract() * 8.0;
    if [1.0, 3.0, 5.0, 7.0].contains(&eighths) {
        let paise = (eighths * 12.5).ceil();
        return format!("{:.0}.{paise:.0}", abs.trunc());
    }
    format!("{abs:.2}")
}

/// Insert Indian-system separators into a run of ASCII digits: the last
/// three digits form one group, everything before groups in pairs.
#[must_use]
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead > 0 {
        out.push_str(&head[..lead]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead > 0 {
            out.push(',');
        }
        out.extend(pair.iter().map(|&b| char::from(b)));
    }
    out.push(',');
    out.push_str(tail);
    out
}
