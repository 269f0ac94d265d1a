//! Rupee formatting for display.
//!
//! Amounts are plain [`Decimal`]s everywhere in the storefront; rounding and
//! grouping only happen here, at the display edge. Formatting follows the
//! `en-IN` locale: the last three integer digits form one group and the rest
//! are grouped in pairs (`12,34,567`), with at most three fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Maximum fraction digits shown by [`format_currency`].
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format an amount as rupees, keeping up to three fraction digits.
///
/// ```
/// use dukaan_core::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1_234_567)), "₹12,34,567");
/// assert_eq!(format_currency(Decimal::new(24_995, 1)), "₹2,499.5");
/// ```
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    render(rounded)
}

/// Format an amount as whole rupees, rounding half away from zero.
///
/// ```
/// use dukaan_core::format_currency_rounded;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency_rounded(Decimal::new(14_995, 1)), "₹1,500");
/// ```
#[must_use]
pub fn format_currency_rounded(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    render(rounded)
}

fn render(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let text = amount.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let grouped = group_indian(int_part);

    match frac_part {
        Some(frac) => format!("{sign}{CURRENCY_SYMBOL}{grouped}.{frac}"),
        None => format!("{sign}{CURRENCY_SYMBOL}{grouped}"),
    }
}

/// Insert `en-IN` group separators into a run of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
