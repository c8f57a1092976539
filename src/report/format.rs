//! Human-readable rendering of costs and quantities.
//!
//! Display only; the persisted report always keeps full precision.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Amounts below 0.00005 (and above zero) would print as "0", so they are
/// shown in scientific notation instead.
fn small_amount() -> Decimal {
    Decimal::new(5, 5)
}

/// Format an amount with thousands separators and at most 4 decimal places.
pub fn format_amount(d: Decimal) -> String {
    if d > Decimal::ZERO && d < small_amount() {
        return format_general(d);
    }

    let rounded = d.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero).normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }
    group_thousands(&rounded.to_string())
}

/// Format an optional cost; `-` when the cost does not apply.
pub fn format_cost(d: Option<Decimal>) -> String {
    match d {
        Some(d) => format_amount(d),
        None => "-".to_string(),
    }
}

/// Format an optional quantity with thousands separators and exactly 4 decimal places.
pub fn format_quantity(q: Option<Decimal>) -> String {
    match q {
        Some(q) => {
            let rounded = q.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
            let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
            group_thousands(&format!("{:.4}", rounded))
        }
        None => "-".to_string(),
    }
}

/// One significant digit with a signed, two digit exponent, e.g. "1e-05".
fn format_general(d: Decimal) -> String {
    let f = d.to_f64().unwrap_or_default();
    let formatted = format!("{:.0e}", f);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Insert `,` between groups of three integer digits.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
