//! Common formatting helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with a currency label and two decimals (`KES 250.00`).
///
/// Half-cent ties round away from zero on the exact stored value, so `0.125`
/// shows as `0.13` while `1.005` (stored just below the tie) shows as `1.00`.
pub fn format_amount(currency: &str, amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{} {:.2}", currency, rounded)
        }
        None => format!("{} {:.2}", currency, amount),
    }
}

/// Escape text for inclusion in HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
