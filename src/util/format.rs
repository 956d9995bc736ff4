//! Display formatting for quotes and portfolio rows.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `189.50 USD`; currency omitted when unknown.
#[must_use]
pub fn format_price(price: f64, currency: &str) -> String {
    if currency.is_empty() { format!("{price:.2}") } else { format!("{price:.2} {currency}") }
}

/// `+1.25 (+0.66%)` / `-1.25 (-0.66%)`.
#[must_use]
pub fn format_change(change: f64, change_percent: f64) -> String {
    format!("{change:+.2} ({change_percent:+.2}%)")
}

/// CSS modifier for a price move.
#[must_use]
pub fn change_class(change: f64) -> &'static str {
    if change >= 0.0 { "quote--up" } else { "quote--down" }
}

/// Compact volume: `51.2M`, `3.4K`, `950`.
#[must_use]
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("{:.1}B", volume / 1_000_000_000.0)
    } else if volume >= 1_000_000.0 {
        format!("{:.1}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.1}K", volume / 1_000.0)
    } else {
        format!("{volume:.0}")
    }
}
