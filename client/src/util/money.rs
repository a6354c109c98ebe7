//! Invoice amount formatting.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format a cent amount as a dollar string, e.g. `12500 -> "$125.00"`.
/// Negative amounts keep the sign in front of the currency symbol.
#[must_use]
pub fn format_cents(amount_cents: i64) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let abs = amount_cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Parse a dollar amount typed into a form ("125", "125.5", "$125.50")
/// into cents. Rejects negatives, malformed input, and sub-cent precision.
#[must_use]
pub fn parse_dollars(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('$').unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }

    let (whole, frac) = match raw.split_once('.') {
        Some((w, f)) => (w, f),
        None => (raw, ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac_cents)
}
