use super::*;

#[test]
fn formats_whole_and_fractional_amounts() {
    assert_eq!(format_cents(12_500), "$125.00");
    assert_eq!(format_cents(4_509), "$45.09");
    assert_eq!(format_cents(7), "$0.07");
}

#[test]
fn formats_zero() {
    assert_eq!(format_cents(0), "$0.00");
}

#[test]
fn keeps_sign_in_front_of_symbol() {
    assert_eq!(format_cents(-12_500), "-$125.00");
}

// =============================================================
// parse_dollars
// =============================================================

#[test]
fn parses_whole_and_fractional_dollars() {
    assert_eq!(parse_dollars("125"), Some(12_500));
    assert_eq!(parse_dollars("125.50"), Some(12_550));
    assert_eq!(parse_dollars("125.5"), Some(12_550));
    assert_eq!(parse_dollars("0.07"), Some(7));
}

#[test]
fn accepts_currency_symbol_and_whitespace() {
    assert_eq!(parse_dollars(" $45.09 "), Some(4_509));
}

#[test]
fn rejects_malformed_amounts() {
    assert_eq!(parse_dollars(""), None);
    assert_eq!(parse_dollars("."), None);
    assert_eq!(parse_dollars("12.345"), None);
    assert_eq!(parse_dollars("-5"), None);
    assert_eq!(parse_dollars("12,50"), None);
    assert_eq!(parse_dollars("abc"), None);
}

#[test]
fn round_trips_with_format_cents() {
    for cents in [0, 7, 4_509, 12_500] {
        let formatted = format_cents(cents);
        assert_eq!(parse_dollars(&formatted), Some(cents), "round trip for {formatted}");
    }
}
