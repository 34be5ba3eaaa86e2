use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn price_keeps_two_decimals() {
    assert_eq!(format_price(9.99), "$9.99");
    assert_eq!(format_price(549.0), "$549.00");
}

#[test]
fn price_rounds_half_cents() {
    assert_eq!(format_price(1.005), "$1.00");
    assert_eq!(format_price(1.006), "$1.01");
}

// =============================================================
// format_rating
// =============================================================

#[test]
fn rating_keeps_one_decimal() {
    assert_eq!(format_rating(4.94), "4.9 / 5");
    assert_eq!(format_rating(3.0), "3.0 / 5");
}
