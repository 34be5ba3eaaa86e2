#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price in dollars with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format a rating out of 5 with one decimal.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1} / 5")
}
