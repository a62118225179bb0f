//! Price Helpers
//!
//! Prices are typed with a comma decimal separator and sent with a dot.

/// Normalize a typed price for transmission: the first comma becomes a dot
pub fn normalize(input: &str) -> String {
    input.replacen(',', ".", 1)
}

/// Parse a typed price, accepting either separator
pub fn parse(input: &str) -> Option<f64> {
    let value: f64 = normalize(input.trim()).parse().ok()?;
    value.is_finite().then_some(value)
}

/// Value for the price input of the edit form, e.g. `10,50`
pub fn to_input(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Display label, e.g. `R$ 10,50`
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", to_input(value))
}
