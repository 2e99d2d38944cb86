use crate::domain::models::event::Event;

/// `original * (1 - percent / 100)`. Non-positive percentages leave the
/// price untouched. No rounding happens here; see [`format_rupees`].
pub fn discounted_price(original: f64, percent: i32) -> f64 {
    if percent <= 0 {
        return original;
    }
    original * (1.0 - percent as f64 / 100.0)
}

/// Price as shown while `current` is (or is not) the running event.
pub fn price_for(current: Option<&Event>, original: f64) -> f64 {
    match current {
        Some(event) => discounted_price(original, event.discount_percent),
        None => original,
    }
}

/// Discounted price only when it differs from the original.
pub fn sale_price(current: Option<&Event>, original: f64) -> Option<f64> {
    match current {
        Some(event) if event.discount_percent > 0 => Some(discounted_price(original, event.discount_percent)),
        _ => None,
    }
}

/// Currency display boundary: two decimals.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Compact amount as a line item shows it: whole numbers without decimals.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}
