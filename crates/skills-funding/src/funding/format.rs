//! Display strings for dollar amounts and cost ranges.

use super::domain::CostRange;

/// Render a whole-dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

pub fn format_cost_range(range: &CostRange) -> String {
    if range.is_free() {
        return "Free".to_string();
    }

    if range.min == range.max {
        return format_currency(range.min);
    }

    if range.min == 0 {
        return format!("Free - {}", format_currency(range.max));
    }

    format!(
        "{} - {}",
        format_currency(range.min),
        format_currency(range.max)
    )
}
