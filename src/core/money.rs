use rust_decimal::Decimal;

/// Rounds an amount to whole rupees (tax figures are reported without paise)
pub fn whole_rupees(amount: Decimal) -> Decimal {
    amount.round_dp(0)
}

/// Formats an amount with the Indian digit grouping used across the
/// dashboard and suggestion text, e.g. `₹12,75,000`.
///
/// The last three digits form one group, every group above that is two
/// digits wide.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = whole_rupees(amount);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let grouped = group_indian(&digits);
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut idx = head_bytes.len();
    while idx > 0 {
        let start = idx.saturating_sub(2);
        groups.push(&head[start..idx]);
        idx = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
