//! Indian Rupee display formatting.
//!
//! Amounts are rendered with the `₹` symbol, no fraction digits, and Indian
//! digit grouping: the last three digits form one group and every group
//! above that has two digits (`12,34,567`, `1,00,00,000`).

use rust_decimal::Decimal;

use super::common::round_to_rupee;

/// Shown in place of an amount the service did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rupee symbol prefix.
pub const RUPEE_SYMBOL: &str = "₹";

/// Formats an optional amount; `None` becomes [`NOT_AVAILABLE`].
///
/// Zero is a real value and renders as `₹0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::format_inr;
///
/// assert_eq!(format_inr(None), "N/A");
/// assert_eq!(format_inr(Some(dec!(0))), "₹0");
/// assert_eq!(format_inr(Some(dec!(1234567))), "₹12,34,567");
/// ```
pub fn format_inr(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) => format_rupees(value),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a known amount as whole rupees.
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = round_to_rupee(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();

    format!("{sign}{RUPEE_SYMBOL}{}", group_indian(&digits))
}

/// Renders a raw LPA figure, e.g. `12.5 LPA`.
pub fn format_lpa(lpa: Option<Decimal>) -> String {
    match lpa {
        Some(value) => format!("{} LPA", value.normalize()),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
