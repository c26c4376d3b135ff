//! Common conversions shared by the display calculations.
//!
//! This module provides the unit conversions used when turning service
//! figures into rupee amounts for display.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rupees in one lakh.
pub const RUPEES_PER_LAKH: Decimal = dec!(100000);

/// Months in a compensation year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Rounds a value to whole rupees using half-away-from-zero rounding.
///
/// This matches how `en-IN` currency formatting with zero fraction digits
/// treats midpoints.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(1234.4)), dec!(1234));
/// assert_eq!(round_to_rupee(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_to_rupee(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts an annual figure in lakhs (LPA) to its monthly rupee equivalent.
///
/// `lpa * 100000 / 12`, unrounded. Rounding is left to the formatter.
/// Figures too large for a `Decimal` saturate at `Decimal::MAX` (or `MIN`)
/// instead of panicking.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::monthly_from_lpa;
///
/// assert_eq!(monthly_from_lpa(dec!(12)), dec!(100000));
/// assert_eq!(monthly_from_lpa(dec!(0)), dec!(0));
/// ```
pub fn monthly_from_lpa(lpa: Decimal) -> Decimal {
    lpa.saturating_mul(RUPEES_PER_LAKH) / MONTHS_PER_YEAR
}

/// Like [`monthly_from_lpa`], treating an absent figure as zero.
pub fn monthly_from_optional_lpa(lpa: Option<Decimal>) -> Decimal {
    monthly_from_lpa(lpa.unwrap_or(Decimal::ZERO))
}
