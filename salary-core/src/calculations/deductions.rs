//! Monthly deduction totals.

use rust_decimal::Decimal;

use crate::models::Deductions;

impl Deductions {
    /// Every deduction line in a fixed order: PF, TDS, professional tax,
    /// ESI, other.
    pub fn lines(&self) -> [Option<Decimal>; 5] {
        [
            self.pf,
            self.tax_monthly,
            self.professional_tax,
            self.esi,
            self.other_deductions,
        ]
    }
}

/// Sums all deduction lines, counting absent lines as zero.
///
/// Never fails; summation order is the fixed order of [`Deductions::lines`].
/// A total beyond the `Decimal` range saturates at `Decimal::MAX` (or `MIN`).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use salary_core::Deductions;
/// use salary_core::calculations::total_deductions;
///
/// assert_eq!(total_deductions(&Deductions::default()), Decimal::ZERO);
///
/// let deductions = Deductions {
///     pf: Some(dec!(1000)),
///     tax_monthly: Some(dec!(2000)),
///     ..Default::default()
/// };
/// assert_eq!(total_deductions(&deductions), dec!(3000));
/// ```
pub fn total_deductions(deductions: &Deductions) -> Decimal {
    deductions
        .lines()
        .into_iter()
        .flatten()
        .fold(Decimal::ZERO, |total, line| total.saturating_add(line))
}

/// [`total_deductions`] for a block that may itself be missing.
pub fn total_deductions_opt(deductions: Option<&Deductions>) -> Decimal {
    deductions.map(total_deductions).unwrap_or(Decimal::ZERO)
}
