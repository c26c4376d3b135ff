//! Display-side calculations for salary results.
//!
//! The salary itself is computed by the remote service; this module only
//! derives the values needed to show a result: deduction totals, LPA to
//! monthly conversions, and rupee formatting.

pub mod common;
pub mod currency;
pub mod deductions;

pub use common::{monthly_from_lpa, monthly_from_optional_lpa, round_to_rupee};
pub use currency::{NOT_AVAILABLE, format_inr, format_lpa, format_rupees};
pub use deductions::{total_deductions, total_deductions_opt};
