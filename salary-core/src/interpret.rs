//! Decides which panels a [`SalaryResult`] renders.
//!
//! Classification is purely structural: it looks at which blocks are present
//! and never does arithmetic. Front ends draw exactly the panels the
//! [`DisplayPlan`] names.

use rust_decimal::Decimal;

use crate::models::{BreakdownResult, MismatchResult, SalaryResult};

/// Rendering branch for a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPlan {
    /// Only the mismatch notice: echoed identity plus analysis.
    Mismatch,
    /// Breakdown panels; each flag is independent of the others.
    Breakdown {
        show_research: bool,
        show_monthly: bool,
        show_notes: bool,
    },
}

impl DisplayPlan {
    pub fn shows_research(&self) -> bool {
        matches!(self, Self::Breakdown { show_research: true, .. })
    }

    pub fn shows_monthly(&self) -> bool {
        matches!(self, Self::Breakdown { show_monthly: true, .. })
    }

    pub fn shows_notes(&self) -> bool {
        matches!(self, Self::Breakdown { show_notes: true, .. })
    }
}

/// Borrowed view of a result, split by variant for renderers.
#[derive(Debug, Clone, Copy)]
pub enum ResultView<'a> {
    Mismatch(&'a MismatchResult),
    Breakdown(&'a BreakdownResult),
}

impl<'a> From<&'a SalaryResult> for ResultView<'a> {
    fn from(result: &'a SalaryResult) -> Self {
        match result {
            SalaryResult::Mismatch(m) => Self::Mismatch(m),
            SalaryResult::Breakdown(b) => Self::Breakdown(b),
        }
    }
}

/// Classifies `result` into the panels it should render.
pub fn interpret(result: &SalaryResult) -> DisplayPlan {
    match result {
        SalaryResult::Mismatch(_) => DisplayPlan::Mismatch,
        SalaryResult::Breakdown(b) => DisplayPlan::Breakdown {
            show_research: b.research_findings.is_some(),
            show_monthly: b.monthly_breakdown.is_some(),
            show_notes: b
                .notes
                .as_deref()
                .is_some_and(|notes| !notes.trim().is_empty()),
        },
    }
}

/// Whether an optional deduction row (ESI, other deductions) is drawn.
///
/// These rows only appear for a present, non-zero amount. PF, TDS and
/// professional tax rows are always drawn.
pub fn optional_row_visible(amount: Option<Decimal>) -> bool {
    amount.is_some_and(|value| !value.is_zero())
}
