//! Plain-text rendering of the calculator state.
//!
//! Each panel is drawn only when [`salary_core::interpret`] says so; this
//! module decides layout, never which panels exist.

use std::fmt::{self, Write};

use rust_decimal::Decimal;
use salary_core::calculations::{
    format_inr, format_lpa, monthly_from_optional_lpa, total_deductions,
};
use salary_core::interpret::optional_row_visible;
use salary_core::{
    BreakdownResult, Deductions, DisplayPlan, EchoedIdentity, MismatchResult, MonthlyBreakdown,
    RequestState, ResearchFindings, ResultView, SalaryResult, interpret,
};

/// Width of the label column in key/value rows.
const LABEL_WIDTH: usize = 30;

pub const LOADING_TEXT: &str = "Calculating...";

pub const IN_HAND_FOOTNOTE: &str =
    "* Based on Base Salary only. Stock components and bonuses are paid separately.";

/// Renders whatever the request state currently holds.
pub fn render_state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => format!("{LOADING_TEXT}\n"),
        RequestState::Failed(message) => render_error(message),
        RequestState::Succeeded(result) => render_result(result),
    }
}

pub fn render_error(message: &str) -> String {
    format!("❌ {message}\n")
}

pub fn render_result(result: &SalaryResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_result(&mut out, result);
    out
}

fn write_result(
    out: &mut String,
    result: &SalaryResult,
) -> fmt::Result {
    let plan = interpret(result);
    match (ResultView::from(result), plan) {
        (ResultView::Mismatch(mismatch), _) => write_mismatch(out, mismatch),
        (ResultView::Breakdown(breakdown), plan) => write_breakdown(out, breakdown, plan),
    }
}

fn write_mismatch(
    out: &mut String,
    mismatch: &MismatchResult,
) -> fmt::Result {
    writeln!(out, "⚠️  Reality Check Failed")?;
    write_identity(out, &mismatch.identity, "CTC")?;
    writeln!(out)?;
    writeln!(out, "{}", mismatch.analysis)
}

fn write_breakdown(
    out: &mut String,
    breakdown: &BreakdownResult,
    plan: DisplayPlan,
) -> fmt::Result {
    writeln!(out, "💼 Compensation Research")?;
    write_identity(out, &breakdown.identity, "Total CTC")?;

    if let (true, Some(research)) = (plan.shows_research(), &breakdown.research_findings) {
        writeln!(out)?;
        write_research(out, research)?;

        // Gross cash belongs to the research panel and needs both blocks.
        if let (true, Some(monthly)) = (plan.shows_monthly(), &breakdown.monthly_breakdown) {
            writeln!(out)?;
            write_gross(out, monthly)?;
        }
    }

    if let (true, Some(monthly)) = (plan.shows_monthly(), &breakdown.monthly_breakdown) {
        writeln!(out)?;
        write_monthly(out, monthly)?;
    }

    if let (true, Some(notes)) = (plan.shows_notes(), &breakdown.notes) {
        writeln!(out)?;
        writeln!(out, "📝 {}", notes.trim())?;
    }

    Ok(())
}

fn write_identity(
    out: &mut String,
    identity: &EchoedIdentity,
    ctc_label: &str,
) -> fmt::Result {
    write_row(out, "Company:", &identity.company)?;
    write_row(out, "Position:", &identity.position)?;
    write_row(out, &format!("{ctc_label}:"), &identity.ctc)?;
    write_row(out, "Location:", &identity.location)
}

fn write_research(
    out: &mut String,
    research: &ResearchFindings,
) -> fmt::Result {
    writeln!(out, "🔍 Research Findings")?;
    if !research.company_policy.trim().is_empty() {
        writeln!(out, "{}", research.company_policy.trim())?;
    }
    write_lpa_row(out, "Estimated Base Salary (Cash)", research.estimated_base_salary, "")?;
    write_lpa_row(
        out,
        "Stock Component (RSU)",
        research.estimated_stock_component,
        " (vested annually)",
    )?;
    write_lpa_row(out, "Year-end Bonus", research.estimated_bonus, "")
}

fn write_lpa_row(
    out: &mut String,
    label: &str,
    lpa: Option<Decimal>,
    suffix: &str,
) -> fmt::Result {
    let monthly = format_inr(Some(monthly_from_optional_lpa(lpa)));
    writeln!(
        out,
        "  {label:<LABEL_WIDTH$}{monthly}/month  ({}{suffix})",
        format_lpa(lpa)
    )
}

fn write_gross(
    out: &mut String,
    monthly: &MonthlyBreakdown,
) -> fmt::Result {
    writeln!(out, "💵 Monthly Cash Breakdown")?;
    write_row(
        out,
        "Gross Monthly Cash:",
        &format_inr(monthly.gross_monthly_cash),
    )
}

fn write_monthly(
    out: &mut String,
    monthly: &MonthlyBreakdown,
) -> fmt::Result {
    let empty = Deductions::default();
    let deductions = monthly.deductions.as_ref().unwrap_or(&empty);
    write_deductions(out, deductions)?;
    writeln!(out)?;

    writeln!(
        out,
        "✨ Final Monthly In-Hand Salary: {}",
        format_inr(monthly.final_in_hand_salary)
    )?;
    writeln!(out, "{IN_HAND_FOOTNOTE}")
}

fn write_deductions(
    out: &mut String,
    deductions: &Deductions,
) -> fmt::Result {
    writeln!(out, "📉 Monthly Deductions")?;
    write_row(out, "PF (Provident Fund)", &format_inr(deductions.pf))?;
    write_row(out, "Tax (TDS - Monthly)", &format_inr(deductions.tax_monthly))?;
    write_row(out, "Professional Tax", &format_inr(deductions.professional_tax))?;
    if optional_row_visible(deductions.esi) {
        write_row(out, "ESI", &format_inr(deductions.esi))?;
    }
    if optional_row_visible(deductions.other_deductions) {
        write_row(out, "Other Deductions", &format_inr(deductions.other_deductions))?;
    }
    write_row(
        out,
        "Total Deductions",
        &format_inr(Some(total_deductions(deductions))),
    )
}

fn write_row(
    out: &mut String,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(out, "  {label:<LABEL_WIDTH$}{value}")
}
