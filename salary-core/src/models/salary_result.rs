use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Discriminator value that selects [`SalaryResult::Mismatch`].
pub const MISMATCH_STATUS: &str = "mismatch";

/// A successful response from the salary service.
///
/// The wire format is a single object whose `status` field decides the
/// shape: `"mismatch"` means the service rejected the CTC as implausible for
/// the role; any other value (or none) carries a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSalaryResult", into = "RawSalaryResult")]
pub enum SalaryResult {
    Mismatch(MismatchResult),
    Breakdown(BreakdownResult),
}

impl SalaryResult {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }

    /// The identity fields echoed back by the service.
    pub fn identity(&self) -> &EchoedIdentity {
        match self {
            Self::Mismatch(m) => &m.identity,
            Self::Breakdown(b) => &b.identity,
        }
    }
}

/// Company / position / CTC / location as echoed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoedIdentity {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ctc: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
}

/// "Reality check failed": the quoted CTC does not fit the role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MismatchResult {
    pub identity: EchoedIdentity,
    pub analysis: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakdownResult {
    /// Raw `status` text, kept so the payload can be echoed unchanged.
    pub status: Option<String>,
    pub identity: EchoedIdentity,
    pub research_findings: Option<ResearchFindings>,
    pub monthly_breakdown: Option<MonthlyBreakdown>,
    pub notes: Option<String>,
}

/// What the service learned about the employer's pay structure.
/// Figures are in LPA (lakhs per annum).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchFindings {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_policy: String,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub estimated_base_salary: Option<Decimal>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub estimated_stock_component: Option<Decimal>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub estimated_bonus: Option<Decimal>,
}

/// Monthly rupee figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub gross_monthly_cash: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductions: Option<Deductions>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub final_in_hand_salary: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub pf: Option<Decimal>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub tax_monthly: Option<Decimal>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub professional_tax: Option<Decimal>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub esi: Option<Decimal>,
    #[serde(default, with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub other_deductions: Option<Decimal>,
}

// ─── wire shape ──────────────────────────────────────────────────────────────

/// Flat wire representation; every variant-specific key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSalaryResult {
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    status: Option<String>,
    #[serde(flatten)]
    identity: EchoedIdentity,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    research_findings: Option<ResearchFindings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    monthly_breakdown: Option<MonthlyBreakdown>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    notes: Option<String>,
}

impl From<RawSalaryResult> for SalaryResult {
    fn from(raw: RawSalaryResult) -> Self {
        if raw.status.as_deref() == Some(MISMATCH_STATUS) {
            // Breakdown keys riding along with a mismatch are dropped here.
            return Self::Mismatch(MismatchResult {
                identity: raw.identity,
                analysis: raw.analysis.unwrap_or_default(),
            });
        }

        Self::Breakdown(BreakdownResult {
            status: raw.status,
            identity: raw.identity,
            research_findings: raw.research_findings,
            monthly_breakdown: raw.monthly_breakdown,
            notes: raw.notes,
        })
    }
}

impl From<SalaryResult> for RawSalaryResult {
    fn from(result: SalaryResult) -> Self {
        match result {
            SalaryResult::Mismatch(m) => Self {
                status: Some(MISMATCH_STATUS.to_string()),
                identity: m.identity,
                analysis: Some(m.analysis),
                ..Default::default()
            },
            SalaryResult::Breakdown(b) => Self {
                status: b.status,
                identity: b.identity,
                analysis: None,
                research_findings: b.research_findings,
                monthly_breakdown: b.monthly_breakdown,
                notes: b.notes,
            },
        }
    }
}
