mod form_input;
pub mod lenient;
mod request_state;
mod salary_result;

pub use form_input::{FormField, FormInput, SalaryRequest, ValidationError};
pub use request_state::RequestState;
pub use salary_result::{
    BreakdownResult, Deductions, EchoedIdentity, MISMATCH_STATUS, MismatchResult,
    MonthlyBreakdown, ResearchFindings, SalaryResult,
};
