use super::SalaryResult;

/// Lifecycle of one calculator submission.
///
/// Exactly one variant holds at a time. A result and an error message are
/// never held together; each transition replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(SalaryResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn result(&self) -> Option<&SalaryResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakdownResult, SalaryResult};

    #[test]
    fn default_is_idle() {
        assert_eq!(RequestState::default(), RequestState::Idle);
    }

    #[test]
    fn accessors_only_expose_their_own_variant() {
        let ok = RequestState::Succeeded(SalaryResult::Breakdown(BreakdownResult::default()));
        let failed = RequestState::Failed("boom".to_string());

        assert!(ok.result().is_some());
        assert!(ok.error_message().is_none());
        assert!(failed.result().is_none());
        assert_eq!(failed.error_message(), Some("boom"));
        assert!(RequestState::Loading.is_loading());
        assert!(!failed.is_loading());
    }
}
