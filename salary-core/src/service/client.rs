use async_trait::async_trait;
use thiserror::Error;

use crate::models::{SalaryRequest, SalaryResult};

/// Failure of a single call to the salary service.
///
/// `Display` is the error's own message text, the second tier of the
/// classification in [`crate::controller::classify_error`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No response reached us: connection refused, DNS failure, reset.
    #[error("Network Error: {0}")]
    Connectivity(String),

    /// The service answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// The `error` field of the response body, when it had one.
        body_error: Option<String>,
    },

    #[error("timeout of {0}s exceeded")]
    Timeout(u64),

    /// A response arrived but could not be read or decoded.
    #[error("{0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    /// True when the service was never reached.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }

    /// The structured `error` text from the response body, if any.
    pub fn body_error(&self) -> Option<&str> {
        match self {
            Self::Status { body_error, .. } => body_error.as_deref(),
            _ => None,
        }
    }
}

/// The remote salary calculator.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait SalaryService: Send + Sync {
    async fn calculate(
        &self,
        request: &SalaryRequest,
    ) -> Result<SalaryResult, ServiceError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_error_message_names_the_code() {
        let err = ServiceError::Status {
            status: 502,
            body_error: None,
        };

        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn body_error_only_comes_from_status_errors() {
        let with_body = ServiceError::Status {
            status: 400,
            body_error: Some("Invalid CTC format".to_string()),
        };

        assert_eq!(with_body.body_error(), Some("Invalid CTC format"));
        assert_eq!(ServiceError::Decode("bad json".to_string()).body_error(), None);
    }

    #[test]
    fn only_connectivity_is_connectivity() {
        assert!(ServiceError::Connectivity("refused".to_string()).is_connectivity());
        assert!(!ServiceError::Timeout(30).is_connectivity());
    }
}
