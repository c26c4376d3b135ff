use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use salary_core::{SalaryRequest, SalaryResult, SalaryService, ServiceConfig, ServiceError};

/// Calls `POST {base_url}/api/salary` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSalaryService {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
}

/// Optional body of a non-success response.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

impl HttpSalaryService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing `reqwest` client (shared pools, custom TLS).
    pub fn with_client(
        client: Client,
        config: &ServiceConfig,
    ) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
            timeout_secs: config.timeout_secs,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(
        &self,
        error: reqwest::Error,
    ) -> ServiceError {
        if error.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else if error.is_builder() {
            ServiceError::Configuration(error.to_string())
        } else if error.is_connect() || error.is_request() {
            ServiceError::Connectivity(error.to_string())
        } else {
            ServiceError::Decode(error.to_string())
        }
    }
}

/// Pulls a string `error` field out of a failure body, if there is one.
pub(crate) fn body_error(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|error| match error {
            Value::String(text) => Some(text),
            _ => None,
        })
}

#[async_trait]
impl SalaryService for HttpSalaryService {
    async fn calculate(
        &self,
        request: &SalaryRequest,
    ) -> Result<SalaryResult, ServiceError> {
        debug!(url = %self.endpoint, "posting salary request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "salary service responded");

        if !status.is_success() {
            // A body we cannot read is treated like a body without `error`.
            let body = response.bytes().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body_error: body_error(&body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}
