use async_trait::async_trait;

use salary_core::service::{SalaryService, ServiceConfig, ServiceError, ServiceFactory};

use crate::client::HttpSalaryService;

/// [`ServiceFactory`] for the HTTP salary API.
///
/// Register this with a [`salary_core::service::ServiceRegistry`] to make the
/// `"http"` backend available:
///
/// ```rust,no_run
/// use salary_core::service::ServiceRegistry;
/// use salary_http::HttpServiceFactory;
///
/// let mut registry = ServiceRegistry::new();
/// registry.register(Box::new(HttpServiceFactory));
/// ```
pub struct HttpServiceFactory;

#[async_trait]
impl ServiceFactory for HttpServiceFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    /// Build a client for `config.base_url`.
    ///
    /// No request is sent here; an unreachable service only shows up on
    /// the first calculation.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn SalaryService>, ServiceError> {
        let service = HttpSalaryService::new(config)?;
        Ok(Box::new(service))
    }
}
