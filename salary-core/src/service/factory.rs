use std::collections::HashMap;

use async_trait::async_trait;

use super::client::{SalaryService, ServiceError};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Path of the calculation endpoint, relative to the base URL.
pub const SALARY_PATH: &str = "/api/salary";

/// Seconds to wait for the service before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Backend-agnostic service configuration.
///
/// `backend` must match the [`ServiceFactory::backend_name`] of a
/// registered factory.
///
/// | backend | base_url examples                               |
/// |---------|-------------------------------------------------|
/// | `http`  | `http://localhost:5000`, `https://salary.example` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"http"`).
    pub backend: String,
    /// Root of the salary API; `/api/salary` is appended to it.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Full URL of the calculation endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.normalized_base_url(), SALARY_PATH)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: "http".to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// One implementation per transport. Each backend crate exports a unit
/// struct that implements this trait and is registered with a
/// [`ServiceRegistry`] at startup.
#[async_trait]
pub trait ServiceFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use service client.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn SalaryService>, ServiceError>;
}

/// Registry of [`ServiceFactory`] instances, keyed by backend name.
///
/// Typical lifetime:
/// 1. Create with `ServiceRegistry::new()`.
/// 2. Call `register` once per known backend.
/// 3. Call `create` whenever a client is needed.
pub struct ServiceRegistry {
    factories: HashMap<&'static str, Box<dyn ServiceFactory>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn ServiceFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`ServiceError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn SalaryService>, ServiceError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                ServiceError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        tracing::debug!(backend = factory.backend_name(), url = %config.endpoint(), "creating salary service");
        factory.create(config).await
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
