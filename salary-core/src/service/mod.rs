pub mod client;
pub mod factory;

pub use client::{SalaryService, ServiceError};
pub use factory::{
    DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, SALARY_PATH, ServiceConfig, ServiceFactory,
    ServiceRegistry,
};
