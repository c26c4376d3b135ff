//! HTTP transport for the salary service.

mod client;
mod factory;

pub use client::HttpSalaryService;
pub use factory::HttpServiceFactory;
