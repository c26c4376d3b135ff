pub mod calculations;
pub mod controller;
pub mod interpret;
pub mod models;
pub mod service;

pub use controller::{PendingRequest, RequestController, RequestId, classify_error};
pub use interpret::{DisplayPlan, ResultView, interpret};
pub use models::*;
pub use service::{SalaryService, ServiceConfig, ServiceError};
