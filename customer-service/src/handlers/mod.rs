pub mod customers;
pub mod health;

pub use customers::{create_customer, get_customer, list_customers};
pub use health::{health_check, metrics_endpoint, readiness_check};
