pub mod database;
pub mod metrics;

pub use database::CustomerDb;
pub use metrics::{get_metrics, init_metrics};
