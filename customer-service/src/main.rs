use customer_service::config::CustomerConfig;
use customer_service::services::init_metrics;
use customer_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics();

    // Initialize tracing
    init_tracing("info");

    let config = CustomerConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // A store that is unreachable at startup is fatal; the process exits
    // rather than serving degraded.
    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start customer service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
