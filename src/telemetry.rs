use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize structured logging for the CLI.
///
/// JSON lines with span context, filtered by RUST_LOG (default info). Good
/// enough for a single-process tool; there is no collector to export to.
pub fn init_telemetry() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Inspection desk telemetry initialized with structured logging");
    Ok(())
}

/// Generate a correlation ID for linking a verify action to its refresh
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    tracing::info!("Inspection desk telemetry shutdown complete");
}
