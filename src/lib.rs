// Inspection Desk Library - Dealership Inspection Workflow Coordination
// This exposes the core components for testing and integration

pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod notify;
pub mod observability;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use api::{ApiError, Contract, DealerApi, DealerClient, EntityId, Inspection, InspectionUpdate};
pub use config::{config, init_config, InspectionDeskConfig};
pub use http::RateLimitedHttpClient;
pub use notify::{NotificationSink, Publisher, RecordingSink, TracingSink, WorkflowNotification};
pub use observability::{api_metrics, create_workflow_span, ApiMetrics, OperationTimer};
pub use telemetry::{generate_correlation_id, init_telemetry, shutdown_telemetry};
pub use workflow::{
    classify, classify_all, find_inspection, ClassifiedContract, InspectionEvent,
    InspectionStateMachine, Role, StatusSummary, VerifyError, VerifyOutcome, WorkflowStatus,
    WorklistFilter, WorklistService,
};
