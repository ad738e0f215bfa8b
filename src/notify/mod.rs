//! Workflow notifications as an explicit publish/subscribe seam.
//!
//! The original system pushed these through a globally registered callback;
//! here sinks are injected into the service so there is no global mutable
//! state and tests can observe exactly what was published.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::workflow::status::WorkflowStatus;

/// Event published when a contract's workflow advances.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowNotification {
    pub contract_id: String,
    pub workflow_status: WorkflowStatus,
    pub message: String,
    pub correlation_id: String,
    pub at: DateTime<Utc>,
}

/// Receives workflow notifications. Implementations must be cheap; publish is
/// called inline on the action path.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: &WorkflowNotification);
}

/// Fans one notification out to every subscribed sink.
#[derive(Default, Clone)]
pub struct Publisher {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl Publisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn publish(&self, notification: &WorkflowNotification) {
        for sink in &self.sinks {
            sink.publish(notification);
        }
    }
}

/// Sink that emits notifications as structured log events.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn publish(&self, notification: &WorkflowNotification) {
        tracing::info!(
            contract_id = %notification.contract_id,
            workflow_status = %notification.workflow_status,
            correlation_id = %notification.correlation_id,
            "{}",
            notification.message
        );
    }
}

/// Sink that records everything it receives, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<WorkflowNotification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<WorkflowNotification> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl NotificationSink for RecordingSink {
    fn publish(&self, notification: &WorkflowNotification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkflowNotification {
        WorkflowNotification {
            contract_id: "C1".to_string(),
            workflow_status: WorkflowStatus::RamaCompleted,
            message: "First inspection stage verified".to_string(),
            correlation_id: "test".to_string(),
            at: Utc::now(),
        }
    }

    #[test]
    fn test_publisher_fans_out_to_all_sinks() {
        let first = Arc::new(RecordingSink::new());
        let second = Arc::new(RecordingSink::new());

        let mut publisher = Publisher::new();
        publisher.subscribe(first.clone());
        publisher.subscribe(second.clone());
        publisher.publish(&sample());

        assert_eq!(first.received().len(), 1);
        assert_eq!(second.received().len(), 1);
        assert_eq!(first.received()[0].contract_id, "C1");
    }

    #[test]
    fn test_publisher_without_sinks_is_a_noop() {
        let publisher = Publisher::new();
        publisher.publish(&sample());
    }
}
