use tracing::error;

use crate::api::DealerApi;
use crate::notify::Publisher;
use crate::workflow::classifier::{classify_all, ClassifiedContract};
use crate::workflow::status::{Role, WorkflowStatus, WorklistFilter};

/// Fetches the contract and inspection collections, joins them, and serves
/// role-specific worklists.
///
/// List fetches are lenient: a failed fetch is logged and replaced by an
/// empty collection, so the worklist degrades to an empty view instead of
/// failing the whole screen.
pub struct WorklistService<C> {
    client: C,
    publisher: Publisher,
}

/// Counts of purchase contracts per derived workflow stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub first_stage_pending: usize,
    pub second_stage_ready: usize,
    pub done: usize,
    pub missing_inspection: usize,
    /// Contracts the given role can act on right now.
    pub actionable: usize,
}

impl<C: DealerApi> WorklistService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            publisher: Publisher::new(),
        }
    }

    pub fn with_publisher(client: C, publisher: Publisher) -> Self {
        Self { client, publisher }
    }

    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    pub(crate) fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Fetch both collections and classify every purchase contract.
    pub async fn fetch_classified(&self) -> Vec<ClassifiedContract> {
        let contracts = match self.client.fetch_contracts().await {
            Ok(contracts) => contracts,
            Err(e) => {
                error!(error = %e, "Failed to fetch contracts; substituting empty list");
                Vec::new()
            }
        };
        let inspections = match self.client.fetch_inspections().await {
            Ok(inspections) => inspections,
            Err(e) => {
                error!(error = %e, "Failed to fetch inspections; substituting empty list");
                Vec::new()
            }
        };

        classify_all(&contracts, &inspections)
    }

    /// Role-specific worklist for the given view filter.
    pub async fn worklist(
        &self,
        role: Role,
        filter: WorklistFilter,
    ) -> Vec<ClassifiedContract> {
        let mut classified = self.fetch_classified().await;
        classified.retain(|entry| entry.matches_filter(role, filter));
        classified
    }

    /// Counts per workflow stage plus how many contracts the role can act on.
    pub async fn status_summary(&self, role: Role) -> StatusSummary {
        let classified = self.fetch_classified().await;
        summarize(&classified, role)
    }
}

pub fn summarize(classified: &[ClassifiedContract], role: Role) -> StatusSummary {
    let mut summary = StatusSummary {
        total: classified.len(),
        first_stage_pending: 0,
        second_stage_ready: 0,
        done: 0,
        missing_inspection: 0,
        actionable: 0,
    };

    for entry in classified {
        match entry.workflow_status {
            WorkflowStatus::RamaPending => summary.first_stage_pending += 1,
            WorkflowStatus::RamaCompleted | WorkflowStatus::GidioniPending => {
                summary.second_stage_ready += 1
            }
            WorkflowStatus::GidioniCompleted | WorkflowStatus::Completed => summary.done += 1,
        }
        if !entry.has_inspection() {
            summary.missing_inspection += 1;
        }
        let actionable = match role {
            Role::Registration => entry.can_verify(role),
            // Transport acts through the inspection form, on anything ready
            // for the second stage.
            Role::Transport => entry.workflow_status.is_second_stage_ready(),
        };
        if actionable {
            summary.actionable += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::classifier::classify;
    use serde_json::json;

    fn classified(id: &str, status: Option<&str>, with_inspection: bool) -> ClassifiedContract {
        let contract = serde_json::from_value(json!({
            "id": id,
            "type": "purchase",
            "motorcycleId": "M1"
        }))
        .unwrap();
        let inspection = with_inspection.then(|| {
            serde_json::from_value(json!({
                "id": 1,
                "contractId": id,
                "workflowStatus": status,
            }))
            .unwrap()
        });
        classify(&contract, inspection.as_ref())
    }

    #[test]
    fn test_summary_counts_stages() {
        let entries = vec![
            classified("C1", None, false),
            classified("C2", Some("rama_pending"), true),
            classified("C3", Some("rama_completed"), true),
            classified("C4", Some("gidioni_pending"), true),
            classified("C5", Some("completed"), true),
        ];

        let summary = summarize(&entries, Role::Registration);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.first_stage_pending, 2);
        assert_eq!(summary.second_stage_ready, 2);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.missing_inspection, 1);
        // Only C2 has an inspection in rama_pending
        assert_eq!(summary.actionable, 1);
    }

    #[test]
    fn test_summary_actionable_for_transport() {
        let entries = vec![
            classified("C1", Some("rama_completed"), true),
            classified("C2", Some("gidioni_pending"), true),
            classified("C3", Some("rama_pending"), true),
        ];

        let summary = summarize(&entries, Role::Transport);
        assert_eq!(summary.actionable, 2);
    }
}
