//! Derives workflow state for contracts by cross-referencing the contracts
//! and inspections collections.
//!
//! The backend returns the two collections separately and does not join them,
//! so matching happens here, with identifiers normalized to strings on both
//! sides (the same id can arrive as `"42"` in one collection and `42` in the
//! other).

use crate::api::types::{Contract, Inspection};
use crate::workflow::status::{Role, WorkflowStatus, WorklistFilter};

/// A contract joined with its (optional) inspection and the derived status.
#[derive(Debug, Clone)]
pub struct ClassifiedContract {
    pub contract: Contract,
    pub inspection: Option<Inspection>,
    pub workflow_status: WorkflowStatus,
}

impl ClassifiedContract {
    pub fn has_inspection(&self) -> bool {
        self.inspection.is_some()
    }

    /// Whether the given role may run the verify action on this contract.
    ///
    /// The verify action needs an existing inspection record; a contract
    /// without one is in `rama_pending` but must first go through the
    /// start-inspection flow.
    pub fn can_verify(&self, role: Role) -> bool {
        role == Role::Registration
            && self.has_inspection()
            && self.workflow_status.is_first_stage_pending()
    }

    /// Role-specific worklist membership.
    pub fn matches_filter(&self, role: Role, filter: WorklistFilter) -> bool {
        match (role, filter) {
            (_, WorklistFilter::All) => true,
            (Role::Registration, WorklistFilter::Pending) => {
                self.workflow_status.is_first_stage_pending()
            }
            (Role::Registration, WorklistFilter::Completed) => {
                self.workflow_status == WorkflowStatus::RamaCompleted
            }
            (Role::Transport, WorklistFilter::Pending) => {
                self.workflow_status.is_second_stage_ready()
            }
            (Role::Transport, WorklistFilter::Completed) => self.workflow_status.is_done(),
        }
    }
}

/// Find the inspection attached to a contract, tolerating identifier
/// representation mismatches.
pub fn find_inspection<'a>(
    contract: &Contract,
    inspections: &'a [Inspection],
) -> Option<&'a Inspection> {
    inspections
        .iter()
        .find(|inspection| inspection.contract_id.matches(&contract.id))
}

/// Classify one contract. Never fails: malformed or unknown workflow status
/// values fall back to the initial state.
pub fn classify(contract: &Contract, inspection: Option<&Inspection>) -> ClassifiedContract {
    let workflow_status = match inspection {
        Some(inspection) => WorkflowStatus::parse_or_default(inspection.workflow_status.as_deref()),
        None => WorkflowStatus::RamaPending,
    };

    ClassifiedContract {
        contract: contract.clone(),
        inspection: inspection.cloned(),
        workflow_status,
    }
}

/// Join and classify all purchase contracts. Non-purchase contracts never
/// enter the inspection workflow.
pub fn classify_all(contracts: &[Contract], inspections: &[Inspection]) -> Vec<ClassifiedContract> {
    contracts
        .iter()
        .filter(|contract| contract.is_purchase())
        .map(|contract| classify(contract, find_inspection(contract, inspections)))
        .collect()
}
