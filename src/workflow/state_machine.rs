use serde::{Deserialize, Serialize};
use statig::prelude::*;

use crate::workflow::status::{Role, WorkflowStatus};

/// Events acting on a contract's inspection workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionEvent {
    /// First-stage verify action. Only honored for the registration role on a
    /// contract that has an inspection record.
    Verify { role: Role },
    /// The reject affordance exists in the review UI but has never mutated
    /// workflow state; the event is accepted and deliberately inert.
    Reject { role: Role },
}

/// State machine for the first-stage verify transition.
///
/// The second inspection stage is completed externally through the inspection
/// form, so only the `rama_pending -> rama_completed` edge lives here. Invalid
/// events leave the state untouched rather than failing.
#[derive(Default)]
pub struct InspectionStateMachine {
    pub contract_id: String,
    pub has_inspection: bool,
    pub workflow_status: WorkflowStatus,
}

impl InspectionStateMachine {
    pub fn new(contract_id: String, has_inspection: bool) -> Self {
        Self {
            contract_id,
            has_inspection,
            ..Default::default()
        }
    }

    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    pub fn workflow_status(&self) -> WorkflowStatus {
        self.workflow_status
    }

    pub fn is_first_stage_complete(&self) -> bool {
        self.workflow_status == WorkflowStatus::RamaCompleted
    }
}

#[state_machine(initial = "State::rama_pending()")]
impl InspectionStateMachine {
    #[state]
    fn rama_pending(&mut self, event: &InspectionEvent) -> Outcome<State> {
        match event {
            InspectionEvent::Verify { role } => {
                if *role != Role::Registration {
                    tracing::warn!(
                        contract_id = %self.contract_id,
                        role = %role,
                        "Verify ignored: only the registration role advances the first stage"
                    );
                    return Handled;
                }
                if !self.has_inspection {
                    tracing::warn!(
                        contract_id = %self.contract_id,
                        "Verify ignored: contract has no inspection record"
                    );
                    return Handled;
                }
                self.workflow_status = WorkflowStatus::RamaCompleted;
                tracing::info!(
                    contract_id = %self.contract_id,
                    "First inspection stage verified"
                );
                Transition(State::rama_completed())
            }
            InspectionEvent::Reject { role } => {
                // Inert on purpose: the original system's reject path never
                // persisted anything, and no rejection semantics are defined.
                tracing::info!(
                    contract_id = %self.contract_id,
                    role = %role,
                    "Reject received; workflow state unchanged"
                );
                Handled
            }
        }
    }

    #[state]
    fn rama_completed(&mut self, event: &InspectionEvent) -> Outcome<State> {
        match event {
            InspectionEvent::Verify { .. } => {
                tracing::warn!(
                    contract_id = %self.contract_id,
                    "Verify ignored: first stage already complete"
                );
                Handled
            }
            InspectionEvent::Reject { .. } => Handled,
        }
    }
}
