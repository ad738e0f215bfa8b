//! The first-stage verify action.
//!
//! Pessimistic call-then-refresh: the update is sent to the backend first,
//! and on success the full contract+inspection set is re-fetched. Nothing is
//! patched locally, and any failure leaves all state untouched. Two
//! inspectors acting concurrently race last-write-wins; the backend offers no
//! conflict detection and the human-paced domain does not need one.

use chrono::Utc;
use statig::prelude::*;
use thiserror::Error;
use tracing::Instrument;

use crate::api::{ApiError, DealerApi, InspectionUpdate};
use crate::notify::WorkflowNotification;
use crate::observability::create_workflow_span;
use crate::telemetry::generate_correlation_id;
use crate::workflow::classifier::ClassifiedContract;
use crate::workflow::state_machine::{InspectionEvent, InspectionStateMachine};
use crate::workflow::status::{Role, WorkflowStatus};
use crate::workflow::worklist::WorklistService;

/// Why a verify action was refused. Every variant leaves the backend
/// unmodified.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("no purchase contract with id {contract_id} was found")]
    UnknownContract { contract_id: String },

    #[error("no inspection exists for contract {contract_id}; start the inspection before verifying")]
    MissingInspection { contract_id: String },

    #[error("role {role} cannot verify the first inspection stage")]
    RoleNotAllowed { role: Role },

    #[error("contract {contract_id} is in state {status}; verify requires rama_pending")]
    WrongState {
        contract_id: String,
        status: WorkflowStatus,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl VerifyError {
    /// Message for the user-facing alert, preferring what the server said.
    pub fn user_message(&self) -> String {
        match self {
            VerifyError::Api(api) => api
                .server_message()
                .map(String::from)
                .unwrap_or_else(|| api.to_string()),
            other => other.to_string(),
        }
    }
}

/// Result of a successful verify: the transition that happened plus the
/// refreshed worklist data.
#[derive(Debug)]
pub struct VerifyOutcome {
    pub contract_id: String,
    pub workflow_status: WorkflowStatus,
    pub refreshed: Vec<ClassifiedContract>,
}

impl<C: DealerApi> WorklistService<C> {
    /// Advance a contract's inspection from `rama_pending` to
    /// `rama_completed` on behalf of the registration role.
    pub async fn verify(
        &self,
        contract_id: &str,
        role: Role,
    ) -> Result<VerifyOutcome, VerifyError> {
        let correlation_id = generate_correlation_id();
        let span = create_workflow_span("verify_inspection", contract_id, &correlation_id);
        self.verify_inner(contract_id, role, &correlation_id)
            .instrument(span)
            .await
    }

    async fn verify_inner(
        &self,
        contract_id: &str,
        role: Role,
        correlation_id: &str,
    ) -> Result<VerifyOutcome, VerifyError> {
        // Strict fetches here: unlike the worklist view, the verify action
        // must not mistake a fetch failure for a missing inspection.
        let contracts = self.client().fetch_contracts().await?;
        let inspections = self.client().fetch_inspections().await?;

        let contract = contracts
            .iter()
            .filter(|contract| contract.is_purchase())
            .find(|contract| contract.id.matches_str(contract_id))
            .ok_or_else(|| VerifyError::UnknownContract {
                contract_id: contract_id.to_string(),
            })?;

        let inspection = crate::workflow::classifier::find_inspection(contract, &inspections)
            .ok_or_else(|| VerifyError::MissingInspection {
                contract_id: contract_id.to_string(),
            })?;

        if role != Role::Registration {
            return Err(VerifyError::RoleNotAllowed { role });
        }

        let current = WorkflowStatus::parse_or_default(inspection.workflow_status.as_deref());
        if !current.is_first_stage_pending() {
            return Err(VerifyError::WrongState {
                contract_id: contract_id.to_string(),
                status: current,
            });
        }

        let mut machine =
            InspectionStateMachine::new(contract.id.normalized(), true).state_machine();
        machine.handle(&InspectionEvent::Verify { role });
        if !machine.is_first_stage_complete() {
            return Err(VerifyError::WrongState {
                contract_id: contract_id.to_string(),
                status: machine.workflow_status(),
            });
        }
        let new_status = machine.workflow_status();

        let update = InspectionUpdate {
            workflow_status: new_status.to_string(),
            status: "completed".to_string(),
        };
        self.client().update_inspection(&inspection.id, &update).await?;

        self.publisher().publish(&WorkflowNotification {
            contract_id: contract.id.normalized(),
            workflow_status: new_status,
            message: "First inspection stage verified".to_string(),
            correlation_id: correlation_id.to_string(),
            at: Utc::now(),
        });

        // Call-then-refresh: re-derive everything from the backend rather
        // than patching the local view. The write already landed, so a
        // refresh failure degrades to an empty view instead of failing
        // the action.
        let refreshed = self.fetch_classified().await;

        Ok(VerifyOutcome {
            contract_id: contract.id.normalized(),
            workflow_status: new_status,
            refreshed,
        })
    }
}
