use anyhow::Result;

use super::{resolve_role, with_service, Command};
use crate::workflow::{summarize, Role, VerifyError};

pub struct VerifyCommand {
    pub contract_id: String,
    pub role: Option<Role>,
}

impl Command for VerifyCommand {
    async fn execute(&self) -> Result<()> {
        let role = resolve_role(self.role)?;
        let contract_id = self.contract_id.clone();

        let outcome = with_service(|service| async move {
            Ok(service.verify(&contract_id, role).await)
        })
        .await?;

        match outcome {
            Ok(outcome) => {
                println!(
                    "✅ Contract {} verified: workflow status is now {}",
                    outcome.contract_id, outcome.workflow_status
                );
                let summary = summarize(&outcome.refreshed, role);
                println!(
                    "   Refreshed: {} contract(s), {} still pending first stage.",
                    summary.total, summary.first_stage_pending
                );
                Ok(())
            }
            Err(e) => {
                // User-facing alert; nothing was mutated on the backend.
                println!("❌ Verify failed: {}", e.user_message());
                if matches!(e, VerifyError::MissingInspection { .. }) {
                    println!("   → Open the inspection form for this contract first.");
                }
                Err(e.into())
            }
        }
    }
}
