use anyhow::Result;

use super::{resolve_role, with_service, Command};
use crate::observability::OperationTimer;
use crate::workflow::{ClassifiedContract, Role, WorkflowStatus, WorklistFilter};

pub struct WorklistCommand {
    pub role: Option<Role>,
    pub filter: WorklistFilter,
}

impl Command for WorklistCommand {
    async fn execute(&self) -> Result<()> {
        let role = resolve_role(self.role)?;
        let filter = self.filter;

        let timer = OperationTimer::new("worklist");
        let entries = with_service(|service| async move {
            Ok(service.worklist(role, filter).await)
        })
        .await?;
        timer.finish();

        print_worklist(role, filter, &entries);
        Ok(())
    }
}

fn print_worklist(role: Role, filter: WorklistFilter, entries: &[ClassifiedContract]) {
    println!("📋 Worklist for {role} ({filter})");
    println!();

    if entries.is_empty() {
        println!("   Nothing here - the worklist is empty.");
        return;
    }

    for entry in entries {
        let contract = &entry.contract;
        let icon = status_icon(entry.workflow_status);
        let number = contract.contract_number.as_deref().unwrap_or("-");
        let moto = contract
            .motorcycle_id
            .as_ref()
            .map(|id| id.normalized())
            .unwrap_or_else(|| "-".to_string());
        let amount = match (contract.amount, contract.currency.as_deref()) {
            (Some(amount), Some(currency)) => format!("{amount} {currency}"),
            (Some(amount), None) => amount.to_string(),
            _ => "-".to_string(),
        };
        let date = contract.date.as_deref().unwrap_or("-");
        let action = if entry.can_verify(role) { "  ← verify" } else { "" };

        println!(
            "  {icon} {} [{number}] moto {moto} | {amount} | {date} | {}{action}",
            contract.id,
            entry.workflow_status,
        );
    }

    println!();
    println!("   {} contract(s) listed.", entries.len());
}

fn status_icon(status: WorkflowStatus) -> &'static str {
    match status {
        WorkflowStatus::RamaPending => "🟡",
        WorkflowStatus::RamaCompleted | WorkflowStatus::GidioniPending => "🔵",
        WorkflowStatus::GidioniCompleted | WorkflowStatus::Completed => "🟢",
    }
}
