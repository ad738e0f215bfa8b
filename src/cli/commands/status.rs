use anyhow::Result;

use super::{resolve_role, with_service, Command};
use crate::observability::api_metrics;
use crate::workflow::Role;

pub struct StatusCommand {
    pub role: Option<Role>,
}

impl Command for StatusCommand {
    async fn execute(&self) -> Result<()> {
        let role = resolve_role(self.role)?;

        let summary = with_service(|service| async move {
            Ok(service.status_summary(role).await)
        })
        .await?;

        println!("📊 INSPECTION WORKFLOW STATUS (as {role})");
        println!();
        println!("   Purchase contracts:      {}", summary.total);
        println!("   🟡 First stage pending:  {}", summary.first_stage_pending);
        println!("   🔵 Second stage ready:   {}", summary.second_stage_ready);
        println!("   🟢 Done:                 {}", summary.done);
        println!("   ⚠️  No inspection yet:    {}", summary.missing_inspection);
        println!();
        println!("   👉 Need your action:     {}", summary.actionable);

        api_metrics().log_stats();
        Ok(())
    }
}
