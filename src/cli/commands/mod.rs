use anyhow::Result;

use crate::api::DealerClient;
use crate::config::config;
use crate::notify::{Publisher, TracingSink};
use crate::workflow::{Role, WorklistService};

pub mod status;
pub mod verify;
pub mod worklist;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Build the worklist service against the configured backend and hand it to
/// the command body.
pub async fn with_service<F, Fut, R>(f: F) -> Result<R>
where
    F: FnOnce(WorklistService<DealerClient>) -> Fut + Send,
    Fut: std::future::Future<Output = Result<R>> + Send,
    R: Send,
{
    match DealerClient::new() {
        Ok(client) => {
            let mut publisher = Publisher::new();
            publisher.subscribe(std::sync::Arc::new(TracingSink));
            f(WorklistService::with_publisher(client, publisher)).await
        }
        Err(e) => {
            println!("❌ Failed to initialize the backend client: {e}");
            Err(e.into())
        }
    }
}

/// Resolve the acting role: CLI flag wins, otherwise the configured default.
pub fn resolve_role(role: Option<Role>) -> Result<Role> {
    if let Some(role) = role {
        return Ok(role);
    }
    let cfg = config()?;
    match cfg.workflow.default_role.as_str() {
        "registration" => Ok(Role::Registration),
        "transport" => Ok(Role::Transport),
        other => Err(anyhow::anyhow!(
            "Unknown default_role '{other}' in configuration; expected registration or transport"
        )),
    }
}

pub async fn show_overview() -> Result<()> {
    println!("🏍️  Inspection Desk - Purchase Contract Inspection Workflow");
    println!();
    println!("To get started:");
    println!("  📋 inspection-desk worklist             # Contracts waiting on you");
    println!("  ✅ inspection-desk verify <contract>    # Verify the first inspection stage");
    println!("  📊 inspection-desk status               # Stage counts at a glance");
    println!();
    println!("Options:");
    println!("  --role registration|transport   Act as a specific inspector role");
    println!("  --filter pending|completed|all  Slice the worklist");
    println!();
    println!("💡 Start with 'inspection-desk worklist' to see what's pending!");
    Ok(())
}
