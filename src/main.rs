use anyhow::Result;
use clap::Parser;

use inspection_desk::cli::commands::{
    show_overview, status::StatusCommand, verify::VerifyCommand, worklist::WorklistCommand,
    Command,
};
use inspection_desk::cli::{Cli, Commands};
use inspection_desk::config::{init_config, InspectionDeskConfig};
use inspection_desk::telemetry::{init_telemetry, shutdown_telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    InspectionDeskConfig::load_env_file()?;
    init_telemetry()?;
    init_config()?;

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Worklist { role, filter }) => {
            WorklistCommand { role, filter }.execute().await
        }
        Some(Commands::Verify { contract_id, role }) => {
            VerifyCommand { contract_id, role }.execute().await
        }
        Some(Commands::Status { role }) => StatusCommand { role }.execute().await,
        None => show_overview().await,
    };

    shutdown_telemetry();
    result
}
