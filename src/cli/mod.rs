use clap::{Parser, Subcommand};

use crate::workflow::{Role, WorklistFilter};

pub mod commands;

#[derive(Parser)]
#[command(name = "inspection-desk")]
#[command(about = "Two-stage inspection workflow desk for dealership purchase contracts")]
#[command(long_about = "Inspection Desk derives the inspection workflow status of purchase \
                       contracts from the dealership backend and builds role-specific \
                       worklists. Registration inspectors verify the first (RAMA) stage with \
                       'inspection-desk verify'; the second (GIDIONI) stage is completed \
                       through the inspection form itself.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the worklist for a role (pending, completed, or all contracts)
    Worklist {
        /// Acting inspector role
        #[arg(long, value_enum, help = "Role whose worklist to build (registration or transport)")]
        role: Option<Role>,
        /// Which slice of the worklist to show
        #[arg(long, value_enum, default_value_t = WorklistFilter::Pending, help = "pending, completed, or all")]
        filter: WorklistFilter,
    },
    /// Verify the first inspection stage of a contract (registration role)
    Verify {
        /// Contract identifier as shown in the worklist
        contract_id: String,
        /// Acting inspector role
        #[arg(long, value_enum, help = "Role performing the verification")]
        role: Option<Role>,
    },
    /// Display workflow stage counts and how many contracts need your action
    Status {
        /// Acting inspector role
        #[arg(long, value_enum, help = "Role the actionable count is computed for")]
        role: Option<Role>,
    },
}
