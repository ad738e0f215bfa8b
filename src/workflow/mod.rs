pub mod classifier;
pub mod state_machine;
pub mod status;
pub mod verify;
pub mod worklist;

pub use classifier::{classify, classify_all, find_inspection, ClassifiedContract};
pub use state_machine::{InspectionEvent, InspectionStateMachine};
pub use status::{Role, WorkflowStatus, WorklistFilter};
pub use verify::{VerifyError, VerifyOutcome};
pub use worklist::{summarize, StatusSummary, WorklistService};
