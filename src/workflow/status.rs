// Core types for the inspection workflow

use serde::{Deserialize, Serialize};

/// Progress marker of an inspection through its two-stage review.
///
/// The first stage (RAMA) is verified by the registration role; the second
/// stage (GIDIONI) is completed externally through the inspection form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Initial state; also implied when no inspection record exists
    #[default]
    RamaPending,
    /// First-stage inspector marked their section complete
    RamaCompleted,
    /// Ready for second-stage inspection (equivalent to RamaCompleted for filtering)
    GidioniPending,
    /// Second-stage section complete
    GidioniCompleted,
    /// Terminal state (equivalent to GidioniCompleted for "done" filtering)
    Completed,
}

impl WorkflowStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::RamaPending => "rama_pending",
            WorkflowStatus::RamaCompleted => "rama_completed",
            WorkflowStatus::GidioniPending => "gidioni_pending",
            WorkflowStatus::GidioniCompleted => "gidioni_completed",
            WorkflowStatus::Completed => "completed",
        }
    }

    /// Lenient parse: absent or unknown values map to the initial state.
    /// The classifier must never fail on malformed input.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("rama_pending") => WorkflowStatus::RamaPending,
            Some("rama_completed") => WorkflowStatus::RamaCompleted,
            Some("gidioni_pending") => WorkflowStatus::GidioniPending,
            Some("gidioni_completed") => WorkflowStatus::GidioniCompleted,
            Some("completed") => WorkflowStatus::Completed,
            _ => WorkflowStatus::default(),
        }
    }

    /// True while the first-stage (registration) verify action is applicable.
    pub fn is_first_stage_pending(&self) -> bool {
        matches!(self, WorkflowStatus::RamaPending)
    }

    /// True once the contract is ready for the second-stage inspector.
    pub fn is_second_stage_ready(&self) -> bool {
        matches!(
            self,
            WorkflowStatus::RamaCompleted | WorkflowStatus::GidioniPending
        )
    }

    /// True once both review stages are behind us.
    pub fn is_done(&self) -> bool {
        matches!(
            self,
            WorkflowStatus::GidioniCompleted | WorkflowStatus::Completed
        )
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inspector roles acting on the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// First-stage (RAMA) inspector
    Registration,
    /// Second-stage (GIDIONI) inspector
    Transport,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Registration => "registration",
            Role::Transport => "transport",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worklist view selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WorklistFilter {
    /// Contracts the role still has to act on
    #[default]
    Pending,
    /// Contracts the role is finished with
    Completed,
    /// Everything, unfiltered
    All,
}

impl WorklistFilter {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WorklistFilter::Pending => "pending",
            WorklistFilter::Completed => "completed",
            WorklistFilter::All => "all",
        }
    }
}

impl std::fmt::Display for WorklistFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
