use crate::check::InputFailure;
use crate::{RunInfo, ToolInfo};
use serde::{Deserialize, Serialize};

/// Result of a `fix` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixReport {
    pub schema: String,
    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    /// False for dry runs.
    pub written: bool,

    #[serde(default)]
    pub results: Vec<FixResult>,

    #[serde(default)]
    pub units: Vec<UnitChange>,

    /// Unit files that could not be loaded and were not fixed.
    #[serde(default)]
    pub inputs_failed: Vec<InputFailure>,

    pub summary: FixSummary,
}

impl FixReport {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::FIELDFIX_FIX_V1.to_string(),
            tool,
            run: RunInfo::default(),
            written: false,
            results: vec![],
            units: vec![],
            inputs_failed: vec![],
            summary: FixSummary::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixResult {
    /// Fingerprint of the finding this result answers.
    pub fingerprint: String,
    pub path: String,
    pub field: String,
    pub status: FixStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing_field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    Applied,
    Failed,
    Skipped,
}

impl FixStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FixStatus::Applied => "applied",
            FixStatus::Failed => "failed",
            FixStatus::Skipped => "skipped",
        }
    }
}

/// Rendered-text hashes of a unit before and after fixing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitChange {
    pub path: String,
    pub sha256_before: String,
    pub sha256_after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSummary {
    pub attempted: u64,
    pub applied: u64,
    pub failed: u64,
    pub skipped: u64,
    pub units_modified: u64,
}

impl FixSummary {
    pub fn record(&mut self, status: FixStatus) {
        self.attempted += 1;
        match status {
            FixStatus::Applied => self.applied += 1,
            FixStatus::Failed => self.failed += 1,
            FixStatus::Skipped => self.skipped += 1,
        }
    }
}
