use crate::finding::{Severity, Violation};
use crate::symbol::SourceLocation;
use crate::{RunInfo, ToolInfo};
use serde::{Deserialize, Serialize};

/// Result of a `check` run over a set of units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub schema: String,
    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    pub verdict: Verdict,

    #[serde(default)]
    pub findings: Vec<Finding>,

    #[serde(default)]
    pub inputs: CheckInputs,
}

impl CheckReport {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::FIELDFIX_CHECK_V1.to_string(),
            tool,
            run: RunInfo::default(),
            verdict: Verdict::default(),
            findings: vec![],
            inputs: CheckInputs::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(default)]
    pub status: VerdictStatus,

    #[serde(default)]
    pub counts: Counts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Pass,
    Warn,
    Fail,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub findings: u64,
    pub info: u64,
    pub warn: u64,
    pub error: u64,
}

impl Counts {
    pub fn tally(findings: &[Finding]) -> Self {
        let mut counts = Counts {
            findings: findings.len() as u64,
            ..Counts::default()
        };
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warn => counts.warn += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn status(&self) -> VerdictStatus {
        if self.error > 0 {
            VerdictStatus::Fail
        } else if self.findings > 0 {
            VerdictStatus::Warn
        } else {
            VerdictStatus::Pass
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,

    /// Name of the offending field.
    pub field: String,
    pub location: SourceLocation,

    /// Stable key for deduplication across runs.
    pub fingerprint: String,
}

impl Finding {
    /// The violation this finding reports, as the fixer consumes it.
    pub fn violation(&self) -> Violation {
        Violation {
            name: self.field.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInputs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<InputFailure>,
}

/// Record of a unit file that failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFailure {
    pub path: String,
    pub reason: String,
}
