//! Shared DTOs (schemas-as-code) for the fieldfix workspace.
//!
//! # Design constraints
//! - Symbol and violation types are plain data; no behavior beyond small helpers.
//! - Report types are intended to be serialized to disk.
//! - Prefer adding optional fields over changing semantics.

pub mod check;
pub mod finding;
pub mod fix;
pub mod symbol;

pub use finding::{RuleDescriptor, Severity, Violation, PUBLIC_FIELD};
pub use symbol::{Accessibility, FieldMetadata, MemberKind, SourceLocation};

/// Schema identifiers.
pub mod schema {
    pub const FIELDFIX_UNIT_V1: &str = "fieldfix.unit.v1";
    pub const FIELDFIX_CHECK_V1: &str = "fieldfix.check.v1";
    pub const FIELDFIX_FIX_V1: &str = "fieldfix.fix.v1";
}

/// Tool identity stamped into every artifact.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
}
