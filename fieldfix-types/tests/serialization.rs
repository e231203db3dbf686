use fieldfix_types::check::{CheckReport, Counts, Finding, VerdictStatus};
use fieldfix_types::fix::{FixReport, FixStatus, FixSummary};
use fieldfix_types::{Accessibility, FieldMetadata, MemberKind, Severity, SourceLocation, ToolInfo};
use pretty_assertions::assert_eq;

fn tool() -> ToolInfo {
    ToolInfo {
        name: "fieldfix".to_string(),
        version: Some("1.0.0".to_string()),
        commit: None,
    }
}

fn finding(severity: Severity) -> Finding {
    Finding {
        rule_id: "PublicField".to_string(),
        severity,
        message: "Field 'score' is public".to_string(),
        field: "score".to_string(),
        location: SourceLocation::new("src/Player.cs", 10, 15),
        fingerprint: "fp".to_string(),
    }
}

#[test]
fn accessibility_serializes_snake_case() {
    let v = serde_json::to_value(Accessibility::ProtectedInternal).expect("serialize");
    assert_eq!(v, serde_json::json!("protected_internal"));
    let v = serde_json::to_value(Accessibility::PrivateProtected).expect("serialize");
    assert_eq!(v, serde_json::json!("private_protected"));
}

#[test]
fn field_metadata_flags_default_to_false_when_absent() {
    let json = serde_json::json!({
        "name": "score",
        "accessibility": "public",
        "location": { "path": "a.cs", "start": 1, "end": 6 }
    });
    let meta: FieldMetadata = serde_json::from_value(json).expect("deserialize");
    assert_eq!(
        meta,
        FieldMetadata::new("score", Accessibility::Public, SourceLocation::new("a.cs", 1, 6))
    );
}

#[test]
fn member_kind_is_tagged() {
    let other = MemberKind::Other {
        name: "Run".to_string(),
        location: SourceLocation::new("a.cs", 0, 3),
    };
    let v = serde_json::to_value(&other).expect("serialize");
    assert_eq!(v["member"], "other");
    assert_eq!(other.name(), "Run");
    assert!(other.as_field().is_none());
}

#[test]
fn check_report_new_sets_schema() {
    let report = CheckReport::new(tool());
    assert_eq!(report.schema, fieldfix_types::schema::FIELDFIX_CHECK_V1);
    assert!(report.findings.is_empty());
    assert_eq!(report.verdict.status, VerdictStatus::Unknown);

    let v = serde_json::to_value(&report).expect("serialize");
    assert!(v["inputs"].get("failed").is_none());
    assert!(v["tool"].get("commit").is_none());
}

#[test]
fn counts_tally_and_status() {
    assert_eq!(Counts::tally(&[]).status(), VerdictStatus::Pass);

    let counts = Counts::tally(&[finding(Severity::Warn), finding(Severity::Info)]);
    assert_eq!(counts.findings, 2);
    assert_eq!(counts.warn, 1);
    assert_eq!(counts.info, 1);
    assert_eq!(counts.status(), VerdictStatus::Warn);

    let counts = Counts::tally(&[finding(Severity::Error)]);
    assert_eq!(counts.status(), VerdictStatus::Fail);
}

#[test]
fn fix_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(FixStatus::Applied).expect("serialize"),
        serde_json::json!("applied")
    );
    assert_eq!(
        serde_json::to_value(FixStatus::Skipped).expect("serialize"),
        serde_json::json!("skipped")
    );
}

#[test]
fn fix_summary_records_each_status() {
    let mut summary = FixSummary::default();
    summary.record(FixStatus::Applied);
    summary.record(FixStatus::Applied);
    summary.record(FixStatus::Failed);
    summary.record(FixStatus::Skipped);
    assert_eq!(
        summary,
        FixSummary {
            attempted: 4,
            applied: 2,
            failed: 1,
            skipped: 1,
            units_modified: 0,
        }
    );
}

#[test]
fn fix_report_new_is_dry_run() {
    let report = FixReport::new(tool());
    assert_eq!(report.schema, fieldfix_types::schema::FIELDFIX_FIX_V1);
    assert!(!report.written);
    assert!(report.results.is_empty());
}
