use fieldfix_types::check::{CheckReport, VerdictStatus};
use fieldfix_types::fix::FixReport;

pub fn render_check_md(report: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str("# fieldfix check\n\n");
    out.push_str(&format!(
        "- Verdict: `{}`\n",
        verdict_label(report.verdict.status)
    ));
    out.push_str(&format!(
        "- Findings: {} (error {}, warn {}, info {})\n",
        report.verdict.counts.findings,
        report.verdict.counts.error,
        report.verdict.counts.warn,
        report.verdict.counts.info
    ));
    out.push_str(&format!(
        "- Units: {} loaded, {} failed\n\n",
        report.inputs.available.len(),
        report.inputs.failed.len()
    ));

    if !report.inputs.failed.is_empty() {
        out.push_str("## Failed inputs\n\n");
        for f in &report.inputs.failed {
            out.push_str(&format!("- `{}`: {}\n", f.path, f.reason));
        }
        out.push('\n');
    }

    out.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        out.push_str("_No findings._\n");
        return out;
    }

    for f in &report.findings {
        out.push_str(&format!(
            "- `{}` {} at `{}`:{} ({})\n",
            f.rule_id,
            f.message,
            f.location.path,
            f.location.start,
            f.severity.as_str()
        ));
    }

    out
}

pub fn render_fix_md(report: &FixReport) -> String {
    let mut out = String::new();
    out.push_str("# fieldfix fix\n\n");
    out.push_str(&format!(
        "- Mode: {}\n",
        if report.written { "write" } else { "dry run" }
    ));
    out.push_str(&format!(
        "- Attempted: {}\n- Applied: {}\n- Skipped: {}\n- Failed: {}\n- Units modified: {}\n\n",
        report.summary.attempted,
        report.summary.applied,
        report.summary.skipped,
        report.summary.failed,
        report.summary.units_modified
    ));

    if !report.inputs_failed.is_empty() {
        out.push_str("## Failed inputs\n\n");
        for f in &report.inputs_failed {
            out.push_str(&format!("- `{}`: {}\n", f.path, f.reason));
        }
        out.push('\n');
    }

    out.push_str("## Results\n\n");
    if report.results.is_empty() {
        out.push_str("_No results._\n");
        return out;
    }

    for (i, r) in report.results.iter().enumerate() {
        out.push_str(&format!("### {}. `{}` in `{}`\n\n", i + 1, r.field, r.path));
        out.push_str(&format!("- Status: `{}`\n", r.status.as_str()));
        if let (Some(field), Some(property)) = (&r.backing_field, &r.property) {
            out.push_str(&format!("- Backing field: `{}`\n", field));
            out.push_str(&format!("- Property: `{}`\n", property));
        }
        if let Some(msg) = &r.message {
            out.push_str(&format!("- Message: {}\n", msg));
        }
        out.push('\n');
    }

    if !report.units.is_empty() {
        out.push_str("## Units changed\n\n");
        for u in &report.units {
            out.push_str(&format!(
                "- `{}` {} → {}\n",
                u.path,
                short_hash(&u.sha256_before),
                short_hash(&u.sha256_after)
            ));
        }
    }

    out
}

fn verdict_label(status: VerdictStatus) -> &'static str {
    match status {
        VerdictStatus::Pass => "pass",
        VerdictStatus::Warn => "warn",
        VerdictStatus::Fail => "fail",
        VerdictStatus::Unknown => "unknown",
    }
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}
