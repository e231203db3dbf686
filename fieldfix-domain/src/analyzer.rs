use crate::ports::{SymbolSource, TreeSymbols};
use crate::rules::{Rule, builtin_rules};
use fieldfix_types::check::{CheckReport, Counts, Finding, InputFailure, Verdict};
use fieldfix_types::{Severity, SourceLocation, ToolInfo};
use fieldfix_units::LoadedUnit;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Field-name globs (`*`, `?`) that are never reported.
    pub ignore: Vec<String>,

    /// Overrides each rule's default severity.
    pub severity: Option<Severity>,
}

pub struct Analyzer {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Findings for one unit, filtered by `config.ignore` and sorted.
    pub fn findings(&self, config: &AnalyzerConfig, source: &dyn SymbolSource) -> Vec<Finding> {
        let members = source.members();
        let mut findings = Vec::new();

        for rule in &self.rules {
            let descriptor = rule.descriptor();
            if !descriptor.enabled_by_default {
                continue;
            }
            for member in &members {
                let Some(violation) = rule.check(member) else {
                    continue;
                };
                if is_ignored(&config.ignore, &violation.name) {
                    debug!(field = %violation.name, "finding ignored by config");
                    continue;
                }
                findings.push(Finding {
                    rule_id: descriptor.id.to_string(),
                    severity: config.severity.unwrap_or(descriptor.default_severity),
                    message: descriptor.message(&violation.name),
                    fingerprint: finding_fingerprint(
                        descriptor.id,
                        &violation.location,
                        &violation.name,
                    ),
                    field: violation.name,
                    location: violation.location,
                });
            }
        }

        findings.sort_by(|a, b| stable_finding_key(a).cmp(&stable_finding_key(b)));
        debug!(path = %source.path(), findings = findings.len(), "analyzed unit");
        findings
    }

    /// Run every rule over every loaded unit and assemble a check report.
    ///
    /// Units that failed to load are listed under `inputs.failed`; they never abort the run.
    pub fn analyze(
        &self,
        config: &AnalyzerConfig,
        units: &[LoadedUnit],
        tool: ToolInfo,
    ) -> CheckReport {
        let mut report = CheckReport::new(tool);

        for loaded in units {
            match &loaded.unit {
                Ok(unit) => {
                    report.inputs.available.push(loaded.path.to_string());
                    let symbols = TreeSymbols::new(unit.path.clone(), unit.syntax_tree());
                    report.findings.extend(self.findings(config, &symbols));
                }
                Err(err) => report.inputs.failed.push(InputFailure {
                    path: loaded.path.to_string(),
                    reason: err.to_string(),
                }),
            }
        }

        report
            .findings
            .sort_by(|a, b| stable_finding_key(a).cmp(&stable_finding_key(b)));

        let counts = Counts::tally(&report.findings);
        report.verdict = Verdict {
            status: counts.status(),
            counts,
        };

        info!(
            units = report.inputs.available.len(),
            failed = report.inputs.failed.len(),
            findings = report.findings.len(),
            "analysis complete"
        );
        report
    }
}

fn is_ignored(patterns: &[String], name: &str) -> bool {
    patterns.iter().any(|p| glob_match(p, name))
}

fn stable_finding_key(f: &Finding) -> (&str, u64, &str, &str) {
    (
        f.location.path.as_str(),
        f.location.start,
        f.field.as_str(),
        f.rule_id.as_str(),
    )
}

/// Deterministic id for a finding: v5 UUID over rule, path, field name and offset.
pub fn finding_fingerprint(rule_id: &str, location: &SourceLocation, name: &str) -> String {
    const NAMESPACE: Uuid = Uuid::from_bytes([
        0x7a, 0x1f, 0x4e, 0x92, 0x3c, 0x0d, 0x4b, 0x6e, 0x9f, 0x21, 0x58, 0xc4, 0xd0, 0x3a, 0x6b,
        0x17,
    ]);

    let key = format!("{}|{}|{}|{}", rule_id, location.path, name, location.start);
    Uuid::new_v5(&NAMESPACE, key.as_bytes()).to_string()
}

/// `*` matches any run of characters, `?` exactly one; everything else is literal.
fn glob_match(pattern: &str, name: &str) -> bool {
    let name: Vec<char> = name.chars().collect();
    // matched[j]: the pattern read so far matches name[..j].
    let mut matched = vec![false; name.len() + 1];
    matched[0] = true;

    for p in pattern.chars() {
        let mut next = vec![false; name.len() + 1];
        if p == '*' {
            next[0] = matched[0];
            for j in 1..=name.len() {
                next[j] = matched[j] || next[j - 1];
            }
        } else {
            for j in 1..=name.len() {
                next[j] = matched[j - 1] && (p == '?' || p == name[j - 1]);
            }
        }
        matched = next;
    }

    matched[name.len()]
}
