mod config;
mod explain;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use config::ConfigMerger;
use fieldfix_domain::{Analyzer, TreeSymbols};
use fieldfix_edit::{fix_violations, render_patch};
use fieldfix_render::{render_check_md, render_fix_md, render_source};
use fieldfix_types::check::{Finding, InputFailure};
use fieldfix_types::fix::{FixReport, FixResult, UnitChange};
use fieldfix_types::{ToolInfo, Violation};
use fieldfix_units::{UnitFile, load_units, read_unit};
use fs_err as fs;
use sha2::{Digest, Sha256};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fieldfix",
    version,
    about = "Reports public fields and rewrites them into private fields with properties."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze unit files and write a findings report.
    Check(CheckArgs),
    /// Encapsulate every reported field (default: dry-run).
    Fix(FixArgs),
    /// Explain what a rule reports and how it is fixed.
    Explain(ExplainArgs),
    /// List all available rules.
    ListRules(ListRulesArgs),
    /// Print a unit file as source text.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct DirArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Directory scanned for `*.unit.json` files (default: <repo_root>/units).
    #[arg(long)]
    units_dir: Option<Utf8PathBuf>,

    /// Output directory for fieldfix artifacts (default: <repo_root>/artifacts/fieldfix).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Field-name globs to ignore, in addition to fieldfix.toml.
    #[arg(long)]
    ignore: Vec<String>,
}

impl DirArgs {
    fn units_dir(&self) -> Utf8PathBuf {
        self.units_dir
            .clone()
            .unwrap_or_else(|| self.repo_root.join("units"))
    }

    fn out_dir(&self) -> Utf8PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| self.repo_root.join("artifacts").join("fieldfix"))
    }
}

#[derive(Debug, Parser)]
struct CheckArgs {
    #[command(flatten)]
    dirs: DirArgs,
}

#[derive(Debug, Parser)]
struct FixArgs {
    #[command(flatten)]
    dirs: DirArgs,

    /// Rewrite unit files in place. If omitted, only artifacts are emitted.
    #[arg(long, default_value_t = false)]
    write: bool,

    /// Drop field initializers instead of moving them to the backing field.
    #[arg(long, default_value_t = false)]
    no_preserve_initializer: bool,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Rule key or id to explain (e.g., "public-field", "PublicField").
    rule: String,
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct RenderArgs {
    /// Path to a `*.unit.json` file.
    unit: Utf8PathBuf,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Fix(args) => cmd_fix(args),
        Command::Explain(args) => cmd_explain(args),
        Command::ListRules(args) => cmd_list_rules(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let started_at = Utc::now();
    let units_dir = args.dirs.units_dir();
    let out_dir = args.dirs.out_dir();

    fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir))?;

    let file_config =
        config::load_or_default(&args.dirs.repo_root).context("load fieldfix.toml config")?;
    let analyzer_config = ConfigMerger::new(file_config).merge_analyzer_args(&args.dirs.ignore);
    debug!(
        "merged config: ignore={:?}, severity={:?}",
        analyzer_config.ignore, analyzer_config.severity
    );

    let units = load_units(&units_dir)
        .with_context(|| format!("load units from {}", units_dir))?;

    let mut report = Analyzer::new().analyze(&analyzer_config, &units, tool_info());
    report.run.started_at = Some(started_at);
    report.run.ended_at = Some(Utc::now());

    write_json(&out_dir.join("report.json"), &report)?;
    fs::write(out_dir.join("report.md"), render_check_md(&report))?;

    info!("wrote check report to {}", out_dir);
    Ok(())
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<()> {
    let started_at = Utc::now();
    let units_dir = args.dirs.units_dir();
    let out_dir = args.dirs.out_dir();

    fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir))?;

    let file_config =
        config::load_or_default(&args.dirs.repo_root).context("load fieldfix.toml config")?;
    let merger = ConfigMerger::new(file_config);
    let analyzer_config = merger.merge_analyzer_args(&args.dirs.ignore);
    let opts = merger.merge_fix_args(args.no_preserve_initializer);
    debug!(
        "merged config: ignore={:?}, preserve_initializer={}",
        analyzer_config.ignore, opts.preserve_initializer
    );

    let units = load_units(&units_dir)
        .with_context(|| format!("load units from {}", units_dir))?;

    let analyzer = Analyzer::new();
    let mut report = FixReport::new(tool_info());
    report.written = args.write;
    let mut patch = String::new();

    for loaded in &units {
        let unit = match &loaded.unit {
            Ok(unit) => unit,
            Err(err) => {
                warn!(path = %loaded.path, error = %err, "skipping unit that failed to load");
                report.inputs_failed.push(InputFailure {
                    path: loaded.path.to_string(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let tree = unit.syntax_tree();
        let findings = analyzer.findings(
            &analyzer_config,
            &TreeSymbols::new(unit.path.clone(), tree.clone()),
        );
        if findings.is_empty() {
            continue;
        }

        let violations: Vec<Violation> = findings.iter().map(Finding::violation).collect();
        let outcome = fix_violations(&tree, &violations, &opts);

        for (finding, fix) in findings.iter().zip(&outcome.fixes) {
            report.summary.record(fix.status);
            report.results.push(FixResult {
                fingerprint: finding.fingerprint.clone(),
                path: finding.location.path.to_string(),
                field: finding.field.clone(),
                status: fix.status,
                message: fix.message.clone(),
                backing_field: fix.names.as_ref().map(|n| n.field.clone()),
                property: fix.names.as_ref().map(|n| n.property.clone()),
            });
        }

        if outcome.applied() == 0 {
            continue;
        }

        let before = render_source(&tree);
        let after = render_source(&outcome.tree);
        patch.push_str(&render_patch(unit.path.as_str(), &before, &after));

        report.units.push(UnitChange {
            path: loaded.path.to_string(),
            sha256_before: sha256_hex(&before),
            sha256_after: sha256_hex(&after),
        });
        report.summary.units_modified += 1;

        if args.write {
            let rewritten = UnitFile::from_tree(unit.path.clone(), &outcome.tree);
            fs::write(&loaded.path, rewritten.to_json_pretty()?)
                .with_context(|| format!("write {}", loaded.path))?;
            info!(path = %loaded.path, fixed = outcome.applied(), "rewrote unit");
        }
    }

    report.run.started_at = Some(started_at);
    report.run.ended_at = Some(Utc::now());

    write_json(&out_dir.join("fix.json"), &report)?;
    fs::write(out_dir.join("fix.md"), render_fix_md(&report))?;
    fs::write(out_dir.join("patch.diff"), &patch)?;

    info!(
        applied = report.summary.applied,
        skipped = report.summary.skipped,
        failed = report.summary.failed,
        "wrote fix artifacts to {}",
        out_dir
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let unit = read_unit(&args.unit).with_context(|| format!("read unit {}", args.unit))?;
    print!("{}", render_source(&unit.syntax_tree()));
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "fieldfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        commit: None,
    }
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    use explain::{list_rule_keys, lookup_rule};

    let Some(rule) = lookup_rule(&args.rule) else {
        let available = list_rule_keys().join(", ");
        anyhow::bail!(
            "Unknown rule: '{}'\n\nAvailable rules: {}",
            args.rule,
            available
        );
    };
    let d = &rule.descriptor;

    println!("================================================================================");
    println!("RULE: {}", d.title);
    println!("================================================================================");
    println!();
    println!("Key:       {}", rule.key);
    println!("Rule ID:   {}", d.id);
    println!("Category:  {}", d.category);
    println!("Severity:  {}", d.default_severity.as_str());
    println!("Message:   {}", d.message_format);
    println!();

    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", rule.description);
    println!();

    println!("FIX: {}", rule.fix_title);
    println!("--------------------------------------------------------------------------------");
    println!("{}", rule.fix);
    println!();

    println!("EXAMPLE");
    println!("--------------------------------------------------------------------------------");
    println!("Before:");
    println!();
    for line in rule.before.lines() {
        println!("    {}", line);
    }
    println!();
    println!("After:");
    println!();
    for line in rule.after.lines() {
        println!("    {}", line);
    }
    println!();

    Ok(())
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    use explain::RULE_REGISTRY;

    match args.format {
        OutputFormat::Text => {
            println!("Available rules:\n");
            println!("  {:<16} {:<14} {:<10} TITLE", "KEY", "ID", "SEVERITY");
            println!("  {:<16} {:<14} {:<10} -----", "---", "--", "--------");
            for rule in RULE_REGISTRY {
                println!(
                    "  {:<16} {:<14} {:<10} {}",
                    rule.key,
                    rule.descriptor.id,
                    rule.descriptor.default_severity.as_str(),
                    rule.descriptor.title
                );
            }
            println!();
            println!("Use 'fieldfix explain <key>' for details.");
        }
        OutputFormat::Json => {
            let rules: Vec<_> = RULE_REGISTRY
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "key": r.key,
                        "id": r.descriptor.id,
                        "title": r.descriptor.title,
                        "category": r.descriptor.category,
                        "severity": r.descriptor.default_severity.as_str(),
                        "enabled_by_default": r.descriptor.enabled_by_default,
                        "fix": r.fix_title,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}
