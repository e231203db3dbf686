//! Configuration file loading for fieldfix.
//!
//! Discovers and loads `fieldfix.toml` from the repository root and merges it with CLI
//! arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fieldfix_domain::AnalyzerConfig;
use fieldfix_edit::EncapsulateOptions;
use fieldfix_types::Severity;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "fieldfix.toml";

/// Top-level configuration from fieldfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldfixConfig {
    pub analyzer: AnalyzerSection,
    pub fix: FixSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzerSection {
    /// Field-name globs that are never reported.
    pub ignore: Vec<String>,

    /// Severity for every finding, overriding the rule default.
    pub severity: Option<Severity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixSection {
    /// Carry a field's initializer over to the rewritten backing field.
    pub preserve_initializer: bool,
}

impl Default for FixSection {
    fn default() -> Self {
        Self {
            preserve_initializer: true,
        }
    }
}

pub fn discover_config(repo_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

pub fn load_config(path: &Utf8Path) -> anyhow::Result<FieldfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<FieldfixConfig> {
    let config: FieldfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from repo root, or return default if not found.
pub fn load_or_default(repo_root: &Utf8Path) -> anyhow::Result<FieldfixConfig> {
    match discover_config(repo_root) {
        Some(path) => load_config(&path),
        None => Ok(FieldfixConfig::default()),
    }
}

/// Builder for merging the config file with CLI arguments.
pub struct ConfigMerger {
    config: FieldfixConfig,
}

impl ConfigMerger {
    pub fn new(config: FieldfixConfig) -> Self {
        Self { config }
    }

    /// CLI `--ignore` patterns extend the config file list.
    pub fn merge_analyzer_args(&self, cli_ignore: &[String]) -> AnalyzerConfig {
        let mut ignore = self.config.analyzer.ignore.clone();
        for pattern in cli_ignore {
            if !ignore.contains(pattern) {
                ignore.push(pattern.clone());
            }
        }
        AnalyzerConfig {
            ignore,
            severity: self.config.analyzer.severity,
        }
    }

    /// `--no-preserve-initializer` wins over the config file.
    pub fn merge_fix_args(&self, no_preserve_initializer: bool) -> EncapsulateOptions {
        EncapsulateOptions {
            preserve_initializer: self.config.fix.preserve_initializer && !no_preserve_initializer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let contents = r#"
[analyzer]
ignore = ["legacy*", "_*"]
severity = "error"

[fix]
preserve_initializer = false
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.analyzer.ignore, vec!["legacy*", "_*"]);
        assert_eq!(config.analyzer.severity, Some(Severity::Error));
        assert!(!config.fix.preserve_initializer);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.analyzer.ignore.is_empty());
        assert_eq!(config.analyzer.severity, None);
        assert!(config.fix.preserve_initializer);
    }

    #[test]
    fn test_parse_rejects_unknown_severity() {
        let err = parse_config("[analyzer]\nseverity = \"fatal\"\n").expect_err("bad severity");
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_merge_analyzer_args_cli_extends() {
        let config = FieldfixConfig {
            analyzer: AnalyzerSection {
                ignore: vec!["legacy*".to_string()],
                severity: Some(Severity::Info),
            },
            ..Default::default()
        };
        let merged = ConfigMerger::new(config)
            .merge_analyzer_args(&["tmp?".to_string(), "legacy*".to_string()]);

        assert_eq!(merged.ignore, vec!["legacy*", "tmp?"]);
        assert_eq!(merged.severity, Some(Severity::Info));
    }

    #[test]
    fn test_merge_fix_args_cli_disables_initializer() {
        let merger = ConfigMerger::new(FieldfixConfig::default());
        assert!(merger.merge_fix_args(false).preserve_initializer);
        assert!(!merger.merge_fix_args(true).preserve_initializer);
    }

    #[test]
    fn test_merge_fix_args_config_disables_initializer() {
        let config = parse_config("[fix]\npreserve_initializer = false\n").unwrap();
        let merged = ConfigMerger::new(config).merge_fix_args(false);
        assert!(!merged.preserve_initializer);
    }

    #[test]
    fn test_load_or_default_reads_file_when_present() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        assert!(discover_config(&root).is_none());
        assert!(load_or_default(&root).expect("default").analyzer.ignore.is_empty());

        std::fs::write(
            root.join(CONFIG_FILE_NAME),
            "[analyzer]\nignore = [\"x\"]\n",
        )
        .expect("write config");
        assert!(discover_config(&root).is_some());
        assert_eq!(load_or_default(&root).expect("load").analyzer.ignore, vec!["x"]);
    }
}
