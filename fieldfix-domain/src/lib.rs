//! Domain logic: decide which declared fields break the public-field rule.
//!
//! This crate owns *what* is reported and in which order. Rewriting the offending declarations is
//! the job of `fieldfix-edit`.

mod analyzer;
mod classify;
mod ports;
mod rules;

pub use analyzer::{Analyzer, AnalyzerConfig, finding_fingerprint};
pub use classify::{classify, classify_members};
pub use ports::{SymbolSource, TreeSymbols};
pub use rules::{PublicFieldRule, Rule, builtin_rules};
