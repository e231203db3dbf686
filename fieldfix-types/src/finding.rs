use crate::symbol::SourceLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    #[default]
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Static description of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Message template; `{0}` is replaced by the field name.
    pub message_format: &'static str,
    pub category: &'static str,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
}

impl RuleDescriptor {
    pub fn message(&self, name: &str) -> String {
        self.message_format.replace("{0}", name)
    }
}

pub const PUBLIC_FIELD: RuleDescriptor = RuleDescriptor {
    id: "PublicField",
    title: "Field is public",
    message_format: "Field '{0}' is public",
    category: "Syntax",
    default_severity: Severity::Warn,
    enabled_by_default: true,
};

/// A field that matched the public-mutable-instance-field rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub name: String,
    pub location: SourceLocation,
}

impl Violation {
    /// Byte offset the fixer should be triggered at.
    pub fn position(&self) -> usize {
        self.location.start as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_field_message_substitutes_name() {
        assert_eq!(PUBLIC_FIELD.message("Score"), "Field 'Score' is public");
    }

    #[test]
    fn severity_defaults_to_warn() {
        assert_eq!(Severity::default(), Severity::Warn);
        assert_eq!(Severity::default().as_str(), "warn");
    }
}
