//! Rule explanations for the `fieldfix explain` command.

use fieldfix_types::{PUBLIC_FIELD, RuleDescriptor};

#[derive(Debug, Clone)]
pub struct RuleExplanation {
    /// Short user-facing key (e.g., "public-field").
    pub key: &'static str,
    pub descriptor: RuleDescriptor,
    /// What the rule reports and what it leaves alone.
    pub description: &'static str,
    /// Name of the code action offered for a finding.
    pub fix_title: &'static str,
    /// What `fieldfix fix` does to a finding.
    pub fix: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

pub static RULE_REGISTRY: &[RuleExplanation] = &[RuleExplanation {
    key: "public-field",
    descriptor: PUBLIC_FIELD,
    description: r#"Reports a field declared inside a type when it is public and carries none of
these modifiers: const, static, abstract, virtual, override, readonly, sealed,
extern.

Public mutable instance fields expose storage directly. Callers bind to the field
itself, so adding validation or change notification later breaks them."#,
    fix_title: "Encapsulate field",
    fix: r#"The declaration is replaced by two members at the same place:

  - a private backing field named `_` + the name with its first letter lowered
  - a public property named after the field with its first letter raised,
    whose getter returns the backing field and whose setter assigns `value` to it

Leading underscores are stripped before deriving names. The initializer moves to
the backing field unless `--no-preserve-initializer` is given or
`[fix] preserve_initializer = false` is set in fieldfix.toml.

Declarations with several declarators (`public int x, y;`) are skipped."#,
    before: "public int score = 10;",
    after: r#"private int _score = 10;
public int Score
{
    get { return _score; }
    set { _score = value; }
}"#,
}];

/// Find a rule by key or id, ignoring case and `_`/`-` differences.
pub fn lookup_rule(query: &str) -> Option<&'static RuleExplanation> {
    let query_lower = query.to_lowercase();
    let query_normalized = query_lower.replace('_', "-");

    RULE_REGISTRY.iter().find(|rule| {
        rule.key == query_normalized
            || rule.descriptor.id.to_lowercase() == query_lower
            || rule.key.replace('-', "") == query_normalized.replace('-', "")
    })
}

pub fn list_rule_keys() -> Vec<&'static str> {
    RULE_REGISTRY.iter().map(|r| r.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        let rule = lookup_rule("public-field").expect("should find public-field");
        assert_eq!(rule.descriptor.id, "PublicField");
        assert_eq!(rule.fix_title, "Encapsulate field");
    }

    #[test]
    fn test_lookup_by_id_case_insensitive() {
        assert!(lookup_rule("PublicField").is_some());
        assert!(lookup_rule("publicfield").is_some());
        assert!(lookup_rule("PUBLIC_FIELD").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup_rule("private-field").is_none());
    }

    #[test]
    fn test_registry_matches_builtin_rules() {
        let ids: Vec<&str> = RULE_REGISTRY.iter().map(|r| r.descriptor.id).collect();
        let builtin: Vec<&str> = fieldfix_domain::builtin_rules()
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, builtin);
        assert_eq!(list_rule_keys(), vec!["public-field"]);
    }
}
