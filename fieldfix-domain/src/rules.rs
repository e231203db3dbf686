use crate::classify::classify;
use fieldfix_types::{MemberKind, PUBLIC_FIELD, RuleDescriptor, Violation};

pub trait Rule: Send + Sync {
    fn descriptor(&self) -> RuleDescriptor;

    fn id(&self) -> &'static str {
        self.descriptor().id
    }

    fn check(&self, member: &MemberKind) -> Option<Violation>;
}

/// `PublicField`: public mutable instance fields should be properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicFieldRule;

impl Rule for PublicFieldRule {
    fn descriptor(&self) -> RuleDescriptor {
        PUBLIC_FIELD
    }

    fn check(&self, member: &MemberKind) -> Option<Violation> {
        member.as_field().and_then(classify)
    }
}

pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(PublicFieldRule)]
}
