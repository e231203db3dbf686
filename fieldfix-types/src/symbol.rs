use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Private,
    Protected,
    Internal,
    Public,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accessibility::Private => "private",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::Public => "public",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::PrivateProtected => "private protected",
        }
    }
}

/// Where a symbol was declared.
///
/// Byte offsets into the unit's source text as reported by the host front-end. Consumers other
/// than the fixer treat this as an opaque handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    pub path: Utf8PathBuf,
    pub start: u64,
    pub end: u64,
}

impl SourceLocation {
    pub fn new(path: impl Into<Utf8PathBuf>, start: u64, end: u64) -> Self {
        Self {
            path: path.into(),
            start,
            end,
        }
    }
}

/// Declared metadata of one field symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_override: bool,
    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub is_sealed: bool,
    #[serde(default)]
    pub is_extern: bool,

    pub location: SourceLocation,
}

impl FieldMetadata {
    /// A plain instance field: every flag cleared.
    pub fn new(
        name: impl Into<String>,
        accessibility: Accessibility,
        location: SourceLocation,
    ) -> Self {
        Self {
            name: name.into(),
            accessibility,
            is_const: false,
            is_static: false,
            is_abstract: false,
            is_virtual: false,
            is_override: false,
            is_read_only: false,
            is_sealed: false,
            is_extern: false,
            location,
        }
    }
}

/// A declared member, tagged once at the symbol boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum MemberKind {
    Field(FieldMetadata),
    Other {
        name: String,
        location: SourceLocation,
    },
}

impl MemberKind {
    pub fn name(&self) -> &str {
        match self {
            MemberKind::Field(f) => &f.name,
            MemberKind::Other { name, .. } => name,
        }
    }

    pub fn as_field(&self) -> Option<&FieldMetadata> {
        match self {
            MemberKind::Field(f) => Some(f),
            MemberKind::Other { .. } => None,
        }
    }
}
