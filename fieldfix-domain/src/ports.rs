use camino::{Utf8Path, Utf8PathBuf};
use fieldfix_syntax::{
    AstNode, FieldDeclaration, MethodDeclaration, Modifier, NodeKind, PropertyDeclaration,
    SyntaxNode, SyntaxTree, TextSpan,
};
use fieldfix_types::{Accessibility, FieldMetadata, MemberKind, SourceLocation};

/// Declared members of one compilation unit.
///
/// Hosts with a real symbol table implement this directly; [`TreeSymbols`] derives the same
/// information from declaration modifiers.
pub trait SymbolSource {
    /// Source path reported in finding locations.
    fn path(&self) -> &Utf8Path;

    /// Members in document order.
    fn members(&self) -> Vec<MemberKind>;
}

/// `SymbolSource` backed by a syntax tree.
#[derive(Debug, Clone)]
pub struct TreeSymbols {
    path: Utf8PathBuf,
    tree: SyntaxTree,
}

impl TreeSymbols {
    pub fn new(path: impl Into<Utf8PathBuf>, tree: SyntaxTree) -> Self {
        Self {
            path: path.into(),
            tree,
        }
    }

    fn location(&self, span: Option<TextSpan>) -> SourceLocation {
        let span = span.unwrap_or(TextSpan::new(0, 0));
        SourceLocation::new(self.path.clone(), span.start as u64, span.end as u64)
    }

    fn field_members(&self, decl: &FieldDeclaration, out: &mut Vec<MemberKind>) {
        let modifiers = decl.modifiers();
        for declarator in decl.declarators() {
            let span = declarator.syntax().span().or(decl.syntax().span());
            let mut meta = FieldMetadata::new(
                declarator.name(),
                accessibility(modifiers),
                self.location(span),
            );
            meta.is_const = modifiers.contains(&Modifier::Const);
            meta.is_static = modifiers.contains(&Modifier::Static);
            meta.is_abstract = modifiers.contains(&Modifier::Abstract);
            meta.is_virtual = modifiers.contains(&Modifier::Virtual);
            meta.is_override = modifiers.contains(&Modifier::Override);
            meta.is_read_only = modifiers.contains(&Modifier::Readonly);
            meta.is_sealed = modifiers.contains(&Modifier::Sealed);
            meta.is_extern = modifiers.contains(&Modifier::Extern);
            out.push(MemberKind::Field(meta));
        }
    }

    fn other_member(&self, node: &SyntaxNode) -> Option<MemberKind> {
        let name = if let Some(p) = PropertyDeclaration::cast(node.clone()) {
            p.name().to_string()
        } else {
            MethodDeclaration::cast(node.clone())?.name().to_string()
        };
        Some(MemberKind::Other {
            name,
            location: self.location(node.span()),
        })
    }
}

impl SymbolSource for TreeSymbols {
    fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn members(&self) -> Vec<MemberKind> {
        let mut out = Vec::new();
        let mut stack = vec![self.tree.root()];

        while let Some(node) = stack.pop() {
            let in_type = node
                .parent()
                .is_some_and(|p| matches!(p.kind(), NodeKind::TypeDeclaration { .. }));

            match node.kind() {
                NodeKind::FieldDeclaration { .. } => {
                    if in_type && let Some(decl) = FieldDeclaration::cast(node.clone()) {
                        self.field_members(&decl, &mut out);
                    }
                }
                NodeKind::PropertyDeclaration { .. } | NodeKind::MethodDeclaration { .. } => {
                    if in_type && let Some(member) = self.other_member(&node) {
                        out.push(member);
                    }
                }
                NodeKind::CompilationUnit
                | NodeKind::NamespaceDeclaration { .. }
                | NodeKind::TypeDeclaration { .. } => {
                    let mut children: Vec<SyntaxNode> = node.children().collect();
                    children.reverse();
                    stack.extend(children);
                }
                _ => {}
            }
        }

        out
    }
}

fn accessibility(modifiers: &[Modifier]) -> Accessibility {
    let has = |m: Modifier| modifiers.contains(&m);
    if has(Modifier::Public) {
        Accessibility::Public
    } else if has(Modifier::Protected) && has(Modifier::Internal) {
        Accessibility::ProtectedInternal
    } else if has(Modifier::Private) && has(Modifier::Protected) {
        Accessibility::PrivateProtected
    } else if has(Modifier::Protected) {
        Accessibility::Protected
    } else if has(Modifier::Internal) {
        Accessibility::Internal
    } else {
        Accessibility::Private
    }
}
