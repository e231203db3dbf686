//! Typed views over [`SyntaxNode`].

use crate::cursor::SyntaxNode;
use crate::node::{AccessorKind, Modifier, NodeKind};

/// A typed wrapper that is only constructible for nodes of one kind.
pub trait AstNode: Sized {
    fn can_cast(kind: &NodeKind) -> bool;

    fn cast(node: SyntaxNode) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $pat:pat) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: &NodeKind) -> bool {
                matches!(kind, $pat)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self { syntax: node })
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(TypeDeclaration, NodeKind::TypeDeclaration { .. });
ast_node!(FieldDeclaration, NodeKind::FieldDeclaration { .. });
ast_node!(VariableDeclarator, NodeKind::VariableDeclarator { .. });
ast_node!(PropertyDeclaration, NodeKind::PropertyDeclaration { .. });
ast_node!(Accessor, NodeKind::Accessor { .. });
ast_node!(MethodDeclaration, NodeKind::MethodDeclaration { .. });
ast_node!(Block, NodeKind::Block);

/// Nearest node at or above `node` that casts to `T`.
///
/// The walk starts with `node` itself and follows parent links; it returns `None` once the root
/// has been checked.
pub fn find_ancestor_of_type<T: AstNode>(node: &SyntaxNode) -> Option<T> {
    node.ancestors().find_map(T::cast)
}

fn first_type_ref(node: &SyntaxNode) -> Option<SyntaxNode> {
    node.children()
        .find(|c| matches!(c.kind(), NodeKind::TypeRef { .. }))
}

fn first_child<T: AstNode>(node: &SyntaxNode) -> Option<T> {
    node.children().find_map(T::cast)
}

impl TypeDeclaration {
    pub fn name(&self) -> &str {
        match self.syntax.kind() {
            NodeKind::TypeDeclaration { name, .. } => name,
            _ => "",
        }
    }

    pub fn members(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.syntax.children()
    }
}

impl FieldDeclaration {
    pub fn modifiers(&self) -> &[Modifier] {
        match self.syntax.kind() {
            NodeKind::FieldDeclaration { modifiers } => modifiers,
            _ => &[],
        }
    }

    /// The `type_ref` child, if the host supplied one.
    pub fn declared_type(&self) -> Option<SyntaxNode> {
        first_type_ref(&self.syntax)
    }

    pub fn declarators(&self) -> impl Iterator<Item = VariableDeclarator> + '_ {
        self.syntax.children().filter_map(VariableDeclarator::cast)
    }
}

impl VariableDeclarator {
    pub fn name(&self) -> &str {
        match self.syntax.kind() {
            NodeKind::VariableDeclarator { name, .. } => name,
            _ => "",
        }
    }

    pub fn initializer(&self) -> Option<&str> {
        match self.syntax.kind() {
            NodeKind::VariableDeclarator { initializer, .. } => initializer.as_deref(),
            _ => None,
        }
    }
}

impl PropertyDeclaration {
    pub fn modifiers(&self) -> &[Modifier] {
        match self.syntax.kind() {
            NodeKind::PropertyDeclaration { modifiers, .. } => modifiers,
            _ => &[],
        }
    }

    pub fn name(&self) -> &str {
        match self.syntax.kind() {
            NodeKind::PropertyDeclaration { name, .. } => name,
            _ => "",
        }
    }

    pub fn declared_type(&self) -> Option<SyntaxNode> {
        first_type_ref(&self.syntax)
    }

    pub fn accessors(&self) -> impl Iterator<Item = Accessor> + '_ {
        self.syntax.children().filter_map(Accessor::cast)
    }

    pub fn accessor(&self, kind: AccessorKind) -> Option<Accessor> {
        self.accessors().find(|a| a.kind() == Some(kind))
    }
}

impl Accessor {
    pub fn kind(&self) -> Option<AccessorKind> {
        match self.syntax.kind() {
            NodeKind::Accessor { accessor } => Some(*accessor),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<Block> {
        first_child(&self.syntax)
    }
}

impl MethodDeclaration {
    pub fn name(&self) -> &str {
        match self.syntax.kind() {
            NodeKind::MethodDeclaration { name, .. } => name,
            _ => "",
        }
    }

    pub fn body(&self) -> Option<Block> {
        first_child(&self.syntax)
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.syntax.children()
    }
}
