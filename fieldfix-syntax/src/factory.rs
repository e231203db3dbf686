//! Constructors for synthesized nodes.
//!
//! Everything built here has no span; use [`spanned`] to attach one when building trees by hand.

use crate::node::{AccessorKind, Modifier, Node, NodeKind, TextSpan};
use std::sync::Arc;

pub fn spanned(node: Arc<Node>, span: TextSpan) -> Arc<Node> {
    Arc::new(Node::new(
        node.kind().clone(),
        Some(span),
        node.children().iter().cloned(),
    ))
}

pub fn compilation_unit(members: impl IntoIterator<Item = Arc<Node>>) -> Arc<Node> {
    Arc::new(Node::new(NodeKind::CompilationUnit, None, members))
}

pub fn type_declaration(
    keyword: &str,
    name: &str,
    modifiers: &[Modifier],
    members: impl IntoIterator<Item = Arc<Node>>,
) -> Arc<Node> {
    Arc::new(Node::new(
        NodeKind::TypeDeclaration {
            keyword: keyword.to_string(),
            name: name.to_string(),
            modifiers: modifiers.to_vec(),
        },
        None,
        members,
    ))
}

pub fn type_ref(name: &str) -> Arc<Node> {
    Arc::new(Node::leaf(
        NodeKind::TypeRef {
            name: name.to_string(),
        },
        None,
    ))
}

pub fn variable_declarator(name: &str, initializer: Option<&str>) -> Arc<Node> {
    Arc::new(Node::leaf(
        NodeKind::VariableDeclarator {
            name: name.to_string(),
            initializer: initializer.map(str::to_string),
        },
        None,
    ))
}

pub fn field_declaration(
    modifiers: &[Modifier],
    ty: Arc<Node>,
    declarator: Arc<Node>,
) -> Arc<Node> {
    Arc::new(Node::new(
        NodeKind::FieldDeclaration {
            modifiers: modifiers.to_vec(),
        },
        None,
        [ty, declarator],
    ))
}

pub fn property_declaration(
    modifiers: &[Modifier],
    ty: Arc<Node>,
    name: &str,
    accessors: impl IntoIterator<Item = Arc<Node>>,
) -> Arc<Node> {
    Arc::new(Node::new(
        NodeKind::PropertyDeclaration {
            modifiers: modifiers.to_vec(),
            name: name.to_string(),
        },
        None,
        std::iter::once(ty).chain(accessors),
    ))
}

pub fn accessor(kind: AccessorKind, statements: impl IntoIterator<Item = Arc<Node>>) -> Arc<Node> {
    Arc::new(Node::new(
        NodeKind::Accessor { accessor: kind },
        None,
        [block(statements)],
    ))
}

pub fn method_declaration(
    modifiers: &[Modifier],
    return_type: Arc<Node>,
    name: &str,
    parameters: &str,
    statements: impl IntoIterator<Item = Arc<Node>>,
) -> Arc<Node> {
    Arc::new(Node::new(
        NodeKind::MethodDeclaration {
            modifiers: modifiers.to_vec(),
            name: name.to_string(),
            parameters: parameters.to_string(),
        },
        None,
        [return_type, block(statements)],
    ))
}

pub fn block(statements: impl IntoIterator<Item = Arc<Node>>) -> Arc<Node> {
    Arc::new(Node::new(NodeKind::Block, None, statements))
}

pub fn return_statement(expression: &str) -> Arc<Node> {
    Arc::new(Node::leaf(
        NodeKind::ReturnStatement {
            expression: expression.to_string(),
        },
        None,
    ))
}

pub fn assignment_statement(target: &str, value: &str) -> Arc<Node> {
    Arc::new(Node::leaf(
        NodeKind::AssignmentStatement {
            target: target.to_string(),
            value: value.to_string(),
        },
        None,
    ))
}

pub fn statement(text: &str) -> Arc<Node> {
    Arc::new(Node::leaf(
        NodeKind::Statement {
            text: text.to_string(),
        },
        None,
    ))
}
