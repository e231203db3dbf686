use archery::ArcK;
use rpds::Vector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Persistent child list; cloning shares the underlying nodes.
pub type NodeVector = Vector<Arc<Node>, ArcK>;

/// Half-open byte range `[start, end)` in the unit's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Declaration modifiers as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Const,
    Static,
    Abstract,
    Virtual,
    Override,
    Readonly,
    Sealed,
    Extern,
    Volatile,
    New,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Internal => "internal",
            Modifier::Const => "const",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Virtual => "virtual",
            Modifier::Override => "override",
            Modifier::Readonly => "readonly",
            Modifier::Sealed => "sealed",
            Modifier::Extern => "extern",
            Modifier::Volatile => "volatile",
            Modifier::New => "new",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Get,
    Set,
}

impl AccessorKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
        }
    }
}

fn default_type_keyword() -> String {
    "class".to_string()
}

/// What a node is, plus the data that is not expressed as child nodes.
///
/// Child layout per kind:
/// - `field_declaration`: one `type_ref`, then one or more `variable_declarator`s.
/// - `property_declaration`: one `type_ref`, then `accessor`s.
/// - `accessor`: an optional `block`.
/// - `method_declaration`: one `type_ref` (return type), then an optional `block`.
/// - `compilation_unit`, `namespace_declaration`, `type_declaration`: member declarations.
/// - `block`: statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    CompilationUnit,
    NamespaceDeclaration {
        name: String,
    },
    TypeDeclaration {
        #[serde(default = "default_type_keyword")]
        keyword: String,
        name: String,
        #[serde(default)]
        modifiers: Vec<Modifier>,
    },
    FieldDeclaration {
        #[serde(default)]
        modifiers: Vec<Modifier>,
    },
    VariableDeclarator {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initializer: Option<String>,
    },
    PropertyDeclaration {
        #[serde(default)]
        modifiers: Vec<Modifier>,
        name: String,
    },
    Accessor {
        accessor: AccessorKind,
    },
    MethodDeclaration {
        #[serde(default)]
        modifiers: Vec<Modifier>,
        name: String,
        #[serde(default)]
        parameters: String,
    },
    Block,
    ReturnStatement {
        expression: String,
    },
    AssignmentStatement {
        target: String,
        value: String,
    },
    /// Any statement the engine does not need to look inside.
    Statement {
        text: String,
    },
    TypeRef {
        name: String,
    },
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "compilation_unit",
            NodeKind::NamespaceDeclaration { .. } => "namespace_declaration",
            NodeKind::TypeDeclaration { .. } => "type_declaration",
            NodeKind::FieldDeclaration { .. } => "field_declaration",
            NodeKind::VariableDeclarator { .. } => "variable_declarator",
            NodeKind::PropertyDeclaration { .. } => "property_declaration",
            NodeKind::Accessor { .. } => "accessor",
            NodeKind::MethodDeclaration { .. } => "method_declaration",
            NodeKind::Block => "block",
            NodeKind::ReturnStatement { .. } => "return_statement",
            NodeKind::AssignmentStatement { .. } => "assignment_statement",
            NodeKind::Statement { .. } => "statement",
            NodeKind::TypeRef { .. } => "type_ref",
        }
    }
}

/// Immutable tree node.
///
/// `span` is `None` for nodes synthesized by a rewrite. Nodes that survive a rewrite keep the span
/// they had in the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    span: Option<TextSpan>,
    children: NodeVector,
}

impl Node {
    pub fn new(
        kind: NodeKind,
        span: Option<TextSpan>,
        children: impl IntoIterator<Item = Arc<Node>>,
    ) -> Self {
        Self {
            kind,
            span,
            children: children.into_iter().collect(),
        }
    }

    pub fn leaf(kind: NodeKind, span: Option<TextSpan>) -> Self {
        Self {
            kind,
            span,
            children: NodeVector::new_with_ptr_kind(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn span(&self) -> Option<TextSpan> {
        self.span
    }

    pub fn children(&self) -> &NodeVector {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Arc<Node>> {
        self.children.get(index)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Same kind and span, different children.
    pub fn with_children(&self, children: NodeVector) -> Node {
        Node {
            kind: self.kind.clone(),
            span: self.span,
            children,
        }
    }

    /// Total number of nodes in this subtree, walked iteratively.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().map(|c| c.as_ref()));
        }
        count
    }
}

// Children are released from a heap stack so dropping a deep tree does not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut stack = detach_children(&mut self.children);
        while let Some(child) = stack.pop() {
            if let Some(mut node) = Arc::into_inner(child) {
                stack.extend(detach_children(&mut node.children));
            }
        }
    }
}

fn detach_children(children: &mut NodeVector) -> Vec<Arc<Node>> {
    let detached = std::mem::replace(children, NodeVector::new_with_ptr_kind());
    detached.iter().cloned().collect()
}
